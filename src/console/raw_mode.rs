//! Raw terminal mode for single-key and masked reads, with panic-safe
//! restoration.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set while some guard owns raw mode (read by the panic hook).
pub(crate) static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Keeps the terminal in raw mode for as long as it lives.
///
/// If raw mode was already on when the guard was created (a caller managing
/// the terminal itself), the guard leaves it on when dropped.
pub struct RawModeGuard {
    /// Whether this guard switched raw mode on and must switch it off
    owned: bool,
}

impl RawModeGuard {
    /// Enable raw mode and return a guard that restores cooked mode on drop.
    ///
    /// # Errors
    /// Returns an error if stdin is not a terminal or the mode switch fails.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        if is_raw_mode_enabled()? {
            return Ok(Self { owned: false });
        }

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
        log::debug!("Raw mode enabled");

        Ok(Self { owned: true })
    }

    /// Leave raw mode now instead of on drop.
    pub fn exit(&mut self) -> io::Result<()> {
        if self.owned {
            self.owned = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
            disable_raw_mode()?;
            log::debug!("Raw mode disabled");
        }
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.owned {
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);
            // Nothing useful to do with an error here
            let _ = disable_raw_mode();
        }
    }
}

/// Chain a panic hook that drops out of raw mode before the panic message
/// is printed, so the message is readable.
pub(crate) fn install_panic_hook() {
    static HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

    if HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
            let _ = disable_raw_mode();
        }
        original_hook(panic_info);
    }));
}
