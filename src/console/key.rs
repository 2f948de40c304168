//! Single key press reads.

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::queue;
use crossterm::style::Print;

use super::{ConsoleError, RawModeGuard};

/// Block until the next key press, skipping release/repeat events and
/// non-key events such as resizes. Raw mode must already be on.
pub(crate) fn next_key_press() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            return Ok(key);
        }
    }
}

/// Echo the visible form of a key the way a cooked terminal would.
pub fn echo_key_to<W: Write>(out: &mut W, code: KeyCode) -> io::Result<()> {
    match code {
        KeyCode::Char(c) => queue!(out, Print(c))?,
        KeyCode::Enter => queue!(out, Print('\n'))?,
        KeyCode::Tab => queue!(out, Print('\t'))?,
        _ => {}
    }
    out.flush()
}

/// Read one key press and echo it.
pub fn read_key() -> Result<KeyCode, ConsoleError> {
    read_key_intercept(false)
}

/// Read one key press; when `intercept` is set, the key is not echoed.
///
/// # Errors
/// Returns an error if stdin is not a terminal.
pub fn read_key_intercept(intercept: bool) -> Result<KeyCode, ConsoleError> {
    read_key_intercept_to(&mut io::stdout(), intercept)
}

/// Like [`read_key_intercept`], echoing to `out` instead of stdout.
pub fn read_key_intercept_to<W: Write>(
    out: &mut W,
    intercept: bool,
) -> Result<KeyCode, ConsoleError> {
    let key = {
        let _raw = RawModeGuard::enter()?;
        next_key_press()?
    };
    log::debug!("Read key {:?}", key.code);
    finish_key_to(out, key.code, intercept)?;
    Ok(key.code)
}

fn finish_key_to<W: Write>(out: &mut W, code: KeyCode, intercept: bool) -> io::Result<()> {
    if intercept {
        return Ok(());
    }
    echo_key_to(out, code)
}
