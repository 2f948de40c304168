//! Console interaction: colored output, line and key reads, masked password
//! entry, and screen/cursor/title control.
//!
//! All of it is a thin layer over `crossterm` with no state of its own. The
//! console itself is process-global, so output from several threads may
//! interleave.

mod color;
mod error;
mod input;
mod key;
mod output;
mod password;
mod raw_mode;
mod screen;
mod secret;

pub use color::{ConsoleColor, UnknownColor};
pub use error::ConsoleError;
pub use input::{
    Numeric, read_double, read_float, read_int, read_line_from, read_parsed_from, read_string,
    try_read_double, try_read_float, try_read_int, try_read_parsed_from,
};
pub use key::{echo_key_to, read_key, read_key_intercept, read_key_intercept_to};
pub use output::{
    write, write_color, write_color_to, write_line, write_line_color, write_line_color_to,
    write_line_to, write_to,
};
pub use password::{
    DEFAULT_MASK, PasswordPrompt, PromptStep, read_password, read_password_masked,
};
pub use raw_mode::RawModeGuard;
pub use screen::{
    clear, clear_color, clear_color_to, clear_to, clear_with_color, clear_with_color_to,
    set_bg_color, set_bg_color_to, set_color, set_color_to, set_cursor_position,
    set_cursor_position_to, set_fg_color, set_fg_color_to, set_title, set_title_to, window_size,
};
pub use secret::SecretBuffer;

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
