//! Plain and colored text output.
//!
//! Each operation comes in two forms: a `*_to` function that writes to any
//! [`Write`] implementation, and a wrapper that targets stdout.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};

use super::{ConsoleColor, ConsoleError};

/// Write `message` without a trailing newline and flush.
pub fn write_to<W: Write>(out: &mut W, message: &str) -> Result<(), ConsoleError> {
    queue!(out, Print(message))?;
    out.flush()?;
    Ok(())
}

/// Write `message` followed by a newline and flush.
pub fn write_line_to<W: Write>(out: &mut W, message: &str) -> Result<(), ConsoleError> {
    queue!(out, Print(message), Print('\n'))?;
    out.flush()?;
    Ok(())
}

/// Write `message` in `color`.
///
/// Colors are reset afterwards unless `keep_color` is set, in which case the
/// foreground color stays active for subsequent output.
pub fn write_color_to<W: Write>(
    out: &mut W,
    message: &str,
    color: ConsoleColor,
    keep_color: bool,
) -> Result<(), ConsoleError> {
    queue!(out, SetForegroundColor(color.into()), Print(message))?;
    finish_colored(out, keep_color)
}

/// Write `message` and a newline in `color`; see [`write_color_to`].
pub fn write_line_color_to<W: Write>(
    out: &mut W,
    message: &str,
    color: ConsoleColor,
    keep_color: bool,
) -> Result<(), ConsoleError> {
    queue!(out, SetForegroundColor(color.into()), Print(message))?;
    // Reset before the newline so the next line starts uncolored
    if !keep_color {
        queue!(out, ResetColor)?;
    }
    queue!(out, Print('\n'))?;
    out.flush()?;
    Ok(())
}

fn finish_colored<W: Write>(out: &mut W, keep_color: bool) -> Result<(), ConsoleError> {
    if !keep_color {
        queue!(out, ResetColor)?;
    }
    out.flush()?;
    Ok(())
}

/// Write `message` to stdout.
pub fn write(message: &str) -> Result<(), ConsoleError> {
    write_to(&mut io::stdout(), message)
}

/// Write `message` and a newline to stdout.
pub fn write_line(message: &str) -> Result<(), ConsoleError> {
    write_line_to(&mut io::stdout(), message)
}

/// Write `message` to stdout in `color`.
pub fn write_color(message: &str, color: ConsoleColor, keep_color: bool) -> Result<(), ConsoleError> {
    write_color_to(&mut io::stdout(), message, color, keep_color)
}

/// Write `message` and a newline to stdout in `color`.
pub fn write_line_color(
    message: &str,
    color: ConsoleColor,
    keep_color: bool,
) -> Result<(), ConsoleError> {
    write_line_color_to(&mut io::stdout(), message, color, keep_color)
}
