//! Screen, color, cursor and title control.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Colors, Print, ResetColor, SetBackgroundColor, SetColors, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, SetTitle};

use super::{ConsoleColor, ConsoleError};

/// Clear the whole screen and home the cursor.
pub fn clear_to<W: Write>(out: &mut W) -> Result<(), ConsoleError> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

/// Reset foreground and background to the terminal defaults.
pub fn clear_color_to<W: Write>(out: &mut W) -> Result<(), ConsoleError> {
    queue!(out, ResetColor)?;
    out.flush()?;
    Ok(())
}

/// Clear the screen, then paint every cell of a `columns` x `rows` window
/// with `color` and home the cursor.
///
/// With `keep_color` the fill color stays the active background, so later
/// output blends in; otherwise colors are reset.
pub fn clear_with_color_to<W: Write>(
    out: &mut W,
    color: ConsoleColor,
    keep_color: bool,
    (columns, rows): (u16, u16),
) -> Result<(), ConsoleError> {
    let fill: Color = color.into();
    let blank_row = " ".repeat(usize::from(columns));

    queue!(out, Clear(ClearType::All), SetColors(Colors::new(fill, fill)))?;
    for row in 0..rows {
        queue!(out, MoveTo(0, row), Print(&blank_row))?;
    }
    queue!(out, MoveTo(0, 0))?;

    if keep_color {
        queue!(out, SetForegroundColor(Color::Reset), SetBackgroundColor(fill))?;
    } else {
        queue!(out, ResetColor)?;
    }
    out.flush()?;
    Ok(())
}

/// Set the terminal window title.
pub fn set_title_to<W: Write>(out: &mut W, title: &str) -> Result<(), ConsoleError> {
    queue!(out, SetTitle(title))?;
    out.flush()?;
    Ok(())
}

pub fn set_fg_color_to<W: Write>(out: &mut W, color: ConsoleColor) -> Result<(), ConsoleError> {
    queue!(out, SetForegroundColor(color.into()))?;
    out.flush()?;
    Ok(())
}

pub fn set_bg_color_to<W: Write>(out: &mut W, color: ConsoleColor) -> Result<(), ConsoleError> {
    queue!(out, SetBackgroundColor(color.into()))?;
    out.flush()?;
    Ok(())
}

/// Set both colors; note the background comes first.
pub fn set_color_to<W: Write>(
    out: &mut W,
    background: ConsoleColor,
    foreground: ConsoleColor,
) -> Result<(), ConsoleError> {
    set_fg_color_to(out, foreground)?;
    set_bg_color_to(out, background)
}

/// Move the cursor to a zero-based `column`/`row`.
pub fn set_cursor_position_to<W: Write>(
    out: &mut W,
    column: u16,
    row: u16,
) -> Result<(), ConsoleError> {
    queue!(out, MoveTo(column, row))?;
    out.flush()?;
    Ok(())
}

pub fn clear() -> Result<(), ConsoleError> {
    clear_to(&mut io::stdout())
}

pub fn clear_color() -> Result<(), ConsoleError> {
    clear_color_to(&mut io::stdout())
}

/// Fill the current window with `color`; see [`clear_with_color_to`].
pub fn clear_with_color(color: ConsoleColor, keep_color: bool) -> Result<(), ConsoleError> {
    let size = window_size()?;
    clear_with_color_to(&mut io::stdout(), color, keep_color, size)
}

pub fn set_title(title: &str) -> Result<(), ConsoleError> {
    set_title_to(&mut io::stdout(), title)
}

pub fn set_fg_color(color: ConsoleColor) -> Result<(), ConsoleError> {
    set_fg_color_to(&mut io::stdout(), color)
}

pub fn set_bg_color(color: ConsoleColor) -> Result<(), ConsoleError> {
    set_bg_color_to(&mut io::stdout(), color)
}

pub fn set_color(background: ConsoleColor, foreground: ConsoleColor) -> Result<(), ConsoleError> {
    set_color_to(&mut io::stdout(), background, foreground)
}

pub fn set_cursor_position(column: u16, row: u16) -> Result<(), ConsoleError> {
    set_cursor_position_to(&mut io::stdout(), column, row)
}

/// Window size as `(columns, rows)`.
pub fn window_size() -> Result<(u16, u16), ConsoleError> {
    Ok(terminal::size()?)
}
