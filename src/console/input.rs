//! Line-oriented prompts: strings and numbers.
//!
//! The `read_*` functions propagate failures; the `try_read_*` functions
//! never fail and instead return the type's default value paired with
//! `false`, for interactive validation loops.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::{ConsoleError, output::write_to};

/// Numeric types a prompt can parse, with a name for error messages.
pub trait Numeric: FromStr + Default {
    const NAME: &'static str;
}

impl Numeric for i32 {
    const NAME: &'static str = "integer";
}

impl Numeric for f32 {
    const NAME: &'static str = "float";
}

impl Numeric for f64 {
    const NAME: &'static str = "double";
}

/// Print `message`, then read one line from `input` without its line ending.
///
/// # Errors
/// [`ConsoleError::EndOfInput`] if `input` is exhausted, or an I/O error.
pub fn read_line_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String, ConsoleError> {
    write_to(output, message)?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConsoleError::EndOfInput);
    }

    let content_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(content_len);
    Ok(line)
}

/// Print `message`, read a line and parse it as `T`, ignoring surrounding
/// whitespace.
///
/// # Errors
/// [`ConsoleError::Parse`] when the line is not a valid `T`, plus the errors
/// of [`read_line_from`].
pub fn read_parsed_from<T: Numeric, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<T, ConsoleError> {
    let line = read_line_from(input, output, message)?;
    line.trim().parse().map_err(|_| ConsoleError::Parse {
        input: line.clone(),
        target: T::NAME,
    })
}

/// Like [`read_parsed_from`], but reports failure as `(T::default(), false)`.
pub fn try_read_parsed_from<T: Numeric, R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> (T, bool) {
    match read_parsed_from(input, output, message) {
        Ok(value) => (value, true),
        Err(e) => {
            log::debug!("Prompt for {} failed: {}", T::NAME, e);
            (T::default(), false)
        }
    }
}

fn stdin_parsed<T: Numeric>(message: &str) -> Result<T, ConsoleError> {
    read_parsed_from(&mut io::stdin().lock(), &mut io::stdout(), message)
}

fn stdin_try_parsed<T: Numeric>(message: &str) -> (T, bool) {
    try_read_parsed_from(&mut io::stdin().lock(), &mut io::stdout(), message)
}

/// Print `message` and read a line from stdin.
pub fn read_string(message: &str) -> Result<String, ConsoleError> {
    read_line_from(&mut io::stdin().lock(), &mut io::stdout(), message)
}

/// Print `message` and read an `i32` from stdin.
pub fn read_int(message: &str) -> Result<i32, ConsoleError> {
    stdin_parsed(message)
}

/// Print `message` and try to read an `i32` from stdin.
pub fn try_read_int(message: &str) -> (i32, bool) {
    stdin_try_parsed(message)
}

/// Print `message` and read an `f32` from stdin.
pub fn read_float(message: &str) -> Result<f32, ConsoleError> {
    stdin_parsed(message)
}

/// Print `message` and try to read an `f32` from stdin.
pub fn try_read_float(message: &str) -> (f32, bool) {
    stdin_try_parsed(message)
}

/// Print `message` and read an `f64` from stdin.
pub fn read_double(message: &str) -> Result<f64, ConsoleError> {
    stdin_parsed(message)
}

/// Print `message` and try to read an `f64` from stdin.
pub fn try_read_double(message: &str) -> (f64, bool) {
    stdin_try_parsed(message)
}
