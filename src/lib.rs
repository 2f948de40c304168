//! convterm library crate.
//!
//! - [`codec`]: pure conversions between UTF-8 text and Base64, hex and
//!   binary digit strings, plus `i32` to hex/binary.
//! - [`console`]: colored output, prompts, masked password entry and
//!   screen control on top of `crossterm`.
//!
//! The two are independent; the codec never touches the terminal.

pub mod cli;
pub mod codec;
pub mod config;
pub mod console;
