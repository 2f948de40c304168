//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{IntBase, TextEncoding};

/// Convert text between UTF-8, Base64, hex and binary, and poke at the console
#[derive(Parser, Debug)]
#[command(name = "convterm")]
#[command(version, about = "Text encoding conversions and console helpers", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode text (prompts for it when omitted)
    Encode {
        /// Target encoding
        encoding: TextEncoding,
        /// Text to encode
        text: Option<String>,
    },
    /// Decode encoded input back into text (prompts for it when omitted)
    Decode {
        /// Source encoding
        encoding: TextEncoding,
        /// Encoded input
        input: Option<String>,
        /// Reject binary input that is not a whole number of bytes
        #[arg(long)]
        strict: bool,
    },
    /// Render a 32-bit integer in hex or binary
    IntTo {
        base: IntBase,
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Parse hex or binary digits as a 32-bit integer
    IntFrom { base: IntBase, digits: String },
    /// Read a masked password and show its length
    Password,
    /// Read a single key press and print its code
    Key {
        /// Do not echo the key
        #[arg(long)]
        no_echo: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
