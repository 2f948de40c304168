//! Subcommand handlers.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::args::{Command, ConfigAction};
use crate::codec::{CodecError, Encoding};
use crate::config::{self, Config, ConfigError};
use crate::console::{self, ConsoleError, SecretBuffer};

/// Errors surfaced by a subcommand.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Run `command`, writing results to `out`.
///
/// Commands that need input not given on the command line prompt for it on
/// the terminal using the configured colors.
pub fn run<W: Write>(
    command: Command,
    config: &Config,
    config_path: Option<&Path>,
    out: &mut W,
) -> Result<(), CliError> {
    match command {
        Command::Encode { encoding, text } => {
            let text = text_or_prompt(text, "Text: ", config)?;
            console::write_line_to(out, &Encoding::from(encoding).encode(&text))?;
        }
        Command::Decode {
            encoding,
            input,
            strict,
        } => {
            let input = text_or_prompt(input, "Input: ", config)?;
            let encoding = Encoding::from(encoding);
            let text = if strict || config.codec.strict_binary {
                encoding.decode_strict(&input)?
            } else {
                encoding.decode(&input)?
            };
            console::write_line_to(out, &text)?;
        }
        Command::IntTo { base, value } => {
            console::write_line_to(out, &base.format(value))?;
        }
        Command::IntFrom { base, digits } => {
            console::write_line_to(out, &base.parse(&digits)?.to_string())?;
        }
        Command::Password => read_password(config, out)?,
        Command::Key { no_echo } => {
            set_title(config)?;
            console::write_color_to(out, "Press any key: ", config.console.prompt_color, false)?;
            let code = console::read_key_intercept_to(out, no_echo)?;
            console::write_line_to(out, "")?;
            console::write_line_to(out, &format!("{:?}", code))?;
        }
        Command::Config { action } => handle_config_action(action, config, config_path, out)?,
    }
    Ok(())
}

fn text_or_prompt(given: Option<String>, label: &str, config: &Config) -> Result<String, CliError> {
    if let Some(text) = given {
        return Ok(text);
    }
    console::set_fg_color(config.console.prompt_color)?;
    let line = console::read_string(label);
    console::clear_color()?;
    Ok(line?)
}

fn set_title(config: &Config) -> Result<(), ConsoleError> {
    match &config.console.title {
        Some(title) => console::set_title(title),
        None => Ok(()),
    }
}

fn read_password<W: Write>(config: &Config, out: &mut W) -> Result<(), CliError> {
    set_title(config)?;
    console::set_fg_color(config.console.prompt_color)?;
    let secret = console::read_password_masked("Password: ", config.console.mask());
    console::clear_color()?;
    report_password(out, &secret?)
}

/// Only the length is reported; the contents never leave the buffer.
fn report_password<W: Write>(out: &mut W, secret: &SecretBuffer) -> Result<(), CliError> {
    console::write_line_to(out, &format!("Read {} character(s)", secret.char_count()))?;
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action<W: Write>(
    action: ConfigAction,
    config: &Config,
    config_path: Option<&Path>,
    out: &mut W,
) -> Result<(), CliError> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            console::write_line_to(out, "Current configuration:")?;
            console::write_line_to(out, "")?;
            console::write_to(out, &config.to_toml()?)?;
            console::write_line_to(out, "")?;
            let state = if path.exists() { "exists" } else { "not found" };
            console::write_line_to(out, &format!("Config file: {} ({})", path.display(), state))?;
        }
        ConfigAction::Init => {
            Config::write_default(&path)?;
            console::write_line_to(out, &format!("Created config file: {}", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{IntBase, TextEncoding};

    fn run_capture(command: Command, config: &Config) -> Result<String, CliError> {
        let mut out = Vec::new();
        run(command, config, None, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_encode_with_text() {
        let out = run_capture(
            Command::Encode {
                encoding: TextEncoding::Base64,
                text: Some("Hi".to_string()),
            },
            &Config::default(),
        )
        .unwrap();
        assert_eq!(out, "SGk=\n");
    }

    #[test]
    fn test_decode_respects_config_strictness() {
        let decode = || Command::Decode {
            encoding: TextEncoding::Binary,
            input: Some("010000011".to_string()),
            strict: false,
        };

        let out = run_capture(decode(), &Config::default()).unwrap();
        assert_eq!(out, "A\n");

        let mut strict = Config::default();
        strict.codec.strict_binary = true;
        let err = run_capture(decode(), &strict).unwrap_err();
        assert!(matches!(
            err,
            CliError::Codec(CodecError::UnalignedBinary { len: 9 })
        ));
    }

    #[test]
    fn test_int_to_and_from() {
        let out = run_capture(
            Command::IntTo {
                base: IntBase::Hex,
                value: -1,
            },
            &Config::default(),
        )
        .unwrap();
        assert_eq!(out, "FFFFFFFF\n");

        let out = run_capture(
            Command::IntFrom {
                base: IntBase::Binary,
                digits: "101".to_string(),
            },
            &Config::default(),
        )
        .unwrap();
        assert_eq!(out, "5\n");
    }

    #[test]
    fn test_int_from_invalid_digits() {
        let err = run_capture(
            Command::IntFrom {
                base: IntBase::Hex,
                digits: "XYZ".to_string(),
            },
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Codec(_)));
    }

    #[test]
    fn test_password_report_omits_contents() {
        let mut secret = SecretBuffer::default();
        for c in "hunter2é".chars() {
            secret.push_char(c);
        }
        let mut out = Vec::new();
        report_password(&mut out, &secret).unwrap();
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, "Read 8 character(s)\n");
        assert!(!shown.contains("hunter2"));
        assert!(!shown.contains(&crate::codec::to_base64("hunter2é")));
    }

    #[test]
    fn test_config_init_then_show() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config::default();

        let mut out = Vec::new();
        handle_config_action(ConfigAction::Init, &config, Some(&path), &mut out).unwrap();
        assert!(path.exists());

        let err = handle_config_action(ConfigAction::Init, &config, Some(&path), &mut Vec::new())
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::AlreadyExists { .. })
        ));

        let mut out = Vec::new();
        handle_config_action(ConfigAction::Show, &config, Some(&path), &mut out).unwrap();
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("strict_binary = false"));
        assert!(shown.contains("(exists)"));
    }
}
