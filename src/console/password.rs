//! Masked password entry.
//!
//! [`PasswordPrompt`] holds the key-handling rules and can be driven by any
//! sequence of [`KeyEvent`]s; [`read_password`] feeds it from the terminal.

use std::io::{self, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::queue;
use crossterm::style::Print;

use super::key::next_key_press;
use super::output::write_to;
use super::{ConsoleError, RawModeGuard, SecretBuffer};

/// Character echoed for each typed password character.
pub const DEFAULT_MASK: char = '*';

/// What the prompt wants to do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStep {
    /// Keep reading keys
    Continue,
    /// Enter was pressed; the password is complete
    Done,
    /// Ctrl+C was pressed; discard the input
    Cancelled,
}

/// Key-by-key state of a masked password prompt.
pub struct PasswordPrompt {
    secret: SecretBuffer,
    /// `None` echoes nothing at all
    mask: Option<char>,
}

impl PasswordPrompt {
    pub fn new(mask: Option<char>) -> Self {
        Self {
            secret: SecretBuffer::new(),
            mask,
        }
    }

    /// Apply one key press, writing any echo to `out`.
    ///
    /// - printable characters are stored and echoed as the mask
    /// - Backspace drops the last character and erases one mask, if any
    /// - Enter completes the prompt and moves to a new line
    /// - Ctrl+C cancels
    /// - everything else is ignored
    pub fn handle_key<W: Write>(&mut self, key: KeyEvent, out: &mut W) -> io::Result<PromptStep> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => {
                // Raw mode: no implicit carriage return
                queue!(out, Print("\r\n"))?;
                out.flush()?;
                return Ok(PromptStep::Done);
            }
            KeyCode::Char('c') | KeyCode::Char('C') if ctrl => {
                queue!(out, Print("\r\n"))?;
                out.flush()?;
                return Ok(PromptStep::Cancelled);
            }
            KeyCode::Backspace => {
                if self.secret.pop_char() && self.mask.is_some() {
                    queue!(out, Print("\u{8} \u{8}"))?;
                }
            }
            KeyCode::Char(c) if !ctrl && !c.is_control() => {
                self.secret.push_char(c);
                if let Some(mask) = self.mask {
                    queue!(out, Print(mask))?;
                }
            }
            _ => {}
        }

        out.flush()?;
        Ok(PromptStep::Continue)
    }

    /// Characters typed so far.
    pub fn char_count(&self) -> usize {
        self.secret.char_count()
    }

    /// Hand over the collected secret.
    pub fn finish(self) -> SecretBuffer {
        self.secret
    }
}

/// Print `message` and read a password, echoing `*` per character.
///
/// # Errors
/// [`ConsoleError::Interrupted`] on Ctrl+C, or an I/O error if stdin is not
/// a terminal. Partially typed input is wiped in both cases.
pub fn read_password(message: &str) -> Result<SecretBuffer, ConsoleError> {
    read_password_masked(message, Some(DEFAULT_MASK))
}

/// Like [`read_password`] with a custom mask; `None` disables echo.
pub fn read_password_masked(
    message: &str,
    mask: Option<char>,
) -> Result<SecretBuffer, ConsoleError> {
    let mut out = io::stdout();
    write_to(&mut out, message)?;

    let mut prompt = PasswordPrompt::new(mask);
    let _raw = RawModeGuard::enter()?;

    loop {
        let key = next_key_press()?;
        match prompt.handle_key(key, &mut out)? {
            PromptStep::Continue => {}
            PromptStep::Done => {
                log::debug!("Password read ({} chars)", prompt.char_count());
                return Ok(prompt.finish());
            }
            PromptStep::Cancelled => {
                log::info!("Password entry cancelled");
                return Err(ConsoleError::Interrupted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_keys(prompt: &mut PasswordPrompt, keys: &[KeyEvent]) -> (Vec<u8>, PromptStep) {
        let mut out = Vec::new();
        let mut step = PromptStep::Continue;
        for k in keys {
            step = prompt.handle_key(*k, &mut out).unwrap();
        }
        (out, step)
    }

    #[test]
    fn test_typing_echoes_mask() {
        let mut prompt = PasswordPrompt::new(Some('*'));
        let (out, step) = type_keys(
            &mut prompt,
            &[key(KeyCode::Char('a')), key(KeyCode::Char('b')), key(KeyCode::Enter)],
        );
        assert_eq!(step, PromptStep::Done);
        assert_eq!(out, b"**\r\n");
        let secret = prompt.finish();
        assert_eq!(secret.with_exposed(|s| s.to_string()), "ab");
    }

    #[test]
    fn test_backspace_on_empty_prints_nothing() {
        let mut prompt = PasswordPrompt::new(Some('*'));
        let (out, step) = type_keys(&mut prompt, &[key(KeyCode::Backspace)]);
        assert_eq!(step, PromptStep::Continue);
        assert!(out.is_empty());
    }

    #[test]
    fn test_backspace_erases_mask() {
        let mut prompt = PasswordPrompt::new(Some('#'));
        let (out, _) = type_keys(
            &mut prompt,
            &[key(KeyCode::Char('x')), key(KeyCode::Backspace)],
        );
        assert_eq!(out, b"#\x08 \x08");
        assert_eq!(prompt.char_count(), 0);
    }

    #[test]
    fn test_ctrl_c_cancels() {
        let mut prompt = PasswordPrompt::new(Some('*'));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let (_, step) = type_keys(&mut prompt, &[key(KeyCode::Char('a')), ctrl_c]);
        assert_eq!(step, PromptStep::Cancelled);
    }

    #[test]
    fn test_no_mask_echoes_nothing_but_newline() {
        let mut prompt = PasswordPrompt::new(None);
        let (out, _) = type_keys(
            &mut prompt,
            &[
                key(KeyCode::Char('s')),
                key(KeyCode::Backspace),
                key(KeyCode::Char('t')),
                key(KeyCode::Enter),
            ],
        );
        assert_eq!(out, b"\r\n");
        assert_eq!(prompt.finish().with_exposed(|s| s.to_string()), "t");
    }

    #[test]
    fn test_shifted_and_unicode_chars_are_kept() {
        let mut prompt = PasswordPrompt::new(Some('*'));
        let shifted = KeyEvent::new(KeyCode::Char('P'), KeyModifiers::SHIFT);
        type_keys(&mut prompt, &[shifted, key(KeyCode::Char('ß'))]);
        assert_eq!(prompt.finish().with_exposed(|s| s.to_string()), "Pß");
    }

    #[test]
    fn test_navigation_keys_ignored() {
        let mut prompt = PasswordPrompt::new(Some('*'));
        let (out, step) = type_keys(&mut prompt, &[key(KeyCode::Left), key(KeyCode::Esc)]);
        assert_eq!(step, PromptStep::Continue);
        assert!(out.is_empty());
        assert_eq!(prompt.char_count(), 0);
    }
}
