//! Zero-on-drop storage for secrets typed at the console.

use std::fmt;

use zeroize::Zeroize;

const INITIAL_CAPACITY: usize = 64;

/// A growable UTF-8 buffer whose bytes are wiped when they are no longer
/// needed: on drop, on [`SecretBuffer::pop_char`], and whenever the backing
/// allocation is replaced.
///
/// The contents are only reachable inside a closure passed to
/// [`SecretBuffer::with_exposed`], which keeps plaintext borrows scoped.
/// It implements neither `Clone` nor `Display`.
pub struct SecretBuffer {
    bytes: Vec<u8>,
}

impl SecretBuffer {
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append one character.
    pub fn push_char(&mut self, c: char) {
        let mut encoded = [0u8; 4];
        let encoded_len = c.encode_utf8(&mut encoded).len();
        self.reserve(encoded_len);
        self.bytes.extend_from_slice(&encoded[..encoded_len]);
        encoded.zeroize();
    }

    /// Remove the last character, wiping its bytes. Returns `false` when the
    /// buffer was already empty.
    pub fn pop_char(&mut self) -> bool {
        // Walk back over UTF-8 continuation bytes to the start of the char
        let Some(mut start) = self.bytes.len().checked_sub(1) else {
            return false;
        };
        while start > 0 && self.bytes[start] & 0xC0 == 0x80 {
            start -= 1;
        }
        self.bytes[start..].zeroize();
        self.bytes.truncate(start);
        true
    }

    /// Number of characters held.
    pub fn char_count(&self) -> usize {
        self.bytes.iter().filter(|&&b| b & 0xC0 != 0x80).count()
    }

    /// Number of UTF-8 bytes held.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Run `f` with the secret as a string slice.
    pub fn with_exposed<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        // push_char only ever stores whole UTF-8 sequences and pop_char only
        // removes whole ones, so this cannot fail.
        match std::str::from_utf8(&self.bytes) {
            Ok(s) => f(s),
            Err(_) => f(""),
        }
    }

    /// Run `f` with the secret's raw UTF-8 bytes.
    pub fn with_exposed_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(&self.bytes)
    }

    /// Wipe and empty the buffer, keeping its allocation.
    pub fn clear(&mut self) {
        self.bytes.zeroize();
    }

    // Growing a Vec in place would leave a plaintext copy behind in the freed
    // allocation, so move into a fresh one and wipe the old one ourselves.
    fn reserve(&mut self, additional: usize) {
        let needed = self.bytes.len() + additional;
        if needed <= self.bytes.capacity() {
            return;
        }
        let mut grown = Vec::with_capacity(needed.max(self.bytes.capacity() * 2));
        grown.extend_from_slice(&self.bytes);
        let mut old = std::mem::replace(&mut self.bytes, grown);
        old.zeroize();
    }
}

impl Default for SecretBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SecretBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBuffer")
            .field("bytes", &"[REDACTED]")
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_expose() {
        let mut secret = SecretBuffer::new();
        for c in "hunter2".chars() {
            secret.push_char(c);
        }
        assert_eq!(secret.with_exposed(|s| s.to_string()), "hunter2");
        assert_eq!(secret.char_count(), 7);
    }

    #[test]
    fn test_pop_removes_whole_multibyte_char() {
        let mut secret = SecretBuffer::new();
        secret.push_char('a');
        secret.push_char('€');
        assert_eq!(secret.len(), 4);
        assert!(secret.pop_char());
        assert_eq!(secret.with_exposed(|s| s.to_string()), "a");
        assert!(secret.pop_char());
        assert!(!secret.pop_char());
        assert!(secret.is_empty());
    }

    #[test]
    fn test_growth_beyond_initial_capacity() {
        let mut secret = SecretBuffer::new();
        let long: String = std::iter::repeat('x').take(INITIAL_CAPACITY * 3).collect();
        for c in long.chars() {
            secret.push_char(c);
        }
        assert!(secret.with_exposed(|s| s == long));
    }

    #[test]
    fn test_clear_empties() {
        let mut secret = SecretBuffer::new();
        secret.push_char('z');
        secret.clear();
        assert!(secret.is_empty());
        assert_eq!(secret.with_exposed_bytes(|b| b.len()), 0);
    }

    #[test]
    fn test_debug_is_redacted() {
        let mut secret = SecretBuffer::new();
        for c in "topsecret".chars() {
            secret.push_char(c);
        }
        let dbg = format!("{:?}", secret);
        assert!(!dbg.contains("topsecret"));
        assert!(dbg.contains("REDACTED"));
    }
}
