//! Console error types

use std::io;

/// Errors that can occur while reading from or writing to the console.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("'{input}' is not a valid {target}")]
    Parse {
        /// The line that failed to parse, without its line ending
        input: String,
        /// Human-readable name of the expected type
        target: &'static str,
    },

    #[error("end of input reached before a line was read")]
    EndOfInput,

    #[error("input interrupted")]
    Interrupted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ConsoleError::Parse {
            input: "abc".to_string(),
            target: "integer",
        };
        assert_eq!(err.to_string(), "'abc' is not a valid integer");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: ConsoleError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, ConsoleError::Io(_)));
        assert!(err.to_string().contains("gone"));
    }
}
