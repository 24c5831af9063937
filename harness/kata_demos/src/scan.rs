//! Whitespace-separated integer scanner over a line-based source.

use std::collections::VecDeque;
use std::io::BufRead;

use thiserror::Error;

/// Result alias for scanner operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Fatal input failure.
///
/// There is no recovery: a malformed or missing token terminates the
/// demo that requested it.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The source ended before a requested value was read.
    #[error("input ended before a value was read")]
    UnexpectedEof,

    /// A token was present but is not a valid integer.
    #[error("malformed integer token `{token}`")]
    Malformed {
        /// The offending token.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: std::num::ParseIntError,
    },

    /// The underlying reader failed.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

/// Sequential reader of whitespace/newline-separated integers.
///
/// Reads one line at a time and hands out its tokens in order, pulling
/// the next line only when the current one is exhausted.
pub struct IntScanner<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> IntScanner<R> {
    /// Wrap a line-based source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Read the next integer token.
    pub fn next_long(&mut self) -> ScanResult<i64> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return match token.parse::<i64>() {
                    Ok(value) => {
                        tracing::trace!(value, "scanned integer");
                        Ok(value)
                    }
                    Err(source) => Err(ScanError::Malformed { token, source }),
                };
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ScanError::UnexpectedEof);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn scans_across_lines_and_whitespace() {
        let mut scanner = IntScanner::new(Cursor::new("1 2\n  3\n"));
        assert_eq!(scanner.next_long().unwrap(), 1);
        assert_eq!(scanner.next_long().unwrap(), 2);
        assert_eq!(scanner.next_long().unwrap(), 3);
    }

    #[test]
    fn skips_blank_lines() {
        let mut scanner = IntScanner::new(Cursor::new("\n\n  \n7\n"));
        assert_eq!(scanner.next_long().unwrap(), 7);
    }

    #[test]
    fn negative_values() {
        let mut scanner = IntScanner::new(Cursor::new("-42"));
        assert_eq!(scanner.next_long().unwrap(), -42);
    }

    #[test]
    fn eof_is_fatal() {
        let mut scanner = IntScanner::new(Cursor::new("5"));
        scanner.next_long().unwrap();
        assert!(matches!(
            scanner.next_long(),
            Err(ScanError::UnexpectedEof)
        ));
    }

    #[test]
    fn malformed_token_is_fatal() {
        let mut scanner = IntScanner::new(Cursor::new("abc"));
        assert!(matches!(
            scanner.next_long(),
            Err(ScanError::Malformed { token, .. }) if token == "abc"
        ));
    }
}
