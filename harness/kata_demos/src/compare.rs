//! The comparator closure demo.

use std::io::BufRead;

use crate::scan::{IntScanner, ScanResult};
use crate::sink::OutputSink;

/// A comparator producing a description of how `a` relates to `b`.
pub type Comparator<T> = fn(&T, &T) -> String;

/// Scan two integers and print the comparator's verdict.
///
/// Prints a message only when the first value is greater, an empty line
/// otherwise.
pub fn run_compare_demo<R: BufRead>(reader: R, sink: &OutputSink) -> ScanResult<()> {
    let mut scanner = IntScanner::new(reader);
    let x = scanner.next_long()?;
    let y = scanner.next_long()?;

    let comparator: Comparator<i64> = |a, b| {
        if *a > *b {
            format!("{a} is greater than {b}")
        } else {
            String::new()
        }
    };
    sink.println(&comparator(&x, &y));
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn greater_first_value_prints_message() {
        let sink = OutputSink::Buffer(parking_lot::Mutex::new(String::new()));
        run_compare_demo(Cursor::new("9 4"), &sink).unwrap();
        assert_eq!(sink.get_output(), "9 is greater than 4\n");
    }

    #[test]
    fn otherwise_prints_empty_line() {
        let sink = OutputSink::Buffer(parking_lot::Mutex::new(String::new()));
        run_compare_demo(Cursor::new("4 9"), &sink).unwrap();
        assert_eq!(sink.get_output(), "\n");
    }

    #[test]
    fn tie_prints_empty_line() {
        let sink = OutputSink::Buffer(parking_lot::Mutex::new(String::new()));
        run_compare_demo(Cursor::new("5 5"), &sink).unwrap();
        assert_eq!(sink.get_output(), "\n");
    }

    #[test]
    fn missing_input_is_fatal() {
        let sink = OutputSink::Buffer(parking_lot::Mutex::new(String::new()));
        assert!(run_compare_demo(Cursor::new("1"), &sink).is_err());
    }
}
