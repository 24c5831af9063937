//! End-to-end runs of every demo against a buffer sink.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::io::Cursor;

use kata_demos::{
    buffer_sink, run_compare_demo, run_dispatch_demo, run_factorial_demo, run_max_demo,
    run_promotion_demo, ScanError,
};
use pretty_assertions::assert_eq;

#[test]
fn promotion_demo_prints_the_full_sequence() {
    let sink = buffer_sink();
    run_promotion_demo(&sink);
    let output = sink.get_output();
    assert_eq!(output.lines().count(), 8);
    // First line is the widened sum itself, then the comparison results.
    assert_eq!(output.lines().next().unwrap(), "30");
}

#[test]
fn dispatch_demo_prints_every_call_site() {
    let sink = buffer_sink();
    run_dispatch_demo(&sink).unwrap();
    let output = sink.get_output();
    assert_eq!(output.lines().count(), 7);
    assert!(output.contains("static Calculator::add(1, 2) = 3"));
    assert!(output.contains("static Negator::add(1, 2) = -5"));
    assert!(output.contains("widened.add(1, 2) = -5"));
    assert!(output.contains("narrowed.add(1, 2, 3) = -14"));
}

#[test]
fn factorial_demo_prints_ten_factorial() {
    let sink = buffer_sink();
    run_factorial_demo(&sink);
    assert_eq!(sink.get_output(), "3628800\n");
}

#[test]
fn max_demo_scans_three_and_prints_the_largest() {
    let sink = buffer_sink();
    run_max_demo(Cursor::new("3 7 5\n"), &sink).unwrap();
    assert_eq!(sink.get_output(), "7\n");
}

#[test]
fn max_demo_accepts_newline_separated_input() {
    let sink = buffer_sink();
    run_max_demo(Cursor::new("3\n7\n5\n"), &sink).unwrap();
    assert_eq!(sink.get_output(), "7\n");
}

#[test]
fn compare_demo_reads_two_integers() {
    let sink = buffer_sink();
    run_compare_demo(Cursor::new("10 2\n"), &sink).unwrap();
    assert_eq!(sink.get_output(), "10 is greater than 2\n");
}

#[test]
fn truncated_input_fails_without_partial_output() {
    let sink = buffer_sink();
    let err = run_max_demo(Cursor::new("1 2\n"), &sink).unwrap_err();
    assert!(matches!(err, ScanError::UnexpectedEof));
    assert_eq!(sink.get_output(), "");
}
