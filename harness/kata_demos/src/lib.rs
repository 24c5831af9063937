//! Kata Demos - the runnable demonstration programs.
//!
//! Each demo is an independent, synchronous run with no shared state:
//! - `promotion`: mixed-kind widening and the three diverging comparison
//!   modes, recorded step by step in a [`PromotionReport`]
//! - `dispatch`: overload selection and static-vs-instance resolution,
//!   recorded in a [`DispatchReport`]
//! - `arith`: recursive factorial (direct and accumulator-passing) and
//!   pairwise max
//! - `compare`: a comparator closure over two scanned integers
//!
//! Console collaborators are deliberately thin: [`IntScanner`] is the
//! line-based input source, [`OutputSink`] the line-based output sink.
//! Tests run the demos against a buffer sink and assert on the recorded
//! boolean/ordering outcomes, never on printed digit strings.

pub mod arith;
mod compare;
mod dispatch;
mod promotion;
mod scan;
mod sink;

pub use compare::{run_compare_demo, Comparator};
pub use dispatch::{dispatch_report, run_dispatch_demo, DispatchReport};
pub use promotion::{promotion_report, run_promotion_demo, PromotionReport};
pub use scan::{IntScanner, ScanError, ScanResult};
pub use sink::{buffer_sink, silent_sink, stdout_sink, OutputSink, SharedSink};

use std::io::BufRead;

/// Run the factorial demo: prints `factorial(10)`.
pub fn run_factorial_demo(sink: &OutputSink) {
    sink.println(&arith::factorial(10).to_string());
}

/// Run the max demo: scans three integers and prints the largest.
pub fn run_max_demo<R: BufRead>(reader: R, sink: &OutputSink) -> ScanResult<()> {
    let mut scanner = IntScanner::new(reader);
    let a = scanner.next_long()?;
    let b = scanner.next_long()?;
    let c = scanner.next_long()?;
    sink.println(&arith::max3(a, b, c).to_string());
    Ok(())
}
