//! Demo selection and execution.

use std::fmt::Display;

use kata_demos::{
    run_compare_demo, run_dispatch_demo, run_factorial_demo, run_max_demo, run_promotion_demo,
    stdout_sink,
};

/// Names accepted by `kata run`, in listing order.
pub const DEMOS: &[(&str, &str)] = &[
    ("promotion", "Mixed-kind widening and the three comparison modes"),
    ("dispatch", "Overload selection, override vs. static hiding"),
    ("factorial", "Recursive factorial of 10"),
    ("max", "Max of three integers read from stdin"),
    ("compare", "Comparator over two integers read from stdin"),
];

/// Run one demo (or `all` for the non-interactive ones).
///
/// Returns `false` when the demo failed or the name is unknown; the
/// caller maps that to the process exit code.
pub fn run_demo(name: &str) -> bool {
    let sink = stdout_sink();
    tracing::debug!(demo = name, "running demo");
    match name {
        "promotion" => {
            run_promotion_demo(&sink);
            true
        }
        "dispatch" => report(run_dispatch_demo(&sink)),
        "factorial" => {
            run_factorial_demo(&sink);
            true
        }
        "max" => report(run_max_demo(std::io::stdin().lock(), &sink)),
        "compare" => report(run_compare_demo(std::io::stdin().lock(), &sink)),
        "all" => {
            // The stdin-fed demos are excluded from `all`.
            run_promotion_demo(&sink);
            let ok = report(run_dispatch_demo(&sink));
            run_factorial_demo(&sink);
            ok
        }
        _ => {
            eprintln!("error: unknown demo `{name}`");
            eprintln!();
            list_demos();
            false
        }
    }
}

/// Print the available demos.
pub fn list_demos() {
    println!("Available demos:");
    for (name, summary) in DEMOS {
        println!("  {name:<12} {summary}");
    }
    println!("  {:<12} Run every demo that needs no input", "all");
}

fn report<E: Display>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            eprintln!("error: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_demo_is_rejected() {
        assert!(!run_demo("nonexistent"));
    }

    #[test]
    fn non_interactive_demos_succeed() {
        assert!(run_demo("promotion"));
        assert!(run_demo("dispatch"));
        assert!(run_demo("factorial"));
        assert!(run_demo("all"));
    }

    #[test]
    fn every_listed_demo_name_is_unique() {
        for (i, (name, _)) in DEMOS.iter().enumerate() {
            assert!(
                DEMOS.iter().skip(i + 1).all(|(other, _)| other != name),
                "duplicate demo name `{name}`"
            );
        }
    }

    #[test]
    fn report_maps_results_to_exit_status() {
        assert!(report(Ok::<(), String>(())));
        assert!(!report(Err::<(), String>("boom".to_string())));
    }
}
