//! Kata CLI
//!
//! Runs the demonstration programs.

use katac::commands::{list_demos, run_demo, DEMOS};
use katac::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: kata run <demo>");
                eprintln!();
                list_demos();
                std::process::exit(1);
            }
            if !run_demo(&args[2]) {
                std::process::exit(1);
            }
        }
        "list" => {
            list_demos();
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Kata {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            // A bare demo name works as a shorthand for `run`.
            if other == "all" || DEMOS.iter().any(|(name, _)| *name == other) {
                if !run_demo(other) {
                    std::process::exit(1);
                }
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("Kata demonstration harness");
    println!();
    println!("Usage: kata <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <demo>       Run a demo (or `all` for the non-interactive ones)");
    println!("  list             List available demos");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Examples:");
    println!("  kata run promotion");
    println!("  kata run dispatch");
    println!("  kata run max          # reads three integers from stdin");
    println!("  kata promotion        # shorthand for `kata run promotion`");
    println!();
    println!("Tracing:");
    println!("  RUST_LOG=kata_dispatch=debug kata run dispatch");
}
