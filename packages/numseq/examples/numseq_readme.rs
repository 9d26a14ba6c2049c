//! Example that demonstrates the usage shown in the package documentation.
//!
//! This parses sequences given on the command line, reports each rejected input with the rule it
//! violated and prints every accepted input back in encoded form.
//!
//! Pass `--trace` as the first argument to also print the diagnostics logged by the parsers.

use numseq::{Limits, ScalarParser, SequenceParser};

fn main() {
    println!("=== numseq README Example ===");

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().is_some_and(|arg| arg == "--trace") {
        args.remove(0);

        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .init();
    }

    if args.is_empty() {
        args = vec![
            "5-30/5,100".to_string(),
            "8,10+3".to_string(),
            "-3--1".to_string(),
            "10/2".to_string(),
            "1-500".to_string(),
        ];
    }

    let parser = SequenceParser::new(Limits::<i64>::between(-100, 100));
    println!("Parser: {parser}");

    for arg in &args {
        match parser.parse(arg) {
            Ok(numbers) => {
                println!("{arg:>12} => {numbers:?}");
                println!("{:>12}    re-encoded: {}", "", numseq::encode(numbers));
            }
            Err(error) => println!("{arg:>12} => rejected: {error}"),
        }
    }

    let percent = ScalarParser::new(Limits::<i64>::between(0, 100));
    println!("Parser: {percent}");

    for text in ["0", "100", "150"] {
        match percent.parse(text) {
            Ok(value) => println!("{text:>12} => {value}"),
            Err(error) => println!("{text:>12} => rejected: {error}"),
        }
    }

    println!("README example completed successfully!");
}
