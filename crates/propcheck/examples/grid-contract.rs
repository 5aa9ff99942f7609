//! Grid contract example.
//!
//! Declares a contract in code and validates a few props objects against it.
//!
//! Run with:
//!   cargo run --example grid-contract

use propcheck::checker::{number, one_of, CheckContext, Checker, Props};
use propcheck::contract::Contract;
use propcheck::keys_of;

fn props(json: &str) -> Props {
    match serde_json::from_str(json) {
        Ok(props) => props,
        Err(err) => {
            eprintln!("bad example props: {err}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let widths = keys_of(one_of(["small", "medium", "large"]));

    let contract = Contract::new("Grid")
        .declare("columns", number().is_required())
        .declare("widths", widths.clone());

    for input in [
        r#"{"columns": 3, "widths": {"small": 10, "large": 40}}"#,
        r#"{"widths": {"huge": 100}}"#,
    ] {
        let report = contract.validate(&props(input));
        if report.is_valid() {
            println!("{input} -> ok");
        }
        for failure in &report.failures {
            println!("{input} -> {}", failure.message());
        }
    }

    // Checkers can also be called directly.
    let ctx = CheckContext::new("Grid");
    let result = widths
        .is_required()
        .check(&props("{}"), "widths", &ctx);
    println!("direct check of missing widths -> {result:?}");
}
