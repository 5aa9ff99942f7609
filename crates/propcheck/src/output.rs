use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use propcheck_contract::{Contract, ContractReport};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FailureOutput<'a> {
    prop: &'a str,
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    schema_id: &'static str,
    component: &'a str,
    valid: bool,
    failures: Vec<FailureOutput<'a>>,
}

pub fn print_report(report: &ContractReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ReportOutput {
                schema_id: "propcheck.cli.v1.check-report",
                component: &report.component,
                valid: report.is_valid(),
                failures: report
                    .failures
                    .iter()
                    .map(|failure| FailureOutput {
                        prop: failure.prop(),
                        code: failure.code(),
                        message: failure.message(),
                    })
                    .collect(),
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            if report.is_valid() {
                println!("{}: all props valid", report.component);
                return;
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PROP", "CODE", "MESSAGE"]);
            for failure in &report.failures {
                table.add_row(vec![
                    failure.prop().to_string(),
                    failure.code().to_string(),
                    failure.message(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            if report.is_valid() {
                println!("ok component={}", report.component);
            }
            for failure in &report.failures {
                println!(
                    "fail component={} prop={} code={} message={}",
                    report.component,
                    failure.prop(),
                    failure.code(),
                    failure.message()
                );
            }
        }
    }
}

#[derive(Serialize)]
struct PropOutput<'a> {
    name: &'a str,
    required: bool,
}

#[derive(Serialize)]
struct ContractOutput<'a> {
    schema_id: &'static str,
    component: &'a str,
    props: Vec<PropOutput<'a>>,
}

pub fn print_contract(contract: &Contract, format: OutputFormat) {
    let props: Vec<PropOutput<'_>> = contract
        .prop_names()
        .map(|name| PropOutput {
            name,
            required: contract.checker(name).is_some_and(|checker| checker.required()),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            print_json(&ContractOutput {
                schema_id: "propcheck.cli.v1.contract",
                component: contract.component(),
                props,
            });
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PROP", "REQUIRED"]);
            for prop in &props {
                table.add_row(vec![prop.name.to_string(), prop.required.to_string()]);
            }
            println!("Component: {}", contract.component());
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("component={}", contract.component());
            for prop in &props {
                println!("prop={} required={}", prop.name, prop.required);
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}
