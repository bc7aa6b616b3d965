#![forbid(unsafe_code)]

use std::process::exit;

use saphyr_value::budget::BudgetReport;
use saphyr_value::{Budget, Map, Value, check_yaml_budget, decode, encode};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: saphyr-value [--check] <file.yaml>\n\
    Decodes the first YAML document of the file and prints it re-encoded. \
    With --check, prints the budget report of the whole stream instead.";

fn count(n: usize) -> Value {
    Value::Integer(i64::try_from(n).unwrap_or(i64::MAX))
}

fn report_value(report: &BudgetReport) -> Value {
    let mut m = Map::new();
    m.insert(
        "breached".into(),
        report
            .breached
            .as_ref()
            .map(|b| format!("{b:?}"))
            .into(),
    );
    m.insert("events".into(), count(report.events));
    m.insert("aliases".into(), count(report.aliases));
    m.insert("documents".into(), count(report.documents));
    m.insert("nodes".into(), count(report.nodes));
    m.insert("max_depth".into(), count(report.max_depth));
    m.insert("total_scalar_bytes".into(), count(report.total_scalar_bytes));
    Value::Object(m)
}

fn print_value(value: &Value) {
    match encode(value) {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("Failed to encode: {err}");
            exit(3);
        }
    }
}

/// Read a YAML file, decode it and print the re-encoded value, or with `--check`
/// the budget summary. Single file argument.
fn main() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let mut check = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--check" => check = true,
            _ if path.is_none() => path = Some(arg),
            _ => {
                eprintln!("{USAGE}");
                exit(1);
            }
        }
    }
    let Some(path) = path else {
        eprintln!("{USAGE}");
        exit(1);
    };

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Failed to read {path}: {err}");
            exit(2);
        }
    };

    if check {
        match check_yaml_budget(&content, &Budget::default()) {
            Ok(report) => {
                println!("Budget report:");
                print_value(&report_value(&report));
                if report.breached.is_some() {
                    exit(3);
                }
            }
            Err(err) => {
                eprintln!("{path} invalid:\n{err}");
                exit(3);
            }
        }
        return;
    }

    match decode(&content) {
        Ok(value) => print_value(&value),
        Err(err) => {
            eprintln!("{path} invalid:\n{err}");
            exit(3);
        }
    }
}
