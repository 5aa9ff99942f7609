use std::io::Read;
use std::path::Path;

use propcheck_contract::{Contract, ContractConfig};
use propcheck_core::Props;
use serde_json::Value;

use crate::cmd::CheckArgs;
use crate::exit::{
    config_error, io_error, CliError, CliResult, DATA_INVALID, SUCCESS, VALIDATION_FAILED,
};
use crate::output::{print_report, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let config = ContractConfig {
        reject_unknown_props: args.strict,
        collect_all: !args.first,
        ..ContractConfig::default()
    };
    let contract = Contract::from_file_with_config(&args.contract, config)
        .map_err(|err| config_error("contract", err))?;

    let props = parse_props(&read_source(&args.props, args.max_props_size)?)?;
    let component = args.component.as_deref().unwrap_or(contract.component());
    let report = contract.validate_as(&props, component);

    if report.is_valid() {
        tracing::info!(component, props = props.len(), "props valid");
    } else {
        tracing::warn!(component, failures = report.failures.len(), "props invalid");
    }

    print_report(&report, format);
    Ok(if report.is_valid() {
        SUCCESS
    } else {
        VALIDATION_FAILED
    })
}

fn read_source(path: &Path, max_bytes: usize) -> CliResult<String> {
    if path.as_os_str() == "-" {
        return read_bounded(std::io::stdin().lock(), max_bytes, "stdin");
    }

    let source = path.display().to_string();
    let file = std::fs::File::open(path)
        .map_err(|err| io_error(&format!("failed opening {source}"), err))?;
    read_bounded(file, max_bytes, &source)
}

fn read_bounded<R: Read>(reader: R, max_bytes: usize, source: &str) -> CliResult<String> {
    let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
    let mut content = String::new();
    reader
        .take(read_limit)
        .read_to_string(&mut content)
        .map_err(|err| io_error(&format!("failed reading props from {source}"), err))?;
    if content.len() > max_bytes {
        return Err(CliError::new(
            DATA_INVALID,
            format!("props from {source} exceed {max_bytes} bytes"),
        ));
    }
    Ok(content)
}

fn parse_props(content: &str) -> CliResult<Props> {
    let value: Value = serde_json::from_str(content)
        .map_err(|err| CliError::new(DATA_INVALID, format!("props are not valid JSON: {err}")))?;
    match value {
        Value::Object(props) => Ok(props),
        other => Err(CliError::new(
            DATA_INVALID,
            format!(
                "props must be a JSON object, got {}",
                propcheck_core::ValueKind::of(&other)
            ),
        )),
    }
}
