use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod check;
pub mod inspect;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a props file against a contract.
    Check(CheckArgs),
    /// Compile a contract and list its declared props.
    Inspect(InspectArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Inspect(args) => inspect::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Contract file (JSON).
    #[arg(long, short = 'c', value_name = "FILE")]
    pub contract: PathBuf,
    /// Props file (JSON object). Use `-` for stdin.
    #[arg(long, short = 'p', value_name = "FILE")]
    pub props: PathBuf,
    /// Component label used in messages. Default: the contract's component.
    #[arg(long)]
    pub component: Option<String>,
    /// Reject props the contract does not declare.
    #[arg(long)]
    pub strict: bool,
    /// Stop at the first failing prop.
    #[arg(long)]
    pub first: bool,
    /// Maximum bytes read from the props file or stdin.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_PROPS_SIZE)]
    pub max_props_size: usize,
}

/// Default cap on props input.
pub const DEFAULT_MAX_PROPS_SIZE: usize = 1024 * 1024;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Contract file (JSON).
    pub contract: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
