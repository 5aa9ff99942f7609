use propcheck_contract::Contract;

use crate::cmd::InspectArgs;
use crate::exit::{config_error, CliResult, SUCCESS};
use crate::output::{print_contract, OutputFormat};

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let contract =
        Contract::from_file(&args.contract).map_err(|err| config_error("contract", err))?;
    print_contract(&contract, format);
    Ok(SUCCESS)
}
