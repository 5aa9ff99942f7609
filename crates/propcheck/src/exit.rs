use std::fmt;
use std::io;

use propcheck_contract::ConfigError;

pub const SUCCESS: i32 = 0;
/// Props were read but do not satisfy the contract.
pub const VALIDATION_FAILED: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => USAGE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn config_error(context: &str, err: ConfigError) -> CliError {
    match err {
        ConfigError::Io {
            context: detail,
            source,
        } => io_error(&format!("{context}: {detail}"), source),
        ConfigError::LoadFailed(_) => CliError::new(USAGE, format!("{context}: {err}")),
        ConfigError::InvalidJson(_)
        | ConfigError::NotAChecker { .. }
        | ConfigError::UnknownChecker(_)
        | ConfigError::InvalidArgument { .. }
        | ConfigError::InProp { .. } => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_config_error(kind: io::ErrorKind) -> ConfigError {
        ConfigError::Io {
            context: "failed reading grid.json".to_string(),
            source: io::Error::new(kind, "boom"),
        }
    }

    #[test]
    fn unreadable_contract_maps_by_io_kind() {
        let missing = config_error("contract", io_config_error(io::ErrorKind::NotFound));
        assert_eq!(missing.code, USAGE);
        assert_eq!(missing.message, "contract: failed reading grid.json: boom");

        let denied = config_error(
            "contract",
            io_config_error(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(denied.code, USAGE);

        let other = config_error("contract", io_config_error(io::ErrorKind::Other));
        assert_eq!(other.code, INTERNAL);
    }

    #[test]
    fn rejected_and_malformed_contracts_have_distinct_codes() {
        let oversized = config_error(
            "contract",
            ConfigError::LoadFailed("too large".to_string()),
        );
        assert_eq!(oversized.code, USAGE);

        let malformed = config_error(
            "contract",
            ConfigError::UnknownChecker("float".to_string()),
        );
        assert_eq!(malformed.code, DATA_INVALID);
    }
}
