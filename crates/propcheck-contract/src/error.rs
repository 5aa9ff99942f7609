/// Errors raised while declaring or loading a contract.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A combinator was given something that is not a checker declaration.
    #[error("`{combinator}` expects a checker declaration, got {found}")]
    NotAChecker {
        combinator: &'static str,
        found: &'static str,
    },

    /// The declaration names a checker that does not exist.
    #[error("unknown checker `{0}`")]
    UnknownChecker(String),

    /// A known checker was given a malformed argument.
    #[error("invalid argument for `{checker}`: {message}")]
    InvalidArgument {
        checker: &'static str,
        message: String,
    },

    /// A prop declaration inside a contract failed to compile.
    #[error("prop `{prop}`: {source}")]
    InProp {
        prop: String,
        source: Box<ConfigError>,
    },

    /// The contract is not valid JSON.
    #[error("contract is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The contract file could not be opened or read.
    #[error("{context}: {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },

    /// The contract file was rejected before parsing.
    #[error("failed to load contract: {0}")]
    LoadFailed(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
