use std::io::Read;
use std::path::Path;

use propcheck_core::{CheckContext, CheckError, Checker, Props};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::ContractConfig;
use crate::decl::{compile, PropType};
use crate::error::{ConfigError, Result};

/// Declared props of one component and the checker for each.
#[derive(Debug, Clone)]
pub struct Contract {
    component: String,
    props: Vec<(String, PropType)>,
    config: ContractConfig,
}

#[derive(Deserialize)]
struct ContractFile {
    component: String,
    #[serde(default)]
    props: Map<String, Value>,
}

impl Contract {
    /// Create an empty contract with default config.
    pub fn new(component: impl Into<String>) -> Self {
        Self::with_config(component, ContractConfig::default())
    }

    /// Create an empty contract with explicit config.
    pub fn with_config(component: impl Into<String>, config: ContractConfig) -> Self {
        Self {
            component: component.into(),
            props: Vec::new(),
            config,
        }
    }

    /// Declare a prop. Redeclaring a prop replaces its checker in place.
    pub fn declare(mut self, prop: impl Into<String>, checker: impl Into<PropType>) -> Self {
        let prop = prop.into();
        let checker = checker.into();
        match self.props.iter().position(|(name, _)| *name == prop) {
            Some(index) => self.props[index].1 = checker,
            None => self.props.push((prop, checker)),
        }
        self
    }

    /// Compile a contract from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with_config(json, ContractConfig::default())
    }

    /// Compile a contract from a JSON string with explicit config.
    pub fn from_json_with_config(json: &str, config: ContractConfig) -> Result<Self> {
        let file: ContractFile = serde_json::from_str(json)?;
        let mut contract = Self::with_config(file.component, config);

        for (prop, decl) in &file.props {
            let checker = compile(decl).map_err(|err| ConfigError::InProp {
                prop: prop.clone(),
                source: Box::new(err),
            })?;
            contract = contract.declare(prop.as_str(), checker);
        }

        tracing::debug!(
            component = %contract.component,
            props = contract.props.len(),
            "compiled contract"
        );
        Ok(contract)
    }

    /// Load a contract from a file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_file_with_config(path, ContractConfig::default())
    }

    /// Load a contract from a file with explicit config.
    pub fn from_file_with_config(path: &Path, config: ContractConfig) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Io {
            context: format!("failed opening {}", path.display()),
            source,
        })?;
        let metadata = file.metadata().map_err(|source| ConfigError::Io {
            context: format!("failed reading metadata of {}", path.display()),
            source,
        })?;
        if !metadata.is_file() {
            return Err(ConfigError::LoadFailed(format!(
                "not a regular file: {}",
                path.display()
            )));
        }

        let max_bytes = config.max_contract_file_size;
        if metadata.len() > max_bytes as u64 {
            return Err(ConfigError::LoadFailed(format!(
                "contract file too large ({} bytes): {}",
                metadata.len(),
                path.display()
            )));
        }

        let read_limit = u64::try_from(max_bytes.saturating_add(1)).unwrap_or(u64::MAX);
        let mut content = String::new();
        file.take(read_limit)
            .read_to_string(&mut content)
            .map_err(|source| ConfigError::Io {
                context: format!("failed reading {}", path.display()),
                source,
            })?;
        if content.len() > max_bytes {
            return Err(ConfigError::LoadFailed(format!(
                "contract file too large while reading: {}",
                path.display()
            )));
        }

        let contract = Self::from_json_with_config(&content, config)?;
        tracing::info!(
            path = %path.display(),
            component = %contract.component,
            "loaded contract"
        );
        Ok(contract)
    }

    /// Validate props under the contract's component label.
    pub fn validate(&self, props: &Props) -> ContractReport {
        self.validate_as(props, &self.component)
    }

    /// Validate props, labelling errors with `component`.
    pub fn validate_as(&self, props: &Props, component: &str) -> ContractReport {
        let ctx = CheckContext::new(component);
        let mut failures = Vec::new();

        for (prop, checker) in &self.props {
            if let Err(err) = checker.check(props, prop, &ctx) {
                tracing::debug!(
                    component,
                    prop = prop.as_str(),
                    error = %err,
                    "prop check failed"
                );
                failures.push(Failure::Check(err));
                if !self.config.collect_all {
                    return ContractReport::new(component, failures);
                }
            }
        }

        if self.config.reject_unknown_props {
            for name in props.keys() {
                if self.checker(name).is_none() {
                    failures.push(Failure::UnknownProp {
                        prop: name.clone(),
                        component: component.to_string(),
                    });
                    if !self.config.collect_all {
                        break;
                    }
                }
            }
        }

        ContractReport::new(component, failures)
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Declared prop names, in declaration order.
    pub fn prop_names(&self) -> impl Iterator<Item = &str> {
        self.props.iter().map(|(name, _)| name.as_str())
    }

    /// Checker declared for `prop`.
    pub fn checker(&self, prop: &str) -> Option<&PropType> {
        self.props
            .iter()
            .find(|(name, _)| name == prop)
            .map(|(_, checker)| checker)
    }
}

/// One reason a props object does not satisfy a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// A declared prop failed its checker.
    Check(CheckError),
    /// The prop is not declared and the contract rejects unknown props.
    UnknownProp { prop: String, component: String },
}

impl Failure {
    pub fn prop(&self) -> &str {
        match self {
            Failure::Check(err) => err.prop(),
            Failure::UnknownProp { prop, .. } => prop,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Failure::Check(err) => err.code(),
            Failure::UnknownProp { .. } => "unknown_prop",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Failure::Check(err) => err.to_string(),
            Failure::UnknownProp { prop, component } => {
                format!("unknown prop `{prop}` supplied to `{component}`")
            }
        }
    }
}

/// Outcome of validating one props object against a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractReport {
    pub component: String,
    pub failures: Vec<Failure>,
}

impl ContractReport {
    fn new(component: &str, failures: Vec<Failure>) -> Self {
        Self {
            component: component.to_string(),
            failures,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}
