/// Controls contract validation and loading behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractConfig {
    /// When true, props not declared in the contract are reported as failures.
    pub reject_unknown_props: bool,
    /// When false, validation stops at the first failing prop.
    pub collect_all: bool,
    /// Maximum bytes allowed for a contract file.
    pub max_contract_file_size: usize,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            reject_unknown_props: false,
            collect_all: true,
            max_contract_file_size: 256 * 1024,
        }
    }
}
