pub mod config;
pub mod error;
pub mod generate;
pub mod oracle;
pub mod parser;
pub mod report;
pub mod validator;

pub use config::{MalformedPolicy, ValidatorConfig};
pub use error::ValidateError;
pub use oracle::{Oracle, StandardOracle};
pub use parser::{FenString, ValidationRecord};
pub use validator::{Summary, ValidationResult};

/// Read the configured log, validate every record and return the summary.
pub fn run<O: Oracle + ?Sized>(config: &ValidatorConfig, oracle: &O) -> Result<Summary, ValidateError> {
    let records = parser::read_log(&config.log_path)?;
    validator::validate_all(&records, oracle, config.on_malformed)
}
