//! Run configuration for the validator
//!
//! Controls which log is read and how a position the oracle cannot parse
//! is handled.

use std::path::PathBuf;

/// Default log location, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "perf_debug.txt";

/// What to do when an origin position is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MalformedPolicy {
    /// Report the record as unevaluated and continue with the next one
    #[default]
    Skip,
    /// Stop the run at the first malformed record
    Abort,
}

#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Path of the position log
    pub log_path: PathBuf,

    /// Handling of malformed origin positions
    pub on_malformed: MalformedPolicy,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            on_malformed: MalformedPolicy::Skip,
        }
    }
}

impl ValidatorConfig {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }
}
