//! Explorer configuration
//!
//! The data directory is a value passed into discovery and loading rather
//! than a module constant, so any directory (or in-memory source) can be
//! used.

use crate::discovery::PROFILE_FILE_PATTERN;
use std::path::PathBuf;

/// Data directory used when none is configured
pub const DEFAULT_DATA_DIR: &str = "./Data/2020/11/";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ARGO_DATA_DIR";

/// What the loader does with a file it cannot decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the whole load with the file's error
    #[default]
    Abort,
    /// Log a warning, skip the file and continue
    SkipAndLog,
}

/// Configuration for discovery and loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    pub data_dir: PathBuf,
    pub file_pattern: String,
    pub failure_policy: FailurePolicy,
}

impl ExplorerConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_pattern: PROFILE_FILE_PATTERN.to_string(),
            failure_policy: FailurePolicy::Abort,
        }
    }
}
