use config::{Config, ConfigError, Environment, File};
use derivative::*;
use serde_derive::Deserialize;
use std::path::PathBuf;

use crate::configuration::constants::common::*;

/// Tunables of the bundle reader and of the results writer.
#[derive(Debug, Clone, Deserialize, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Settings {
    /// Glob matched against file names inside an input directory
    #[derivative(Default(value = "DEFAULT_RESULTS_PATTERN.to_owned()"))]
    pub results_pattern: String,
    /// Directory next to each summary file holding its attachments
    #[derivative(Default(value = "DEFAULT_ATTACHMENTS_DIR.to_owned()"))]
    pub attachments_dir: String,
    /// Nesting limit for both the test tree and every activity tree
    #[derivative(Default(value = "DEFAULT_MAX_DEPTH"))]
    pub max_depth: usize,
    #[derivative(Default(value = "PathBuf::from(DEFAULT_OUTPUT)"))]
    pub output: PathBuf,
    #[derivative(Default(value = "XCODE_RESULT_FORMAT.to_owned()"))]
    pub result_format: String,
}

impl Settings {
    /// Merges an optional configuration file with `XCALLURE_*` environment variables.
    pub fn from(file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        if let Some(file) = file {
            config.merge(File::from(file))?;
        }
        config.merge(Environment::with_prefix(ENV_PREFIX))?;
        config.try_into()
    }
}
