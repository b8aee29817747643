//! Environment-driven configuration.

use core::str::FromStr;
use std::path::PathBuf;

use storefront_catalog::{AssumeNo, AssumeYes, ConfirmPriceDrop};
use storefront_observability::LogFormat;
use thiserror::Error;

use crate::prompt::PromptConfirm;

pub const SEED_VAR: &str = "STOREFRONT_SEED";
pub const CONFIRM_VAR: &str = "STOREFRONT_CONFIRM";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// How price drops get confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmMode {
    /// Ask on stdin.
    #[default]
    Prompt,
    Yes,
    No,
}

impl FromStr for ConfirmMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prompt" => Ok(ConfirmMode::Prompt),
            "yes" | "y" => Ok(ConfirmMode::Yes),
            "no" | "n" => Ok(ConfirmMode::No),
            other => Err(format!("unknown confirm mode '{other}' (expected: prompt, yes, no)")),
        }
    }
}

impl ConfirmMode {
    pub fn confirmer(self) -> Box<dyn ConfirmPriceDrop> {
        match self {
            ConfirmMode::Prompt => Box::new(PromptConfirm::stdin()),
            ConfirmMode::Yes => Box::new(AssumeYes),
            ConfirmMode::No => Box::new(AssumeNo),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    /// Seed catalog file; the embedded seed is used when unset.
    pub seed_path: Option<PathBuf>,
    pub confirm: ConfirmMode,
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let seed_path = get(SEED_VAR).map(PathBuf::from);
        let confirm = match get(CONFIRM_VAR) {
            Some(v) => v.parse::<ConfirmMode>().map_err(|message| ConfigError::Invalid {
                var: CONFIRM_VAR,
                message,
            })?,
            None => ConfirmMode::default(),
        };
        let log_format = match get(LOG_FORMAT_VAR) {
            Some(v) => v.parse::<LogFormat>().map_err(|message| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                message,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            seed_path,
            confirm,
            log_format,
        })
    }
}
