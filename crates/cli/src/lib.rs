//! Storefront demo: builds a catalog from a seed, prints listings and
//! aggregates, then walks through a few guarded price changes.

pub mod app;
pub mod config;
pub mod prompt;
pub mod seed;

pub use config::{CliConfig, ConfigError, ConfirmMode};
