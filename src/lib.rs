pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::{DryRunDeployer, RpcDeployer};
pub use crate::app::{DeployEngine, DeployOptions, DeployPlan};
pub use crate::config::networks::{NetworkName, NetworkProfiles};
pub use crate::core::migration::{ParamsPreset, StreamMigration};
pub use crate::utils::error::{DeployError, Result};
