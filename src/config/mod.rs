pub mod env;
pub mod networks;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::migration::ParamsPreset;
#[cfg(feature = "cli")]
use crate::config::networks::NetworkName;
#[cfg(feature = "cli")]
use alloy::primitives::Address;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "stream-deploy")]
#[command(about = "Deploy the Stream contract to a configured network")]
pub struct CliConfig {
    /// Target network: ganache, infura or cli
    #[arg(short, long, env = "DEPLOY_NETWORK")]
    pub network: Option<NetworkName>,

    /// Deployment parameter preset: standard or short
    #[arg(short, long, env = "DEPLOY_PARAMS")]
    pub params: Option<ParamsPreset>,

    /// Compiled contract artifact
    #[arg(long, default_value = crate::adapters::artifact::DEFAULT_ARTIFACT_PATH)]
    pub artifact: PathBuf,

    /// Optional TOML file overriding profiles and parameters
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Env file with INFURA_API_KEY / INFURA_PRIVATE_KEY
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Sender account. Defaults to the signing key's address, or to the
    /// profile's first account with --unlocked
    #[arg(long)]
    pub from: Option<Address>,

    /// Send eth_sendTransaction and let the node sign, even if the profile has a key
    #[arg(long)]
    pub unlocked: bool,

    /// Build and validate the transaction without sending it
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}
