use crate::adapters::artifact::{load_artifact, DEFAULT_ARTIFACT_PATH};
use crate::config::networks::{NetworkName, NetworkProfiles};
use crate::config::toml_config::DeployFileConfig;
use crate::core::migration::{ParamsPreset, StreamMigration};
use crate::domain::model::{ContractArtifact, DeployReceipt, NetworkProfile};
use crate::domain::ports::Deployer;
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::Validate;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use std::path::PathBuf;

/// Caller's choices, independent of how they were collected.
#[derive(Debug, Clone)]
pub struct DeployOptions {
    pub network: Option<NetworkName>,
    pub params: Option<ParamsPreset>,
    pub artifact: PathBuf,
    pub config: Option<PathBuf>,
    pub from: Option<Address>,
    /// Leave signing to the node even when the profile has a key.
    pub unlocked: bool,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            network: None,
            params: None,
            artifact: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            config: None,
            from: None,
            unlocked: false,
        }
    }
}

/// Everything needed for one deployment, validated up front.
#[derive(Debug, Clone)]
pub struct DeployPlan {
    pub network: NetworkName,
    pub profile: NetworkProfile,
    pub migration: StreamMigration,
    pub artifact: ContractArtifact,
    pub from: Option<Address>,
    pub signer: Option<PrivateKeySigner>,
}

impl DeployPlan {
    /// Resolution order: explicit option, then config file, then built-in default.
    /// Fails before any network access if the selected profile or the
    /// parameters are incomplete.
    pub fn prepare(options: &DeployOptions, mut profiles: NetworkProfiles) -> Result<Self> {
        let file_config = match &options.config {
            Some(path) => {
                tracing::info!("📁 Loading deploy config from: {}", path.display());
                DeployFileConfig::from_file(path)?
            }
            None => DeployFileConfig::default(),
        };
        file_config.apply_profiles(&mut profiles)?;

        let network = options
            .network
            .or(file_config.default_network)
            .unwrap_or(NetworkName::Cli);
        let selected = profiles.select(network);
        selected.validate()?;

        let params = file_config.resolve_params(options.params)?;
        params.validate()?;

        let signer = if options.unlocked { None } else { selected.signer()? };
        let from = match &signer {
            Some(signer) => {
                // 有私鑰時 sender 一定是私鑰對應的地址
                if let Some(requested) = options.from.filter(|from| *from != signer.address()) {
                    return Err(DeployError::ConfigValidationError {
                        field: "from".to_string(),
                        message: format!(
                            "{} does not match the {} signing key's address {} (use --unlocked to let the node sign)",
                            requested,
                            network,
                            signer.address()
                        ),
                    });
                }
                Some(signer.address())
            }
            None => options.from.or_else(|| selected.default_sender()),
        };

        let artifact = load_artifact(&options.artifact)?;

        Ok(Self {
            network,
            profile: selected.profile.clone(),
            migration: StreamMigration::new(params),
            artifact,
            from,
            signer,
        })
    }
}

pub struct DeployEngine<D: Deployer> {
    deployer: D,
}

impl<D: Deployer> DeployEngine<D> {
    pub fn new(deployer: D) -> Self {
        Self { deployer }
    }

    pub fn deployer(&self) -> &D {
        &self.deployer
    }

    pub async fn run(&self, plan: &DeployPlan) -> Result<DeployReceipt> {
        tracing::info!("🌐 Target network: {} ({})", plan.network, plan.profile.host);
        plan.migration
            .run(&self.deployer, &plan.artifact, plan.from)
            .await
    }
}
