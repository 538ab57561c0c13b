use crate::domain::model::{
    ConstructorArgs, ContractArtifact, DeployReceipt, DeploymentParams, DeploymentRequest, TxOptions,
};
use crate::domain::ports::Deployer;
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{validate_positive_number, Validate};
use alloy::primitives::{address, Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const STREAM_RECIPIENT: Address = address!("4c50a4cf1bd11ed1de4a3f66171aa3906cbc2590");
pub const STREAM_PRICE: U256 = U256::from_limbs([10_000_000_000_000_000, 0, 0, 0]);
pub const STREAM_INTERVAL: u64 = 240;

/// Named parameter sets for the Stream deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamsPreset {
    #[default]
    Standard,
    Short,
}

impl ParamsPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamsPreset::Standard => "standard",
            ParamsPreset::Short => "short",
        }
    }

    pub fn params(&self) -> DeploymentParams {
        let (duration, value) = match self {
            ParamsPreset::Standard => (17_280, 720_000_000_000_000_000u64),
            ParamsPreset::Short => (5_760, 240_000_000_000_000_000u64),
        };

        DeploymentParams {
            recipient: STREAM_RECIPIENT,
            price: STREAM_PRICE,
            interval: STREAM_INTERVAL,
            duration,
            value: U256::from(value),
        }
    }
}

impl fmt::Display for ParamsPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamsPreset {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ParamsPreset::Standard),
            "short" => Ok(ParamsPreset::Short),
            other => Err(DeployError::InvalidConfigValueError {
                field: "params".to_string(),
                value: other.to_string(),
                reason: "Valid presets: standard, short".to_string(),
            }),
        }
    }
}

impl Validate for DeploymentParams {
    fn validate(&self) -> Result<()> {
        if self.recipient.is_zero() {
            return Err(DeployError::InvalidConfigValueError {
                field: "params.recipient".to_string(),
                value: self.recipient.to_string(),
                reason: "Recipient cannot be the zero address".to_string(),
            });
        }
        validate_positive_number("params.price", self.price)?;
        validate_positive_number("params.interval", self.interval)?;
        validate_positive_number("params.duration", self.duration)?;

        if !(self.value % self.price).is_zero() {
            tracing::warn!(
                "⚠️ Attached value {} is not a whole number of price periods ({})",
                self.value,
                self.price
            );
        }
        Ok(())
    }
}

/// Deploys the Stream contract with one parameter record, exactly once per `run`.
#[derive(Debug, Clone)]
pub struct StreamMigration {
    params: DeploymentParams,
}

impl StreamMigration {
    pub fn new(params: DeploymentParams) -> Self {
        Self { params }
    }

    pub fn from_preset(preset: ParamsPreset) -> Self {
        Self::new(preset.params())
    }

    pub fn params(&self) -> &DeploymentParams {
        &self.params
    }

    pub fn request(&self, artifact: &ContractArtifact, from: Option<Address>) -> DeploymentRequest {
        let p = &self.params;
        DeploymentRequest {
            contract: artifact.clone(),
            constructor_args: ConstructorArgs {
                recipient: p.recipient,
                price: p.price,
                interval: U256::from(p.interval),
                duration: U256::from(p.duration),
            },
            options: TxOptions { value: p.value, from },
        }
    }

    pub async fn run<D: Deployer + ?Sized>(
        &self,
        deployer: &D,
        artifact: &ContractArtifact,
        from: Option<Address>,
    ) -> Result<DeployReceipt> {
        let request = self.request(artifact, from);

        tracing::info!(
            "📦 Deploying {} (recipient={}, price={}, interval={}, duration={}, value={})",
            request.contract.contract_name,
            self.params.recipient,
            self.params.price,
            self.params.interval,
            self.params.duration,
            request.options.value
        );

        let receipt = deployer.deploy(&request).await?;

        match &receipt.transaction_hash {
            Some(hash) => tracing::info!("📨 Deployment transaction submitted: {}", hash),
            None => tracing::info!("🔍 Deployment request prepared, nothing submitted"),
        }

        Ok(receipt)
    }
}
