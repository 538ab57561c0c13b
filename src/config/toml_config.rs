use crate::config::networks::{NetworkName, NetworkProfiles};
use crate::core::migration::ParamsPreset;
use crate::domain::model::DeploymentParams;
use crate::utils::error::{DeployError, Result};
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Optional `deploy.toml`: overrides for the built-in profiles and the
/// deployment parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployFileConfig {
    pub default_network: Option<NetworkName>,
    #[serde(default)]
    pub network: HashMap<String, ProfileOverride>,
    pub params: Option<ParamsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileOverride {
    pub accounts: Option<Vec<Address>>,
    pub contracts: Option<Vec<Address>>,
    pub host: Option<String>,
    pub private_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParamsConfig {
    pub preset: Option<ParamsPreset>,
    pub recipient: Option<Address>,
    pub price: Option<Amount>,
    pub interval: Option<u64>,
    pub duration: Option<u64>,
    pub value: Option<Amount>,
}

/// TOML integers stop at i64, so wei amounts may also be written as strings
/// (decimal or `0x` hex).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Int(u64),
    Text(String),
}

impl Amount {
    pub fn to_u256(&self, field: &str) -> Result<U256> {
        match self {
            Amount::Int(v) => Ok(U256::from(*v)),
            Amount::Text(s) => s.trim().parse::<U256>().map_err(|e| DeployError::InvalidConfigValueError {
                field: field.to_string(),
                value: s.clone(),
                reason: format!("Not an unsigned integer amount: {}", e),
            }),
        }
    }
}

impl DeployFileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DeployError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DeployError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INFURA_API_KEY})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| DeployError::config(format!("env substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_profiles(&self, profiles: &mut NetworkProfiles) -> Result<()> {
        for (key, overrides) in &self.network {
            let name: NetworkName = key.parse()?;
            let profile = profiles.get_mut(name);
            if let Some(accounts) = &overrides.accounts {
                profile.accounts = accounts.clone();
            }
            if let Some(contracts) = &overrides.contracts {
                profile.contracts = contracts.clone();
            }
            if let Some(host) = &overrides.host {
                profile.host = host.clone();
            }
            if let Some(private_key) = &overrides.private_key {
                profile.private_key = Some(private_key.clone());
            }
            tracing::debug!("Applied config overrides to network {}", name);
        }
        Ok(())
    }

    /// An explicit preset wins over the file's `params.preset`; individual
    /// fields in `[params]` then override the preset values.
    pub fn resolve_params(&self, explicit: Option<ParamsPreset>) -> Result<DeploymentParams> {
        let section = self.params.clone().unwrap_or_default();
        let preset = explicit.or(section.preset).unwrap_or_default();
        let mut params = preset.params();

        if let Some(recipient) = section.recipient {
            params.recipient = recipient;
        }
        if let Some(price) = &section.price {
            params.price = price.to_u256("params.price")?;
        }
        if let Some(interval) = section.interval {
            params.interval = interval;
        }
        if let Some(duration) = section.duration {
            params.duration = duration;
        }
        if let Some(value) = &section.value {
            params.value = value.to_u256("params.value")?;
        }

        Ok(params)
    }
}
