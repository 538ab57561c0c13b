use crate::domain::model::NetworkProfile;
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{parse_signer, validate_required_field, validate_url, Validate};
use alloy::primitives::{address, Address};
use alloy::signers::local::PrivateKeySigner;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const INFURA_HOST_PREFIX: &str = "https://rinkeby.infura.io/";
pub const INFURA_API_KEY_VAR: &str = "INFURA_API_KEY";
pub const INFURA_PRIVATE_KEY_VAR: &str = "INFURA_PRIVATE_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkName {
    Ganache,
    Infura,
    Cli,
}

impl NetworkName {
    pub const ALL: [NetworkName; 3] = [NetworkName::Ganache, NetworkName::Infura, NetworkName::Cli];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkName::Ganache => "ganache",
            NetworkName::Infura => "infura",
            NetworkName::Cli => "cli",
        }
    }

    /// Public networks have no unlocked node accounts, so a signing key is mandatory.
    pub fn requires_private_key(&self) -> bool {
        matches!(self, NetworkName::Infura)
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkName {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ganache" => Ok(NetworkName::Ganache),
            "infura" => Ok(NetworkName::Infura),
            "cli" => Ok(NetworkName::Cli),
            other => Err(DeployError::InvalidConfigValueError {
                field: "network".to_string(),
                value: other.to_string(),
                reason: "Valid networks: ganache, infura, cli".to_string(),
            }),
        }
    }
}

/// The three known networks. Config-file overrides are applied before a
/// plan is prepared; nothing changes them after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfiles {
    ganache: NetworkProfile,
    infura: NetworkProfile,
    cli: NetworkProfile,
}

impl NetworkProfiles {
    /// Reads the Infura credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(INFURA_API_KEY_VAR).unwrap_or_default();

        Self {
            ganache: NetworkProfile {
                accounts: vec![
                    address!("b647a7fbbbcda7f477ce315c0c2d814467521005"),
                    address!("e7d6a2a1cbed37ee7446d78fd5e6b38aaae3f3b2"),
                    address!("9e7264fe690dafa282457b4f2ff1994513411228"),
                ],
                contracts: vec![
                    address!("a54c7bf3811ffbd125b52f7d140911f20a57ed56"),
                ],
                host: "http://localhost:7545".to_string(),
                private_key: Some(
                    "ab030672f2f3da2d187f27e71a4b3564d98af64024340ba582a44e348f922817".to_string(),
                ),
            },
            infura: NetworkProfile {
                accounts: vec![
                    address!("98c0047400da37d278e76e78c6f60a7882ae064d"),
                    address!("19149798f777a3d738777334ccbf0063a04fca3b"),
                ],
                contracts: vec![
                    address!("db9a535f8c43cb87b7c2a3019dc24a9b1edd6c31"),
                    address!("a2dc80a1e7de6ec5285c7af289c6e1e0efd4127e"),
                    address!("1f1c18a3e029f29b7eee064b223fe23d25d643db"),
                ],
                host: format!("{}{}", INFURA_HOST_PREFIX, api_key),
                private_key: lookup(INFURA_PRIVATE_KEY_VAR),
            },
            cli: NetworkProfile {
                accounts: vec![
                    address!("627306090abab3a6e1400e9345bc60c78a8bef57"),
                    address!("f17f52151ebef6c7334fad080c5704d77216b732"),
                ],
                contracts: vec![
                    address!("345ca3e014aaf5dca488057592ee47305d9b3e10"),
                ],
                host: "http://localhost:8545".to_string(),
                private_key: Some(
                    "ec8f4f5c599e912dd4956e72c1b6309703f8c0712006d1bc0a5f40b837aad36d".to_string(),
                ),
            },
        }
    }

    pub fn get(&self, name: NetworkName) -> &NetworkProfile {
        match name {
            NetworkName::Ganache => &self.ganache,
            NetworkName::Infura => &self.infura,
            NetworkName::Cli => &self.cli,
        }
    }

    pub(crate) fn get_mut(&mut self, name: NetworkName) -> &mut NetworkProfile {
        match name {
            NetworkName::Ganache => &mut self.ganache,
            NetworkName::Infura => &mut self.infura,
            NetworkName::Cli => &mut self.cli,
        }
    }

    /// The default target when no network is chosen explicitly.
    pub fn active(&self) -> &NetworkProfile {
        &self.cli
    }

    pub fn select(&self, name: NetworkName) -> SelectedNetwork<'_> {
        SelectedNetwork {
            name,
            profile: self.get(name),
        }
    }
}

/// A profile together with the name it was selected by.
#[derive(Debug, Clone, Copy)]
pub struct SelectedNetwork<'a> {
    pub name: NetworkName,
    pub profile: &'a NetworkProfile,
}

impl SelectedNetwork<'_> {
    /// First account of the profile, used when the node signs.
    pub fn default_sender(&self) -> Option<Address> {
        self.profile.accounts.first().copied()
    }

    /// Signer built from the profile's private key, if it has one.
    pub fn signer(&self) -> Result<Option<PrivateKeySigner>> {
        self.profile
            .private_key
            .as_deref()
            .map(|key| parse_signer(&format!("network.{}.private_key", self.name), key))
            .transpose()
    }
}

impl Validate for SelectedNetwork<'_> {
    fn validate(&self) -> Result<()> {
        let prefix = format!("network.{}", self.name);

        validate_url(&format!("{}.host", prefix), &self.profile.host)?;

        // 只有 api key 時 host 也會是合法 URL，要另外檢查
        if self.name == NetworkName::Infura && self.profile.host == INFURA_HOST_PREFIX {
            return Err(DeployError::MissingConfigError {
                field: INFURA_API_KEY_VAR.to_string(),
            });
        }

        if self.name.requires_private_key() {
            validate_required_field(INFURA_PRIVATE_KEY_VAR, &self.profile.private_key)?;
        }
        self.signer()?;

        Ok(())
    }
}
