use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Connectivity and credential data for one target network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub accounts: Vec<Address>,
    pub contracts: Vec<Address>,
    pub host: String,
    /// Kept as read from the environment; parsed into a signer on demand.
    pub private_key: Option<String>,
}

/// Constructor arguments of the Stream contract plus the value attached to
/// the creation transaction. Amounts are in wei.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentParams {
    pub recipient: Address,
    pub price: U256,
    pub interval: u64,
    pub duration: u64,
    pub value: U256,
}

/// Compiled contract as emitted by the Solidity toolchain
/// (`build/contracts/<Name>.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractArtifact {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    pub bytecode: Bytes,
}

/// Stream constructor arguments, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorArgs {
    pub recipient: Address,
    pub price: U256,
    pub interval: U256,
    pub duration: U256,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOptions {
    /// Attached amount in base units.
    pub value: U256,
    pub from: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub contract: ContractArtifact,
    pub constructor_args: ConstructorArgs,
    pub options: TxOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployReceipt {
    pub transaction_hash: Option<String>,
    pub dry_run: bool,
}
