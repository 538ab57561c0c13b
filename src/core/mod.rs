pub mod abi;
pub mod migration;

pub use crate::domain::model::{
    ConstructorArgs, ContractArtifact, DeployReceipt, DeploymentParams, DeploymentRequest, NetworkProfile,
    TxOptions,
};
pub use crate::domain::ports::Deployer;
pub use crate::utils::error::Result;
