use crate::domain::model::{DeployReceipt, DeploymentRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Something that can publish a contract-creation transaction.
#[async_trait]
pub trait Deployer: Send + Sync {
    async fn deploy(&self, request: &DeploymentRequest) -> Result<DeployReceipt>;
}
