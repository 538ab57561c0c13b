use crate::core::abi;
use crate::domain::model::{DeployReceipt, DeploymentRequest};
use crate::domain::ports::Deployer;
use crate::utils::error::{DeployError, Result};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

/// Records deployment requests instead of sending them.
#[derive(Debug, Default)]
pub struct DryRunDeployer {
    requests: Mutex<Vec<DeploymentRequest>>,
}

impl DryRunDeployer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Result<Vec<DeploymentRequest>> {
        Ok(self.log()?.clone())
    }

    fn log(&self) -> Result<MutexGuard<'_, Vec<DeploymentRequest>>> {
        self.requests.lock().map_err(|_| DeployError::ProcessingError {
            message: "dry-run request log poisoned".to_string(),
        })
    }
}

#[async_trait]
impl Deployer for DryRunDeployer {
    async fn deploy(&self, request: &DeploymentRequest) -> Result<DeployReceipt> {
        // 確認資料能正確編碼，但不送出
        let code = abi::creation_code(request)?;
        let from = request
            .options
            .from
            .map(|from| from.to_string())
            .unwrap_or_else(|| "<signer>".to_string());
        tracing::info!(
            "🔍 [dry-run] {} args={:?} value={} from={} data_bytes={}",
            request.contract.contract_name,
            request.constructor_args,
            request.options.value,
            from,
            code.len()
        );

        self.log()?.push(request.clone());

        Ok(DeployReceipt {
            transaction_hash: None,
            dry_run: true,
        })
    }
}
