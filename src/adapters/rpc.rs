use crate::core::abi;
use crate::domain::model::{DeployReceipt, DeploymentRequest};
use crate::domain::ports::Deployer;
use crate::utils::error::{DeployError, Result};
use crate::utils::validation::{validate_required_field, validate_url};
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::TxHash;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::Http;
use alloy::transports::utils::guess_local_url;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Sends the creation transaction to a node.
///
/// With a signer the transaction is filled (chain id, nonce, gas price, gas
/// limit), signed locally and sent with `eth_sendRawTransaction`. Without one
/// it goes out as `eth_sendTransaction` and the node signs with its unlocked
/// sender account. Either way the call returns once the node accepts the
/// transaction; the receipt is not awaited.
pub struct RpcDeployer {
    client: Client,
    endpoint: Url,
    signer: Option<PrivateKeySigner>,
}

impl RpcDeployer {
    pub fn new(endpoint: &str, signer: Option<PrivateKeySigner>) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            endpoint: validate_url("host", endpoint)?,
            signer,
        })
    }

    pub fn with_timeout(endpoint: &str, signer: Option<PrivateKeySigner>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: validate_url("host", endpoint)?,
            signer,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn is_signing(&self) -> bool {
        self.signer.is_some()
    }

    fn rpc_client(&self) -> RpcClient {
        let http = Http::with_client(self.client.clone(), self.endpoint.clone());
        RpcClient::new(http, guess_local_url(self.endpoint.as_str()))
    }

    async fn send_signed(&self, signer: &PrivateKeySigner, tx: TransactionRequest) -> Result<TxHash> {
        let sender = signer.address();
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .wallet(EthereumWallet::from(signer.clone()))
            .connect_client(self.rpc_client());

        let chain_id = provider.get_chain_id().await?;
        let nonce = provider.get_transaction_count(sender).await?;
        let gas_price = provider.get_gas_price().await?;

        let mut tx = tx
            .with_from(sender)
            .with_chain_id(chain_id)
            .with_nonce(nonce)
            .with_gas_price(gas_price);
        let gas_limit = provider.estimate_gas(tx.clone()).await?;
        tx.set_gas_limit(gas_limit);

        tracing::debug!(
            "Signing creation tx as {} (chain_id={}, nonce={}, gas_price={}, gas={})",
            sender,
            chain_id,
            nonce,
            gas_price,
            gas_limit
        );

        let pending = provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }

    async fn send_unlocked(&self, tx: TransactionRequest) -> Result<TxHash> {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_client(self.rpc_client());

        let pending = provider.send_transaction(tx).await?;
        Ok(*pending.tx_hash())
    }
}

#[async_trait]
impl Deployer for RpcDeployer {
    async fn deploy(&self, request: &DeploymentRequest) -> Result<DeployReceipt> {
        let tx = TransactionRequest::default()
            .with_deploy_code(abi::creation_code(request)?)
            .with_value(request.options.value);

        let hash = match &self.signer {
            Some(signer) => {
                if let Some(from) = request.options.from.filter(|from| *from != signer.address()) {
                    return Err(DeployError::ConfigValidationError {
                        field: "from".to_string(),
                        message: format!(
                            "{} does not match the signing key's address {}",
                            from,
                            signer.address()
                        ),
                    });
                }
                tracing::debug!("Sending eth_sendRawTransaction to: {}", self.endpoint);
                self.send_signed(signer, tx).await?
            }
            None => {
                let from = *validate_required_field("from", &request.options.from)?;
                tracing::debug!("Sending eth_sendTransaction to: {}", self.endpoint);
                self.send_unlocked(tx.with_from(from)).await?
            }
        };

        Ok(DeployReceipt {
            transaction_hash: Some(format!("{:#x}", hash)),
            dry_run: false,
        })
    }
}
