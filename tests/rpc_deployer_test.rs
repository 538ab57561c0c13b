use alloy::primitives::{address, bytes, Address};
use alloy::signers::local::PrivateKeySigner;
use httpmock::prelude::*;
use stream_deploy::core::{ContractArtifact, Deployer};
use stream_deploy::{DeployError, ParamsPreset, RpcDeployer, StreamMigration};

const SENDER: Address = address!("627306090abab3a6e1400e9345bc60c78a8bef57");
const SIGNING_KEY: &str = "ec8f4f5c599e912dd4956e72c1b6309703f8c0712006d1bc0a5f40b837aad36d";
const TX_HASH: &str = "0x5e1d3a76fbf824220eafc8c79ad578ad2b67d01b0c2425eb1f1347e8f50882ab";

fn stream_artifact() -> ContractArtifact {
    ContractArtifact {
        contract_name: "Stream".to_string(),
        bytecode: bytes!("6080604052"),
    }
}

fn rpc_result(id: u64, result: &str) -> serde_json::Value {
    serde_json::json!({"jsonrpc": "2.0", "id": id, "result": result})
}

#[tokio::test]
async fn test_send_transaction_returns_hash() {
    let server = MockServer::start();

    let rpc_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .body_contains("\"method\":\"eth_sendTransaction\"")
            .body_contains("\"value\":\"0x9fdf42f6e480000\"")
            // bytecode followed by the recipient word
            .body_contains("0x60806040520000000000000000000000004c50a4cf1bd11ed1de4a3f66171aa3906cbc2590");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(rpc_result(0, TX_HASH));
    });

    let deployer = RpcDeployer::new(&server.url("/"), None).unwrap();
    assert!(!deployer.is_signing());
    let receipt = StreamMigration::from_preset(ParamsPreset::Standard)
        .run(&deployer, &stream_artifact(), Some(SENDER))
        .await
        .unwrap();

    rpc_mock.assert();
    assert_eq!(receipt.transaction_hash.as_deref(), Some(TX_HASH));
    assert!(!receipt.dry_run);
}

#[tokio::test]
async fn test_encoded_arguments_in_order() {
    let server = MockServer::start();

    // price, interval, duration words for the short preset
    let rpc_mock = server.mock(|when, then| {
        when.method(POST).path("/").body_contains(concat!(
            "000000000000000000000000000000000000000000000000002386f26fc10000",
            "00000000000000000000000000000000000000000000000000000000000000f0",
            "0000000000000000000000000000000000000000000000000000000000001680",
        ));
        then.status(200).json_body(rpc_result(0, TX_HASH));
    });

    let deployer = RpcDeployer::new(&server.url("/"), None).unwrap();
    StreamMigration::from_preset(ParamsPreset::Short)
        .run(&deployer, &stream_artifact(), Some(SENDER))
        .await
        .unwrap();

    rpc_mock.assert();
}

#[tokio::test]
async fn test_signed_deploy_sends_raw_transaction() {
    let server = MockServer::start();

    let chain_id = server.mock(|when, then| {
        when.method(POST).body_contains("\"method\":\"eth_chainId\"");
        then.status(200).json_body(rpc_result(0, "0x539"));
    });
    let nonce = server.mock(|when, then| {
        when.method(POST).body_contains("\"method\":\"eth_getTransactionCount\"");
        then.status(200).json_body(rpc_result(1, "0x3"));
    });
    let gas_price = server.mock(|when, then| {
        when.method(POST).body_contains("\"method\":\"eth_gasPrice\"");
        then.status(200).json_body(rpc_result(2, "0x4a817c800"));
    });
    let estimate = server.mock(|when, then| {
        when.method(POST).body_contains("\"method\":\"eth_estimateGas\"");
        then.status(200).json_body(rpc_result(3, "0x2dc6c0"));
    });
    let raw = server.mock(|when, then| {
        when.method(POST).body_contains("\"method\":\"eth_sendRawTransaction\"");
        then.status(200).json_body(rpc_result(4, TX_HASH));
    });
    let unsigned = server.mock(|when, then| {
        when.method(POST).body_contains("\"method\":\"eth_sendTransaction\"");
        then.status(500);
    });

    let signer: PrivateKeySigner = SIGNING_KEY.parse().unwrap();
    let deployer = RpcDeployer::new(&server.url("/"), Some(signer)).unwrap();
    assert!(deployer.is_signing());
    let receipt = StreamMigration::from_preset(ParamsPreset::Standard)
        .run(&deployer, &stream_artifact(), None)
        .await
        .unwrap();

    chain_id.assert();
    nonce.assert();
    gas_price.assert();
    estimate.assert();
    raw.assert();
    unsigned.assert_hits(0);
    assert_eq!(receipt.transaction_hash.as_deref(), Some(TX_HASH));
}

#[tokio::test]
async fn test_signed_deploy_rejects_other_sender() {
    let server = MockServer::start();
    let rpc_mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200);
    });

    let signer: PrivateKeySigner = SIGNING_KEY.parse().unwrap();
    let deployer = RpcDeployer::new(&server.url("/"), Some(signer)).unwrap();
    let other = address!("f17f52151ebef6c7334fad080c5704d77216b732");
    let err = StreamMigration::from_preset(ParamsPreset::Standard)
        .run(&deployer, &stream_artifact(), Some(other))
        .await
        .unwrap_err();

    assert!(matches!(err, DeployError::ConfigValidationError { ref field, .. } if field == "from"));
    rpc_mock.assert_hits(0);
}

#[tokio::test]
async fn test_rpc_error_is_reported() {
    let server = MockServer::start();
    let rpc_mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200).json_body(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 0,
            "error": {"code": -32000, "message": "sender account not recognized"}
        }));
    });

    let deployer = RpcDeployer::new(&server.url("/"), None).unwrap();
    let err = StreamMigration::from_preset(ParamsPreset::Standard)
        .run(&deployer, &stream_artifact(), Some(SENDER))
        .await
        .unwrap_err();

    rpc_mock.assert();
    assert!(matches!(err, DeployError::RpcError { code: -32000, .. }));
}

#[tokio::test]
async fn test_http_failure_is_reported() {
    let server = MockServer::start();
    let rpc_mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(503);
    });

    let deployer = RpcDeployer::new(&server.url("/"), None).unwrap();
    let err = StreamMigration::from_preset(ParamsPreset::Standard)
        .run(&deployer, &stream_artifact(), Some(SENDER))
        .await
        .unwrap_err();

    rpc_mock.assert();
    assert!(matches!(err, DeployError::RpcStatus { status: 503 }));
}

#[tokio::test]
async fn test_missing_result_is_processing_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200)
            .json_body(serde_json::json!({"jsonrpc": "2.0", "id": 0}));
    });

    let deployer = RpcDeployer::new(&server.url("/"), None).unwrap();
    let err = StreamMigration::from_preset(ParamsPreset::Standard)
        .run(&deployer, &stream_artifact(), Some(SENDER))
        .await
        .unwrap_err();

    assert!(matches!(err, DeployError::ProcessingError { .. }));
}

#[tokio::test]
async fn test_sender_is_required() {
    let server = MockServer::start();
    let rpc_mock = server.mock(|when, then| {
        when.method(POST).path("/");
        then.status(200);
    });

    let deployer = RpcDeployer::new(&server.url("/"), None).unwrap();
    let request = StreamMigration::from_preset(ParamsPreset::Standard).request(&stream_artifact(), None);
    let err = deployer.deploy(&request).await.unwrap_err();

    assert!(matches!(err, DeployError::MissingConfigError { ref field } if field == "from"));
    rpc_mock.assert_hits(0);
}

#[tokio::test]
async fn test_invalid_endpoint_is_rejected() {
    assert!(matches!(
        RpcDeployer::new("localhost:8545", None),
        Err(DeployError::InvalidConfigValueError { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_node_is_network_error() {
    let deployer =
        RpcDeployer::with_timeout("http://127.0.0.1:1", None, std::time::Duration::from_secs(2)).unwrap();
    assert_eq!(deployer.endpoint(), "http://127.0.0.1:1/");

    let err = StreamMigration::from_preset(ParamsPreset::Standard)
        .run(&deployer, &stream_artifact(), Some(SENDER))
        .await
        .unwrap_err();

    assert!(matches!(err, DeployError::TransportError { .. }));
}
