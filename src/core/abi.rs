//! Contract-creation payload for the Stream contract.

use crate::domain::model::{ConstructorArgs, DeploymentRequest};
use crate::utils::error::{DeployError, Result};
use alloy::primitives::Bytes;
use alloy::sol;
use alloy::sol_types::SolConstructor;

sol! {
    contract Stream {
        constructor(address recipient, uint256 price, uint256 interval, uint256 duration) payable;
    }
}

/// ABI-encoded constructor arguments, one 32-byte word per argument.
pub fn encode_constructor(args: &ConstructorArgs) -> Vec<u8> {
    Stream::constructorCall {
        recipient: args.recipient,
        price: args.price,
        interval: args.interval,
        duration: args.duration,
    }
    .abi_encode()
}

/// Bytecode followed by the encoded constructor arguments.
pub fn creation_code(request: &DeploymentRequest) -> Result<Bytes> {
    let bytecode = &request.contract.bytecode;
    if bytecode.is_empty() {
        return Err(DeployError::ProcessingError {
            message: format!(
                "Contract {} has no bytecode (abstract contract or interface?)",
                request.contract.contract_name
            ),
        });
    }

    let args = encode_constructor(&request.constructor_args);
    let mut code = Vec::with_capacity(bytecode.len() + args.len());
    code.extend_from_slice(bytecode);
    code.extend_from_slice(&args);
    Ok(Bytes::from(code))
}
