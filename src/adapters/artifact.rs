use crate::domain::model::ContractArtifact;
use crate::utils::error::{DeployError, Result};
use std::path::Path;

pub const DEFAULT_ARTIFACT_PATH: &str = "build/contracts/Stream.json";

/// Reads a compiled contract artifact. Fields other than `contractName` and
/// `bytecode` (abi, networks, source maps...) are ignored.
pub fn load_artifact<P: AsRef<Path>>(path: P) -> Result<ContractArtifact> {
    let content = std::fs::read_to_string(&path).map_err(DeployError::IoError)?;
    let artifact: ContractArtifact = serde_json::from_str(&content)?;

    tracing::debug!(
        "Loaded artifact {} from {} ({} bytecode bytes)",
        artifact.contract_name,
        path.as_ref().display(),
        artifact.bytecode.len()
    );

    Ok(artifact)
}
