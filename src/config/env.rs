use crate::utils::error::{DeployError, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_ENV_FILE: &str = ".env";

/// `.env` next to the deploy config file when one is given, otherwise in the
/// working directory. An explicit path always wins.
pub fn resolve_env_path(explicit: Option<&Path>, config_file: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    config_file
        .and_then(Path::parent)
        .map(|dir| dir.join(DEFAULT_ENV_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
}

/// Loads variables from `path` without overriding ones already set.
/// Returns `false` when the file does not exist.
pub fn load_env_file(path: &Path) -> Result<bool> {
    match dotenv::from_path(path) {
        Ok(()) => {
            tracing::debug!("Loaded environment from {}", path.display());
            Ok(true)
        }
        Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No env file at {}, using process environment only", path.display());
            Ok(false)
        }
        Err(e) => Err(DeployError::ConfigError {
            message: format!("Failed to load {}: {}", path.display(), e),
        }),
    }
}
