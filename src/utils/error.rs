use alloy::transports::{RpcError, TransportError, TransportErrorKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("HTTP client error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("RPC transport failed: {message}")]
    TransportError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Node returned HTTP {status}")]
    RpcStatus { status: u16 },

    #[error("Node rejected the transaction ({code}): {message}")]
    RpcError { code: i64, message: String },

    #[error("Deployment processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Io,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for the CLI. Every failure exits non-zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2, // 可重試
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DeployError {
    pub fn config(message: impl Into<String>) -> Self {
        DeployError::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DeployError::ConfigError { .. }
            | DeployError::MissingConfigError { .. }
            | DeployError::InvalidConfigValueError { .. }
            | DeployError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            DeployError::ApiError(_)
            | DeployError::TransportError { .. }
            | DeployError::RpcStatus { .. } => ErrorCategory::Network,
            DeployError::IoError(_) => ErrorCategory::Io,
            DeployError::SerializationError(_)
            | DeployError::RpcError { .. }
            | DeployError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DeployError::MissingConfigError { .. } => {
                "Set the missing value in .env or in the deploy config file"
            }
            DeployError::InvalidConfigValueError { .. }
            | DeployError::ConfigValidationError { .. }
            | DeployError::ConfigError { .. } => "Check the network profile and deployment parameters",
            DeployError::ApiError(_) | DeployError::TransportError { .. } | DeployError::RpcStatus { .. } => {
                "Make sure the node is running and the host URL is reachable"
            }
            DeployError::RpcError { .. } => {
                "Check that the sender account is unlocked and funded for the attached value"
            }
            DeployError::IoError(_) => "Check that the contract artifact exists (compile the contracts first)",
            DeployError::SerializationError(_) | DeployError::ProcessingError { .. } => {
                "Check the contract artifact and the node's JSON-RPC response"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Network => format!("Could not reach the node: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Processing => format!("Deployment failed: {}", self),
        }
    }
}

impl From<TransportError> for DeployError {
    fn from(err: TransportError) -> Self {
        let message = err.to_string();
        match err {
            RpcError::ErrorResp(payload) => DeployError::RpcError {
                code: payload.code,
                message: payload.message.to_string(),
            },
            RpcError::Transport(TransportErrorKind::HttpError(http)) => DeployError::RpcStatus { status: http.status },
            RpcError::NullResp | RpcError::SerError(_) | RpcError::DeserError { .. } => {
                DeployError::ProcessingError { message }
            }
            _ => DeployError::TransportError { message },
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;
