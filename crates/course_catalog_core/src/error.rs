use std::path::PathBuf;

use thiserror::Error;

use crate::types::Platform;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// A dataset could not be built at startup. Never produced by a request.
    #[error("dataset unavailable for {platform} ({}): {reason}", .path.display())]
    DatasetUnavailable {
        platform: Platform,
        path: PathBuf,
        reason: String,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("side effect failed: {0}")]
    SideEffectFailed(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn dataset_unavailable(
        platform: Platform,
        path: impl Into<PathBuf>,
        reason: impl ToString,
    ) -> Self {
        Self::DatasetUnavailable {
            platform,
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InvalidInput(_) => 400,
            Self::DatasetUnavailable { .. } => 503,
            Self::SideEffectFailed(_) => 500,
            Self::Internal(_) => 500,
        }
    }

    /// Message safe to show a client. Internal causes stay server-side.
    pub fn public_detail(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::InvalidInput(msg) => msg.clone(),
            Self::SideEffectFailed(_) => "Failed to open course URL".to_string(),
            Self::DatasetUnavailable { .. } => "One or more datasets are missing.".to_string(),
            Self::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}
