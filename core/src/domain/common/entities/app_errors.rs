use thiserror::Error;

use crate::domain::recommendation::entities::errors::ModelError;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error(transparent)]
    ModelError(#[from] ModelError),
}
