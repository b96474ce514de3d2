use thiserror::Error;

/// Failure of a single call to the generative-text service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Model service rejected the credential: {0}")]
    Authentication(String),

    #[error("Model service unreachable: {0}")]
    Transport(String),

    #[error("Model service quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Model service returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

impl ModelError {
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::Authentication(_) => "E_MODEL_AUTHENTICATION",
            ModelError::Transport(_) => "E_MODEL_TRANSPORT",
            ModelError::QuotaExceeded(_) => "E_MODEL_QUOTA_EXCEEDED",
            ModelError::Remote { .. } => "E_MODEL_REMOTE",
            ModelError::MalformedResponse(_) => "E_MODEL_MALFORMED_RESPONSE",
        }
    }
}

/// Recoverable problems with the submitted form, shown to the user as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter both the language and the disease name.")]
    MissingRequiredFields,

    #[error("Unsupported language '{0}'. Please pick one of the listed languages.")]
    UnsupportedLanguage(String),

    #[error("Unsupported gender '{0}'. Please pick one of the listed options.")]
    UnsupportedGender(String),

    #[error("Age must be a whole number, got '{0}'.")]
    InvalidAge(String),
}
