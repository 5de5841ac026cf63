use contracts::shared::api_response::FALLBACK_MESSAGE;
use thiserror::Error;

/// Failure of a remote resource call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The server rejected the submitted fields (HTTP 400/422)
    #[error("{0}")]
    Validation(String),
    /// Network failure, aborted request or timeout
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered, but reported failure
    #[error("{0}")]
    Server(String),
    /// The target no longer exists server-side
    #[error("{0}")]
    NotFound(String),
    #[error("{resource} does not support {verb}")]
    Unsupported {
        resource: &'static str,
        verb: &'static str,
    },
}

impl GatewayError {
    /// Text shown to the user in a notification.
    ///
    /// Transport details are for the log only.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => FALLBACK_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Transport(_) => "transport",
            Self::Server(_) => "server",
            Self::NotFound(_) => "not_found",
            Self::Unsupported { .. } => "unsupported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_detail_is_hidden_from_user() {
        let err = GatewayError::Transport("TypeError: Failed to fetch".into());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        assert!(err.to_string().contains("Failed to fetch"));
    }

    #[test]
    fn test_server_message_is_shown_verbatim() {
        let err = GatewayError::NotFound("Product not found".into());
        assert_eq!(err.user_message(), "Product not found");
        assert_eq!(err.kind(), "not_found");
    }
}
