//! Error types shared by the state machines and the identity provider.

/// Errors raised while constructing view-state machines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("a rotator needs at least one item")]
    EmptyRotation,

    #[error("accordion needs at least one panel")]
    NoPanels,
}

/// Identity provider error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Sign-in is not available right now")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(String),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Session storage unavailable: {0}")]
    Storage(String),

    #[error("No active session")]
    MissingSession,
}

impl AuthError {
    /// Whether the provider answered and refused the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuthError::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_displays_provider_message() {
        let err = AuthError::Rejected {
            status: 400,
            message: "Invalid login credentials".to_string(),
        };

        assert_eq!(err.to_string(), "Invalid login credentials");
        assert!(err.is_rejection());
    }

    #[test]
    fn test_network_error_is_not_rejection() {
        let err = AuthError::Network("connection reset".to_string());

        assert!(!err.is_rejection());
        assert!(err.to_string().contains("connection reset"));
    }
}
