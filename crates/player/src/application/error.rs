//! Service layer error types

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Prompt was empty or whitespace only
    #[error("Prompt is empty")]
    EmptyPrompt,

    /// The search adapter failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ServiceError {
    /// Short French notice shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            ServiceError::EmptyPrompt => "Veuillez entrer une description",
            ServiceError::Api(_) => "La recherche d'aventures a échoué, réessayez plus tard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_has_user_notice() {
        assert_eq!(
            ServiceError::EmptyPrompt.user_message(),
            "Veuillez entrer une description"
        );
    }

    #[test]
    fn api_error_is_transparent() {
        let err = ServiceError::from(ApiError::HttpStatus {
            status: 502,
            body: "bad gateway".to_string(),
        });
        assert_eq!(err.to_string(), "Server returned HTTP 502: bad gateway");
    }
}
