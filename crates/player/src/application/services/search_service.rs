//! Adventure search service
//!
//! Validates the prompt locally, then delegates to the search port.

use std::sync::Arc;

use microaventure_domain::Adventure;

use crate::application::ServiceError;
use crate::ports::outbound::AdventureSearchPort;

/// Prompt-driven adventure search
pub struct SearchService {
    port: Arc<dyn AdventureSearchPort>,
}

impl SearchService {
    pub fn new(port: Arc<dyn AdventureSearchPort>) -> Self {
        Self { port }
    }

    /// Search adventures matching `prompt`.
    ///
    /// # Errors
    ///
    /// `ServiceError::EmptyPrompt` if the prompt is blank (no request is sent),
    /// `ServiceError::Api` if the adapter fails. Failures are logged here.
    pub async fn search(&self, prompt: &str) -> Result<Vec<Adventure>, ServiceError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            tracing::debug!("Rejected empty search prompt");
            return Err(ServiceError::EmptyPrompt);
        }

        tracing::info!(prompt_len = prompt.len(), "Searching adventures");

        match self.port.search(prompt).await {
            Ok(adventures) => {
                tracing::info!(count = adventures.len(), "Adventure search completed");
                Ok(adventures)
            }
            Err(e) => {
                tracing::error!(error = %e, "Adventure search failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::search_port::MockAdventureSearchPort;
    use crate::ports::outbound::ApiError;
    use microaventure_domain::catalog::sample_adventures;

    #[tokio::test]
    async fn returns_adventures_from_port() {
        let mut port = MockAdventureSearchPort::new();
        port.expect_search()
            .withf(|prompt| prompt == "lac en montagne")
            .times(1)
            .returning(|_| Ok(sample_adventures()));

        let service = SearchService::new(Arc::new(port));
        let result = service.search("lac en montagne").await.unwrap();

        assert_eq!(result.len(), 4);
    }

    #[tokio::test]
    async fn trims_prompt_before_sending() {
        let mut port = MockAdventureSearchPort::new();
        port.expect_search()
            .withf(|prompt| prompt == "randonnée facile")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = SearchService::new(Arc::new(port));
        let result = service.search("  randonnée facile \n").await;

        assert_eq!(result, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn rejects_blank_prompt_without_calling_port() {
        let mut port = MockAdventureSearchPort::new();
        port.expect_search().never();

        let service = SearchService::new(Arc::new(port));

        assert_eq!(service.search("").await, Err(ServiceError::EmptyPrompt));
        assert_eq!(service.search("   \t").await, Err(ServiceError::EmptyPrompt));
    }

    #[tokio::test]
    async fn propagates_port_failure() {
        let mut port = MockAdventureSearchPort::new();
        port.expect_search()
            .returning(|_| Err(ApiError::RequestFailed("connection refused".to_string())));

        let service = SearchService::new(Arc::new(port));
        let err = service.search("lac").await.unwrap_err();

        assert_eq!(
            err,
            ServiceError::Api(ApiError::RequestFailed("connection refused".to_string()))
        );
    }
}
