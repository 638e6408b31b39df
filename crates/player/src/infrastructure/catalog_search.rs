//! Offline search adapter over the bundled sample catalog
//!
//! Used when no search API URL is configured.

use microaventure_domain::catalog::sample_adventures;
use microaventure_domain::Adventure;

use crate::ports::outbound::{AdventureSearchPort, ApiError};

/// Words shorter than this are ignored when matching a prompt
const MIN_WORD_LEN: usize = 3;

pub struct CatalogSearch {
    adventures: Vec<Adventure>,
}

impl CatalogSearch {
    pub fn new(adventures: Vec<Adventure>) -> Self {
        Self { adventures }
    }

    /// Adventures whose title or description contains any prompt word.
    /// Falls back to the whole catalog when nothing matches.
    pub fn matching(&self, prompt: &str) -> Vec<Adventure> {
        let words: Vec<String> = prompt
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| word.chars().count() >= MIN_WORD_LEN)
            .map(str::to_lowercase)
            .collect();

        let matches: Vec<Adventure> = self
            .adventures
            .iter()
            .filter(|adventure| {
                let haystack = format!(
                    "{} {}",
                    adventure.title().to_lowercase(),
                    adventure.description().to_lowercase()
                );
                words.iter().any(|word| haystack.contains(word.as_str()))
            })
            .cloned()
            .collect();

        if matches.is_empty() {
            self.adventures.clone()
        } else {
            matches
        }
    }
}

impl Default for CatalogSearch {
    fn default() -> Self {
        Self::new(sample_adventures())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl AdventureSearchPort for CatalogSearch {
    async fn search(&self, prompt: &str) -> Result<Vec<Adventure>, ApiError> {
        let adventures = self.matching(prompt);
        tracing::debug!(count = adventures.len(), "Served search from sample catalog");
        Ok(adventures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(adventures: &[Adventure]) -> Vec<&str> {
        adventures.iter().map(|a| a.title()).collect()
    }

    #[test]
    fn matches_prompt_words_in_title_or_description() {
        let search = CatalogSearch::default();

        let found = search.matching("Balade au bord du LAC ?");

        assert_eq!(titles(&found), vec!["Circuit du Lac"]);
    }

    #[test]
    fn short_words_are_ignored() {
        let search = CatalogSearch::default();

        // "de", "la" would match almost everything
        let found = search.matching("de la montagne");

        assert_eq!(titles(&found), vec!["Traversée des Alpes"]);
    }

    #[test]
    fn unmatched_prompt_returns_whole_catalog() {
        let search = CatalogSearch::default();
        assert_eq!(search.matching("plongée sous-marine xyz").len(), 4);
    }

    #[tokio::test]
    async fn port_never_fails() {
        let search = CatalogSearch::default();
        let found = search.search("historique").await.unwrap();
        assert_eq!(titles(&found), vec!["Chemin des Pèlerins"]);
    }
}
