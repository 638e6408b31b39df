//! Application state store
//!
//! Holds the adventure list, filter criteria, selection, prompt text and the
//! loading flag. Setters are the only mutation path; each replaces the value
//! wholesale, so the last write wins.

use dioxus::prelude::*;
use microaventure_domain::{dedupe_by_id, Adventure, AdventureId, FilterCriteria};

#[derive(Clone, Copy)]
pub struct AppState {
    adventures: Signal<Vec<Adventure>>,
    filters: Signal<FilterCriteria>,
    selected: Signal<Option<Adventure>>,
    prompt: Signal<String>,
    is_loading: Signal<bool>,
}

impl AppState {
    /// Create an empty store. Must run inside the Dioxus runtime.
    pub fn new() -> Self {
        Self {
            adventures: Signal::new(Vec::new()),
            filters: Signal::new(FilterCriteria::default()),
            selected: Signal::new(None),
            prompt: Signal::new(String::new()),
            is_loading: Signal::new(false),
        }
    }

    pub fn adventures(&self) -> Vec<Adventure> {
        self.adventures.read().clone()
    }

    /// Replace the list. Repeated ids keep their first occurrence, matching
    /// the one-marker-per-id rule on the map.
    pub fn set_adventures(&mut self, adventures: Vec<Adventure>) {
        self.adventures.set(unique_adventures(adventures));
    }

    pub fn filters(&self) -> FilterCriteria {
        self.filters.read().clone()
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters.set(filters);
    }

    pub fn selected(&self) -> Option<Adventure> {
        self.selected.read().clone()
    }

    pub fn set_selected(&mut self, adventure: Option<Adventure>) {
        self.selected.set(adventure);
    }

    /// Select the adventure with `id` from the current list.
    ///
    /// Called from map callbacks outside of rendering, so it does not
    /// subscribe to the list.
    pub fn select_by_id(&mut self, id: &AdventureId) {
        let found = selection_for(&self.adventures.peek(), id);
        self.selected.set(found);
    }

    pub fn prompt(&self) -> String {
        self.prompt.read().clone()
    }

    pub fn set_prompt(&mut self, prompt: String) {
        self.prompt.set(prompt);
    }

    pub fn is_loading(&self) -> bool {
        *self.is_loading.read()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading.set(loading);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

fn unique_adventures(adventures: Vec<Adventure>) -> Vec<Adventure> {
    let received = adventures.len();
    let unique = dedupe_by_id(adventures);
    if unique.len() < received {
        tracing::warn!(
            dropped = received - unique.len(),
            "Duplicate adventure ids in result set"
        );
    }
    unique
}

/// The listed adventure with `id`, or `None` (clearing the selection) when
/// it is no longer listed.
pub fn selection_for(adventures: &[Adventure], id: &AdventureId) -> Option<Adventure> {
    let found = adventures
        .iter()
        .find(|adventure| adventure.id() == id)
        .cloned();

    if found.is_none() {
        tracing::warn!(adventure_id = %id, "Clicked adventure is no longer listed");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use microaventure_domain::catalog::sample_adventures;

    #[test]
    fn selection_resolves_listed_adventure() {
        let adventures = sample_adventures();

        let selected = selection_for(&adventures, &AdventureId::from("3"));

        assert_eq!(selected.map(|a| a.title().to_string()).as_deref(), Some("Traversée des Alpes"));
    }

    #[test]
    fn stale_id_clears_selection() {
        let adventures = sample_adventures();

        assert_eq!(selection_for(&adventures, &AdventureId::from("42")), None);
        assert_eq!(selection_for(&[], &AdventureId::from("1")), None);
    }

    #[test]
    fn stored_list_has_one_entry_per_id() {
        let mut adventures = sample_adventures();
        adventures.push(adventures[0].clone());
        adventures.insert(0, adventures[3].clone());

        let stored = unique_adventures(adventures);

        let ids: Vec<&str> = stored.iter().map(|a| a.id().as_str()).collect();
        assert_eq!(ids, vec!["4", "1", "2", "3"]);
    }
}
