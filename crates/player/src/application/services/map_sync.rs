//! Map marker synchronization
//!
//! Keeps the markers on a map surface equal to the filtered adventure set.
//! Every sync clears all markers and recreates them: result sets are a few
//! dozen entries, so no diffing is done.

use std::collections::HashMap;

use microaventure_domain::{filter_adventures, Adventure, AdventureId, FilterCriteria};

use crate::application::services::popup_html;
use crate::ports::outbound::{MapSurface, MarkerHandle, MarkerSpec};

/// Owns a map surface and the markers currently placed on it
pub struct MapSynchronizer {
    surface: Box<dyn MapSurface>,
    markers: HashMap<AdventureId, MarkerHandle>,
}

impl MapSynchronizer {
    pub fn new(surface: Box<dyn MapSurface>) -> Self {
        Self {
            surface,
            markers: HashMap::new(),
        }
    }

    /// Reconcile markers with `adventures` filtered by `criteria`.
    ///
    /// Returns the number of markers on the surface afterwards. Adventures
    /// sharing an id get a single marker (first occurrence).
    pub fn sync(&mut self, adventures: &[Adventure], criteria: &FilterCriteria) -> usize {
        self.clear();

        for adventure in filter_adventures(adventures, criteria) {
            if self.markers.contains_key(adventure.id()) {
                tracing::warn!(adventure_id = %adventure.id(), "Duplicate adventure id, marker skipped");
                continue;
            }

            let spec = MarkerSpec {
                adventure_id: adventure.id().clone(),
                position: adventure.location(),
                popup_html: popup_html(&adventure),
            };
            let handle = self.surface.add_marker(&spec);
            self.markers.insert(spec.adventure_id, handle);
        }

        tracing::debug!(
            total = adventures.len(),
            visible = self.markers.len(),
            "Map markers synchronized"
        );
        self.markers.len()
    }

    /// Remove every marker from the surface
    pub fn clear(&mut self) {
        for (_, handle) in self.markers.drain() {
            self.surface.remove_marker(handle);
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn has_marker(&self, id: &AdventureId) -> bool {
        self.markers.contains_key(id)
    }

    /// Release all markers, then the surface itself
    pub fn dispose(mut self) {
        self.clear();
        self.surface.dispose();
    }
}
