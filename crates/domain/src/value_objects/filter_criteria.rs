//! Filter criteria narrowing the visible adventure set
//!
//! Criteria are replaced wholesale on every edit. The `with_*` helpers
//! return a new value so callers never patch a shared instance in place.

use serde::{Deserialize, Serialize};

use crate::entities::Adventure;
use crate::value_objects::{AdventureDuration, Difficulty};

/// Upper bound of the distance slider, also the default threshold
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// User constraints applied to the adventure list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the title
    pub search: String,
    pub difficulty: Option<Difficulty>,
    pub duration: Option<AdventureDuration>,
    /// Inclusive upper bound on the adventure distance
    #[serde(rename = "maxDistance")]
    pub max_distance_km: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            difficulty: None,
            duration: None,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }
}

impl FilterCriteria {
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_difficulty(self, difficulty: Option<Difficulty>) -> Self {
        Self { difficulty, ..self }
    }

    pub fn with_duration(self, duration: Option<AdventureDuration>) -> Self {
        Self { duration, ..self }
    }

    pub fn with_max_distance(self, max_distance_km: f64) -> Self {
        Self {
            max_distance_km,
            ..self
        }
    }

    /// Whether `adventure` satisfies every criterion.
    ///
    /// Empty or unset criteria match everything. A search made only of
    /// whitespace counts as empty.
    pub fn matches(&self, adventure: &Adventure) -> bool {
        self.matches_search(adventure.title())
            && self
                .difficulty
                .as_ref()
                .map_or(true, |d| d == adventure.difficulty())
            && self
                .duration
                .as_ref()
                .map_or(true, |d| d == adventure.duration())
            && adventure.distance().value() <= self.max_distance_km
    }

    fn matches_search(&self, title: &str) -> bool {
        if self.search.trim().is_empty() {
            return true;
        }
        title.to_lowercase().contains(&self.search.to_lowercase())
    }
}

/// The subset of `adventures` matching `criteria`, in input order
pub fn filter_adventures(adventures: &[Adventure], criteria: &FilterCriteria) -> Vec<Adventure> {
    adventures
        .iter()
        .filter(|adventure| criteria.matches(adventure))
        .cloned()
        .collect()
}
