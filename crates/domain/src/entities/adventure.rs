//! Adventure entity - A single hiking route returned by a search
//!
//! Adventures are immutable once built. A new search result replaces the
//! whole list rather than patching individual records.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ids::AdventureId;
use crate::value_objects::{AdventureDuration, Difficulty, GeoPoint, Kilometers};

/// A hiking route with its location and effort descriptors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adventure {
    id: AdventureId,
    title: String,
    description: String,
    difficulty: Difficulty,
    duration: AdventureDuration,
    distance: Kilometers,
    #[serde(flatten)]
    location: GeoPoint,
    /// Image references (URLs), possibly empty
    #[serde(default)]
    images: Vec<String>,
}

impl Adventure {
    pub fn new(
        id: impl Into<AdventureId>,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        duration: AdventureDuration,
        distance: Kilometers,
        location: GeoPoint,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            difficulty,
            duration,
            distance,
            location,
            images: Vec::new(),
        }
    }

    /// Attach image references
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn id(&self) -> &AdventureId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn duration(&self) -> &AdventureDuration {
        &self.duration
    }

    pub fn distance(&self) -> Kilometers {
        self.distance
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }
}

/// Keep the first adventure for each id, preserving order.
pub fn dedupe_by_id(adventures: Vec<Adventure>) -> Vec<Adventure> {
    let mut seen = HashSet::new();
    adventures
        .into_iter()
        .filter(|adventure| seen.insert(adventure.id().clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_adventures;

    const PAYLOAD: &str = r#"{
        "id": 3,
        "title": "Traversée des Alpes",
        "description": "Une randonnée difficile en haute montagne",
        "latitude": 45.8326,
        "longitude": 6.8652,
        "difficulty": "Difficile",
        "duration": "Journée",
        "distance": 15.8,
        "images": ["https://example.org/alpes.jpg"]
    }"#;

    #[test]
    fn deserializes_backend_payload() {
        let adventure: Adventure = serde_json::from_str(PAYLOAD).unwrap();

        assert_eq!(adventure.id().as_str(), "3");
        assert_eq!(adventure.title(), "Traversée des Alpes");
        assert_eq!(adventure.difficulty(), &Difficulty::Difficile);
        assert_eq!(adventure.duration(), &AdventureDuration::FullDay);
        assert_eq!(adventure.distance().value(), 15.8);
        assert_eq!(adventure.location(), GeoPoint::new(45.8326, 6.8652));
        assert_eq!(adventure.images().len(), 1);
    }

    #[test]
    fn images_default_to_empty() {
        let json = r#"{
            "id": "2",
            "title": "Circuit du Lac",
            "description": "Une promenade facile autour du lac",
            "latitude": 45.8492,
            "longitude": 6.1725,
            "difficulty": "Facile",
            "duration": "1-2h",
            "distance": 4.2
        }"#;
        let adventure: Adventure = serde_json::from_str(json).unwrap();
        assert!(adventure.images().is_empty());
    }

    #[test]
    fn rejects_negative_distance_in_payload() {
        let json = PAYLOAD.replace("15.8", "-15.8");
        assert!(serde_json::from_str::<Adventure>(&json).is_err());
    }

    #[test]
    fn serializes_with_flat_coordinates() {
        let adventure: Adventure = serde_json::from_str(PAYLOAD).unwrap();
        let value = serde_json::to_value(&adventure).unwrap();

        assert_eq!(value["id"], "3");
        assert_eq!(value["latitude"], 45.8326);
        assert_eq!(value["longitude"], 6.8652);
        assert_eq!(value["duration"], "Journée");
    }

    #[test]
    fn dedupe_keeps_first_occurrence_in_order() {
        let catalog = sample_adventures();
        let shadow = Adventure::new(
            "2",
            "Circuit du Lac (copie)",
            "Doublon renvoyé par le serveur",
            Difficulty::Difficile,
            AdventureDuration::FullDay,
            Kilometers::new(1.0).unwrap(),
            GeoPoint::new(0.0, 0.0),
        );
        let mut input = catalog.clone();
        input.insert(1, catalog[2].clone());
        input.push(shadow);

        let deduped = dedupe_by_id(input);

        let ids: Vec<&str> = deduped.iter().map(|a| a.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "2", "4"]);
        assert_eq!(deduped[2].title(), "Circuit du Lac");
    }

    #[test]
    fn dedupe_leaves_unique_list_untouched() {
        let catalog = sample_adventures();
        assert_eq!(dedupe_by_id(catalog.clone()), catalog);
    }
}
