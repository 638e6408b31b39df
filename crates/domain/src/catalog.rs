//! Bundled sample catalog
//!
//! Four adventures used when no search API is configured, and as the
//! fixture set for tests across the workspace.

use crate::entities::Adventure;
use crate::value_objects::{AdventureDuration, Difficulty, GeoPoint, Kilometers};

/// The sample adventures, in catalog order
pub fn sample_adventures() -> Vec<Adventure> {
    vec![
        entry(
            "1",
            "Sentier des Crêtes",
            "Une randonnée panoramique avec vue imprenable sur la vallée",
            Difficulty::Moyen,
            AdventureDuration::TwoToFourHours,
            8.5,
            GeoPoint::new(48.1373, 7.1856),
        ),
        entry(
            "2",
            "Circuit du Lac",
            "Une promenade facile autour du lac avec points de vue",
            Difficulty::Facile,
            AdventureDuration::OneToTwoHours,
            4.2,
            GeoPoint::new(45.8492, 6.1725),
        ),
        entry(
            "3",
            "Traversée des Alpes",
            "Une randonnée difficile en haute montagne",
            Difficulty::Difficile,
            AdventureDuration::FullDay,
            15.8,
            GeoPoint::new(45.8326, 6.8652),
        ),
        entry(
            "4",
            "Chemin des Pèlerins",
            "Un parcours historique à travers la campagne",
            Difficulty::Moyen,
            AdventureDuration::OverFourHours,
            12.3,
            GeoPoint::new(43.8667, -1.7015),
        ),
    ]
}

fn entry(
    id: &str,
    title: &str,
    description: &str,
    difficulty: Difficulty,
    duration: AdventureDuration,
    km: f64,
    location: GeoPoint,
) -> Adventure {
    // Literal distances above are all valid.
    let distance = Kilometers::new(km).unwrap_or_default();
    Adventure::new(id, title, description, difficulty, duration, distance, location)
}
