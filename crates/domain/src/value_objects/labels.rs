//! Difficulty and duration labels carried by adventures
//!
//! The backend sends these as free strings. Known labels map to dedicated
//! variants; anything else is kept verbatim so comparisons stay exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// Difficulty
// ============================================================================

/// Difficulty label of an adventure
///
/// Equality and hashing go through `label()`, so `Other("Facile")` equals
/// `Facile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Facile,
    Moyen,
    Difficile,
    /// A label outside the known set, preserved as received
    Other(String),
}

impl Difficulty {
    /// Labels offered by the filter panel, in display order
    pub const KNOWN: [Difficulty; 3] = [Difficulty::Facile, Difficulty::Moyen, Difficulty::Difficile];

    pub fn label(&self) -> &str {
        match self {
            Difficulty::Facile => "Facile",
            Difficulty::Moyen => "Moyen",
            Difficulty::Difficile => "Difficile",
            Difficulty::Other(label) => label,
        }
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Facile" => Difficulty::Facile,
            "Moyen" => Difficulty::Moyen,
            "Difficile" => Difficulty::Difficile,
            _ => Difficulty::Other(label),
        }
    }
}

impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> String {
        match difficulty {
            Difficulty::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl PartialEq for Difficulty {
    fn eq(&self, other: &Self) -> bool {
        self.label() == other.label()
    }
}

impl Eq for Difficulty {}

impl Hash for Difficulty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label().hash(state);
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// AdventureDuration
// ============================================================================

/// Duration bucket of an adventure
///
/// Compared by label, like `Difficulty`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AdventureDuration {
    /// "1-2h"
    OneToTwoHours,
    /// "2-4h"
    TwoToFourHours,
    /// "4h+"
    OverFourHours,
    /// "Journée"
    FullDay,
    /// A label outside the known set, preserved as received
    Other(String),
}

impl AdventureDuration {
    /// Labels offered by the filter panel, in display order
    pub const KNOWN: [AdventureDuration; 4] = [
        AdventureDuration::OneToTwoHours,
        AdventureDuration::TwoToFourHours,
        AdventureDuration::OverFourHours,
        AdventureDuration::FullDay,
    ];

    pub fn label(&self) -> &str {
        match self {
            AdventureDuration::OneToTwoHours => "1-2h",
            AdventureDuration::TwoToFourHours => "2-4h",
            AdventureDuration::OverFourHours => "4h+",
            AdventureDuration::FullDay => "Journée",
            AdventureDuration::Other(label) => label,
        }
    }
}

impl From<String> for AdventureDuration {
    fn from(label: String) -> Self {
        match label.as_str() {
            "1-2h" => AdventureDuration::OneToTwoHours,
            "2-4h" => AdventureDuration::TwoToFourHours,
            "4h+" => AdventureDuration::OverFourHours,
            "Journée" => AdventureDuration::FullDay,
            _ => AdventureDuration::Other(label),
        }
    }
}

impl From<&str> for AdventureDuration {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<AdventureDuration> for String {
    fn from(duration: AdventureDuration) -> String {
        match duration {
            AdventureDuration::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl PartialEq for AdventureDuration {
    fn eq(&self, other: &Self) -> bool {
        self.label() == other.label()
    }
}

impl Eq for AdventureDuration {}

impl Hash for AdventureDuration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label().hash(state);
    }
}

impl fmt::Display for AdventureDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_difficulty_labels_map_to_variants() {
        assert_eq!(Difficulty::from("Facile"), Difficulty::Facile);
        assert_eq!(Difficulty::from("Moyen"), Difficulty::Moyen);
        assert_eq!(Difficulty::from("Difficile"), Difficulty::Difficile);
    }

    #[test]
    fn unknown_difficulty_is_preserved_verbatim() {
        let difficulty = Difficulty::from("Très difficile");
        assert_eq!(difficulty, Difficulty::Other("Très difficile".to_string()));
        assert_eq!(difficulty.label(), "Très difficile");
    }

    #[test]
    fn difficulty_comparison_is_case_sensitive() {
        assert_ne!(Difficulty::from("facile"), Difficulty::Facile);
    }

    #[test]
    fn labels_compare_by_text_whatever_the_variant() {
        use std::collections::HashSet;

        assert_eq!(Difficulty::Other("Facile".to_string()), Difficulty::Facile);
        assert_eq!(
            AdventureDuration::Other("Journée".to_string()),
            AdventureDuration::FullDay
        );
        assert_ne!(Difficulty::Other("Facile ".to_string()), Difficulty::Facile);

        let set: HashSet<Difficulty> = [Difficulty::Facile, Difficulty::Other("Facile".to_string())]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn duration_labels_keep_their_wire_form() {
        let json = serde_json::to_string(&AdventureDuration::FullDay).unwrap();
        assert_eq!(json, "\"Journée\"");

        let parsed: AdventureDuration = serde_json::from_str("\"4h+\"").unwrap();
        assert_eq!(parsed, AdventureDuration::OverFourHours);
    }

    #[test]
    fn known_lists_are_in_display_order() {
        let labels: Vec<&str> = AdventureDuration::KNOWN.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["1-2h", "2-4h", "4h+", "Journée"]);

        let labels: Vec<&str> = Difficulty::KNOWN.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["Facile", "Moyen", "Difficile"]);
    }
}
