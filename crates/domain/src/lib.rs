//! Micro-Aventure domain crate.
//!
//! Plain data types shared by every client: adventures, their labels, the
//! filter criteria narrowing a result set, and the bundled sample catalog.
//! Nothing in here touches IO or UI.

pub mod catalog;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{dedupe_by_id, Adventure};
pub use error::DomainError;
pub use ids::AdventureId;
pub use value_objects::{
    filter_adventures, AdventureDuration, Difficulty, FilterCriteria, GeoPoint, Kilometers,
    DEFAULT_MAX_DISTANCE_KM,
};
