//! Value objects - Immutable objects defined by their attributes

mod filter_criteria;
mod geo;
mod labels;

pub use filter_criteria::{filter_adventures, FilterCriteria, DEFAULT_MAX_DISTANCE_KM};
pub use geo::{GeoPoint, Kilometers};
pub use labels::{AdventureDuration, Difficulty};
