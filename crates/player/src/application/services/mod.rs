//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations.

pub mod map_lifecycle;
pub mod map_sync;
pub mod popup;
pub mod search_service;

pub use map_lifecycle::MapViewLifecycle;
pub use map_sync::MapSynchronizer;
pub use popup::popup_html;
pub use search_service::SearchService;
