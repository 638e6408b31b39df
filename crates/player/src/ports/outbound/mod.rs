//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with the search API and the map
//! widget without depending on concrete implementations.

pub mod map_surface_port;
pub mod platform;
pub mod search_port;
pub mod testing;

pub use map_surface_port::{
    MapSurface, MapSurfaceFactory, MapViewOptions, MarkerClickHandler, MarkerHandle, MarkerSpec,
    DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM,
};
pub use platform::SleepPort;
pub use search_port::{AdventureSearchPort, ApiError};
