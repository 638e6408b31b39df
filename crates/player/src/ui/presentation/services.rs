//! Service providers for the presentation layer
//!
//! Components reach application services and platform ports through Dioxus
//! context instead of depending on infrastructure adapter types.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::services::SearchService;
use crate::ports::outbound::{MapSurfaceFactory, SleepPort};

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub search: Arc<SearchService>,
    /// Creates the map surface for the map view
    pub map_factory: Arc<dyn MapSurfaceFactory>,
    pub sleep: Arc<dyn SleepPort>,
}

impl Services {
    pub fn new(
        search: Arc<SearchService>,
        map_factory: Arc<dyn MapSurfaceFactory>,
        sleep: Arc<dyn SleepPort>,
    ) -> Self {
        Self {
            search,
            map_factory,
            sleep,
        }
    }
}

/// Hook to access the SearchService from context
pub fn use_search_service() -> Arc<SearchService> {
    use_context::<Services>().search
}

pub fn use_map_factory() -> Arc<dyn MapSurfaceFactory> {
    use_context::<Services>().map_factory
}

pub fn use_sleep() -> Arc<dyn SleepPort> {
    use_context::<Services>().sleep
}
