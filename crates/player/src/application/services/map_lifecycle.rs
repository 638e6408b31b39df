//! Map view lifecycle
//!
//! A mounted map view owns exactly one live surface. Mounting again while
//! live is a no-op; unmounting disposes the surface once, and a later mount
//! creates a fresh one.

use std::sync::Arc;

use microaventure_domain::{Adventure, FilterCriteria};

use crate::application::services::MapSynchronizer;
use crate::ports::outbound::{MapSurfaceFactory, MapViewOptions, MarkerClickHandler};

pub struct MapViewLifecycle {
    factory: Arc<dyn MapSurfaceFactory>,
    options: MapViewOptions,
    live: Option<MapSynchronizer>,
}

impl MapViewLifecycle {
    pub fn new(factory: Arc<dyn MapSurfaceFactory>, options: MapViewOptions) -> Self {
        Self {
            factory,
            options,
            live: None,
        }
    }

    /// Create the surface unless one is already live.
    ///
    /// Returns `true` when a new surface was created.
    pub fn mount(&mut self, on_marker_click: MarkerClickHandler) -> bool {
        if self.live.is_some() {
            tracing::debug!(container = %self.options.container_id, "Map already mounted");
            return false;
        }

        tracing::info!(
            container = %self.options.container_id,
            lat = self.options.center.latitude,
            lng = self.options.center.longitude,
            zoom = self.options.zoom,
            "Mounting map view"
        );
        let surface = self.factory.create(&self.options, on_marker_click);
        self.live = Some(MapSynchronizer::new(surface));
        true
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Reconcile markers on the live surface. `None` when not mounted.
    pub fn sync(&mut self, adventures: &[Adventure], criteria: &FilterCriteria) -> Option<usize> {
        self.live
            .as_mut()
            .map(|synchronizer| synchronizer.sync(adventures, criteria))
    }

    pub fn marker_count(&self) -> usize {
        self.live
            .as_ref()
            .map_or(0, |synchronizer| synchronizer.marker_count())
    }

    /// Dispose the live surface. Returns `false` if nothing was mounted.
    pub fn unmount(&mut self) -> bool {
        match self.live.take() {
            Some(synchronizer) => {
                tracing::info!(container = %self.options.container_id, "Unmounting map view");
                synchronizer.dispose();
                true
            }
            None => false,
        }
    }
}

impl Drop for MapViewLifecycle {
    fn drop(&mut self) {
        self.unmount();
    }
}
