//! Map surface port - the rendering widget that shows adventure markers
//!
//! The application layer only sees markers as opaque handles. Adapters
//! own whatever the underlying widget needs (JS objects, GPU buffers, ...)
//! and must release it on `remove_marker` and `dispose`.

use std::rc::Rc;

use microaventure_domain::{AdventureId, GeoPoint};

/// Initial map center (metropolitan France)
pub const DEFAULT_MAP_CENTER: GeoPoint = GeoPoint::new(46.603354, 1.888334);

/// Initial zoom level
pub const DEFAULT_MAP_ZOOM: u8 = 6;

/// Callback invoked with the adventure whose marker was clicked
pub type MarkerClickHandler = Rc<dyn Fn(AdventureId)>;

/// Opaque handle to a marker placed on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Everything a surface needs to draw one marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub adventure_id: AdventureId,
    pub position: GeoPoint,
    /// Pre-escaped HTML shown in the marker popup
    pub popup_html: String,
}

/// Construction parameters for a map surface
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewOptions {
    /// DOM id of the element hosting the map
    pub container_id: String,
    pub center: GeoPoint,
    pub zoom: u8,
    /// Show pan/zoom controls
    pub zoom_control: bool,
    /// Show the "locate me" (geolocation) control
    pub locate_control: bool,
    /// Delay before forcing a size recompute once layout has settled
    pub resize_delay_ms: u32,
}

impl MapViewOptions {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            center: DEFAULT_MAP_CENTER,
            zoom: DEFAULT_MAP_ZOOM,
            zoom_control: true,
            locate_control: true,
            resize_delay_ms: 100,
        }
    }
}

/// A live map instance
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait MapSurface {
    /// Place a marker and bind its popup and click handler
    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerHandle;

    /// Detach a marker previously returned by `add_marker`
    fn remove_marker(&mut self, handle: MarkerHandle);

    /// Free the widget and its listeners. Called exactly once.
    fn dispose(&mut self);
}

/// Creates map surfaces for a mounted view
pub trait MapSurfaceFactory: Send + Sync {
    fn create(
        &self,
        options: &MapViewOptions,
        on_marker_click: MarkerClickHandler,
    ) -> Box<dyn MapSurface>;
}
