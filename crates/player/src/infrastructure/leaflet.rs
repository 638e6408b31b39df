//! Leaflet map surface
//!
//! Drives a Leaflet map living in the webview through `document::eval`.
//! The JS side keeps one registry entry per container id; operations issued
//! before Leaflet has loaded are queued on that entry and replayed once the
//! map exists. Marker clicks come back over the mount eval channel.

use dioxus::core::Task;
use dioxus::prelude::*;
use microaventure_domain::AdventureId;
use serde::Serialize;

use crate::ports::outbound::{
    MapSurface, MapSurfaceFactory, MapViewOptions, MarkerClickHandler, MarkerHandle, MarkerSpec,
};

/// Leaflet assets loaded by the app shell
pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const LOCATE_CONTROL_CSS: &str =
    "https://unpkg.com/leaflet.locatecontrol@0.79.0/dist/L.Control.Locate.min.css";
pub const LOCATE_CONTROL_JS: &str =
    "https://unpkg.com/leaflet.locatecontrol@0.79.0/dist/L.Control.Locate.min.js";

const LOCATE_TITLE: &str = "Me localiser";

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const MOUNT_TEMPLATE: &str = r#"
const cid = $CONTAINER;
const registry = (window.__microaventureMaps = window.__microaventureMaps || {});
const entry = { ready: false, disposed: false, pending: [], markers: {} };
entry.run = (fn) => { if (entry.ready) { fn(entry); } else { entry.pending.push(fn); } };
entry.send = (id) => dioxus.send(id);
registry[cid] = entry;
while (typeof window.L === "undefined") {
    await new Promise((resolve) => setTimeout(resolve, 50));
    if (entry.disposed) { return; }
}
if (entry.disposed) { return; }
const map = L.map(cid, { zoomControl: false }).setView([$LAT, $LNG], $ZOOM);
L.tileLayer($TILE_URL, { attribution: $ATTRIBUTION }).addTo(map);
if ($ZOOM_CONTROL) { L.control.zoom({ position: "topright" }).addTo(map); }
if ($LOCATE_CONTROL) {
    for (let tries = 0; typeof L.control.locate === "undefined" && tries < 40; tries++) {
        await new Promise((resolve) => setTimeout(resolve, 50));
    }
    if (entry.disposed) { map.remove(); return; }
    if (typeof L.control.locate === "function") {
        L.control.locate({
            position: "topright",
            strings: { title: $LOCATE_TITLE },
            locateOptions: { enableHighAccuracy: true },
        }).addTo(map);
    } else {
        console.warn("leaflet.locatecontrol not loaded, geolocation control skipped");
    }
}
setTimeout(() => { if (!entry.disposed) { map.invalidateSize(); } }, $RESIZE_DELAY);
entry.map = map;
entry.ready = true;
entry.pending.splice(0).forEach((fn) => fn(entry));
"#;

const ADD_MARKER_TEMPLATE: &str = r#"
const entry = (window.__microaventureMaps || {})[$CONTAINER];
if (entry) {
    entry.run((e) => {
        const marker = L.marker([$LAT, $LNG]).addTo(e.map).bindPopup($POPUP);
        marker.on("click", () => e.send($ADVENTURE_ID));
        e.markers[$HANDLE] = marker;
    });
}
"#;

const REMOVE_MARKER_TEMPLATE: &str = r#"
const entry = (window.__microaventureMaps || {})[$CONTAINER];
if (entry) {
    entry.run((e) => {
        const marker = e.markers[$HANDLE];
        if (marker) {
            marker.off();
            e.map.removeLayer(marker);
            delete e.markers[$HANDLE];
        }
    });
}
"#;

const DISPOSE_TEMPLATE: &str = r#"
const registry = window.__microaventureMaps || {};
const entry = registry[$CONTAINER];
if (entry) {
    entry.disposed = true;
    if (entry.map) {
        entry.map.off();
        entry.map.remove();
    }
    delete registry[$CONTAINER];
}
"#;

/// Encode a value as a JS literal (JSON is valid JS for these types)
fn js<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

pub fn mount_script(options: &MapViewOptions) -> String {
    MOUNT_TEMPLATE
        .replace("$CONTAINER", &js(&options.container_id))
        .replace("$LAT", &js(&options.center.latitude))
        .replace("$LNG", &js(&options.center.longitude))
        .replace("$ZOOM_CONTROL", &js(&options.zoom_control))
        .replace("$LOCATE_CONTROL", &js(&options.locate_control))
        .replace("$LOCATE_TITLE", &js(LOCATE_TITLE))
        .replace("$ZOOM", &js(&options.zoom))
        .replace("$TILE_URL", &js(TILE_URL))
        .replace("$ATTRIBUTION", &js(TILE_ATTRIBUTION))
        .replace("$RESIZE_DELAY", &js(&options.resize_delay_ms))
}

pub fn add_marker_script(container_id: &str, handle: MarkerHandle, marker: &MarkerSpec) -> String {
    ADD_MARKER_TEMPLATE
        .replace("$CONTAINER", &js(container_id))
        .replace("$LAT", &js(&marker.position.latitude))
        .replace("$LNG", &js(&marker.position.longitude))
        .replace("$POPUP", &js(&marker.popup_html))
        .replace("$ADVENTURE_ID", &js(marker.adventure_id.as_str()))
        .replace("$HANDLE", &js(&handle.0))
}

pub fn remove_marker_script(container_id: &str, handle: MarkerHandle) -> String {
    REMOVE_MARKER_TEMPLATE
        .replace("$CONTAINER", &js(container_id))
        .replace("$HANDLE", &js(&handle.0))
}

pub fn dispose_script(container_id: &str) -> String {
    DISPOSE_TEMPLATE.replace("$CONTAINER", &js(container_id))
}

/// Creates Leaflet surfaces. Must be called from inside the Dioxus runtime.
#[derive(Clone, Copy, Default)]
pub struct LeafletSurfaceFactory;

impl MapSurfaceFactory for LeafletSurfaceFactory {
    fn create(
        &self,
        options: &MapViewOptions,
        on_marker_click: MarkerClickHandler,
    ) -> Box<dyn MapSurface> {
        Box::new(LeafletSurface::mount(options, on_marker_click))
    }
}

/// A Leaflet map bound to one DOM container
pub struct LeafletSurface {
    container_id: String,
    next_handle: u64,
    click_listener: Option<Task>,
}

impl LeafletSurface {
    fn mount(options: &MapViewOptions, on_marker_click: MarkerClickHandler) -> Self {
        let mut channel = document::eval(&mount_script(options));

        let click_listener = spawn(async move {
            loop {
                match channel.recv::<String>().await {
                    Ok(id) => {
                        tracing::debug!(adventure_id = %id, "Marker clicked");
                        on_marker_click(AdventureId::from(id));
                    }
                    Err(e) => {
                        tracing::debug!(error = ?e, "Map click channel closed");
                        break;
                    }
                }
            }
        });

        Self {
            container_id: options.container_id.clone(),
            next_handle: 0,
            click_listener: Some(click_listener),
        }
    }
}

impl MapSurface for LeafletSurface {
    fn add_marker(&mut self, marker: &MarkerSpec) -> MarkerHandle {
        self.next_handle += 1;
        let handle = MarkerHandle(self.next_handle);
        document::eval(&add_marker_script(&self.container_id, handle, marker));
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        document::eval(&remove_marker_script(&self.container_id, handle));
    }

    fn dispose(&mut self) {
        if let Some(task) = self.click_listener.take() {
            task.cancel();
        }
        document::eval(&dispose_script(&self.container_id));
    }
}
