//! Map panel
//!
//! Owns the map view lifecycle for as long as the component is mounted and
//! reconciles markers whenever the adventure list or the filters change.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use microaventure_domain::AdventureId;

use crate::application::services::MapViewLifecycle;
use crate::ports::outbound::{MapViewOptions, MarkerClickHandler};
use crate::presentation::services::use_map_factory;
use crate::presentation::state::use_app_state;

pub const MAP_CONTAINER_ID: &str = "adventure-map";

#[component]
pub fn MapSection() -> Element {
    let state = use_app_state();
    let factory = use_map_factory();

    let lifecycle = use_hook(move || {
        Rc::new(RefCell::new(MapViewLifecycle::new(
            factory,
            MapViewOptions::new(MAP_CONTAINER_ID),
        )))
    });

    let effect_lifecycle = lifecycle.clone();
    use_effect(move || {
        let adventures = state.adventures();
        let filters = state.filters();

        let mut lifecycle = effect_lifecycle.borrow_mut();
        let on_marker_click: MarkerClickHandler = Rc::new(move |id: AdventureId| {
            let mut state = state;
            state.select_by_id(&id);
        });
        lifecycle.mount(on_marker_click);

        if let Some(count) = lifecycle.sync(&adventures, &filters) {
            tracing::debug!(markers = count, "Map markers synchronized");
        }
    });

    use_drop(move || {
        lifecycle.borrow_mut().unmount();
    });

    rsx! {
        section {
            class: "map-panel",
            div { id: MAP_CONTAINER_ID, class: "adventure-map" }
        }
    }
}
