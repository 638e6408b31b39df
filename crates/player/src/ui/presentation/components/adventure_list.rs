//! List of the adventures passing the current filters

use dioxus::prelude::*;
use microaventure_domain::filter_adventures;

use crate::presentation::state::use_app_state;

#[component]
pub fn AdventureList() -> Element {
    let mut state = use_app_state();
    let visible = filter_adventures(&state.adventures(), &state.filters());
    let selected_id = state.selected().map(|adventure| adventure.id().clone());
    let count = visible.len();
    let items: Vec<_> = visible
        .into_iter()
        .map(|adventure| {
            let class = if selected_id.as_ref() == Some(adventure.id()) {
                "adventure-item selected"
            } else {
                "adventure-item"
            };
            (adventure, class)
        })
        .collect();

    rsx! {
        section {
            class: "panel adventure-list",
            h2 { "Aventures ({count})" }

            if count == 0 {
                p { class: "panel-hint", "Aucune aventure ne correspond à votre recherche." }
            }

            ul {
                for (adventure, class) in items {
                    li {
                        key: "{adventure.id()}",
                        class,
                        onclick: {
                            let adventure = adventure.clone();
                            move |_| state.set_selected(Some(adventure.clone()))
                        },
                        h3 { "{adventure.title()}" }
                        div {
                            class: "adventure-meta",
                            span { class: "badge", "{adventure.difficulty()}" }
                            span { class: "badge", "{adventure.duration()}" }
                            span { "{adventure.distance()}" }
                        }
                    }
                }
            }
        }
    }
}
