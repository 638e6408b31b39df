//! Detail panel for the selected adventure

use dioxus::prelude::*;

use crate::presentation::state::use_app_state;

#[component]
pub fn AdventureDetail() -> Element {
    let mut state = use_app_state();

    let Some(adventure) = state.selected() else {
        return rsx! {};
    };

    rsx! {
        article {
            class: "panel adventure-detail",
            header {
                h2 { "{adventure.title()}" }
                button {
                    class: "close-button",
                    onclick: move |_| state.set_selected(None),
                    "×"
                }
            }
            p { "{adventure.description()}" }
            dl {
                dt { "Difficulté" }
                dd { "{adventure.difficulty()}" }
                dt { "Durée" }
                dd { "{adventure.duration()}" }
                dt { "Distance" }
                dd { "{adventure.distance()}" }
            }
            if !adventure.images().is_empty() {
                div {
                    class: "adventure-images",
                    for (index, src) in adventure.images().iter().enumerate() {
                        img {
                            key: "{index}",
                            src: "{src}",
                            alt: "{adventure.title()}",
                        }
                    }
                }
            }
        }
    }
}
