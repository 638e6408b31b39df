//! Single-screen discovery layout

use dioxus::prelude::*;

use crate::presentation::components::{
    AdventureDetail, AdventureFilters, AdventureList, MapSection, NoticeToast, PromptSection,
};

#[component]
pub fn DiscoveryView() -> Element {
    rsx! {
        div {
            class: "discovery",
            header {
                class: "app-header",
                h1 { "Micro-Aventure" }
            }
            div {
                class: "discovery-body",
                aside {
                    class: "sidebar",
                    PromptSection {}
                    AdventureFilters {}
                    AdventureList {}
                }
                main {
                    class: "content",
                    MapSection {}
                    AdventureDetail {}
                }
            }
            NoticeToast {}
        }
    }
}
