//! Prompt panel: natural-language search intent

use dioxus::prelude::*;

use crate::presentation::services::use_search_service;
use crate::presentation::state::{use_app_state, use_notice_state};

#[component]
pub fn PromptSection() -> Element {
    let mut state = use_app_state();
    let notices = use_notice_state();
    let search = use_search_service();

    let prompt = state.prompt();
    let is_loading = state.is_loading();

    let submit = move |_| {
        let search = search.clone();
        let prompt = state.prompt();
        let mut state = state;
        let mut notices = notices;

        state.set_loading(true);
        spawn(async move {
            match search.search(&prompt).await {
                Ok(adventures) => {
                    state.set_adventures(adventures);
                    state.set_selected(None);
                }
                Err(e) => {
                    notices.error(e.user_message());
                }
            }
            state.set_loading(false);
        });
    };

    rsx! {
        section {
            class: "panel prompt-panel",
            h2 { "Décrivez votre micro-aventure" }
            p {
                class: "panel-hint",
                "Dites-nous ce dont vous avez envie : une balade au bord de l'eau, une randonnée en montagne, une sortie d'une journée..."
            }
            textarea {
                class: "prompt-input",
                rows: "4",
                placeholder: "Ex : une randonnée facile près d'un lac, pas plus de 2 heures",
                value: "{prompt}",
                disabled: is_loading,
                oninput: move |evt| state.set_prompt(evt.value()),
            }
            button {
                class: "primary-button",
                disabled: is_loading,
                onclick: submit,
                if is_loading { "Recherche en cours..." } else { "Trouver des aventures" }
            }
        }
    }
}
