use dioxus::prelude::*;

use crate::infrastructure::leaflet::{
    LEAFLET_CSS, LEAFLET_JS, LOCATE_CONTROL_CSS, LOCATE_CONTROL_JS,
};

pub mod presentation;

pub use crate::config::ShellKind;

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/runner.rs`).
    let shell = use_context::<ShellKind>();

    // These must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::AppState::new);
    use_context_provider(presentation::state::NoticeState::new);

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        document::Stylesheet { href: LOCATE_CONTROL_CSS }
        document::Script { src: LOCATE_CONTROL_JS }
        document::Stylesheet {
            href: asset!("/assets/css/app.css"),
        }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        presentation::views::DiscoveryView {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        presentation::views::DiscoveryView {}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            class: "shell shell-desktop",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        // Stacks the sidebar above the map instead of side by side.
        div {
            class: "shell shell-mobile",
            {children}
        }
    }
}
