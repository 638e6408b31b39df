//! Filter panel
//!
//! Every edit replaces the filter criteria wholesale.

use dioxus::prelude::*;
use microaventure_domain::{AdventureDuration, Difficulty};

use crate::presentation::state::use_app_state;

pub const MIN_DISTANCE_KM: f64 = 1.0;
pub const MAX_DISTANCE_KM: f64 = 100.0;

/// Clicking the active option clears it.
pub fn toggle_option<T: PartialEq>(current: Option<T>, clicked: T) -> Option<T> {
    match current {
        Some(active) if active == clicked => None,
        _ => Some(clicked),
    }
}

/// Parse the distance input, clamped to the slider range.
pub fn parse_max_distance(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|km| km.is_finite())
        .map(|km| km.clamp(MIN_DISTANCE_KM, MAX_DISTANCE_KM))
}

#[component]
pub fn AdventureFilters() -> Element {
    let mut state = use_app_state();
    let filters = state.filters();
    let max_distance = filters.max_distance_km;

    rsx! {
        section {
            class: "panel filter-panel",
            h2 { "Filtres" }

            input {
                class: "filter-search",
                r#type: "search",
                placeholder: "Rechercher par nom",
                value: "{filters.search}",
                oninput: move |evt| {
                    let next = state.filters().with_search(evt.value());
                    state.set_filters(next);
                },
            }

            div {
                class: "filter-group",
                span { class: "filter-label", "Difficulté" }
                div {
                    class: "filter-options",
                    for difficulty in Difficulty::KNOWN {
                        FilterButton {
                            key: "{difficulty}",
                            label: difficulty.label().to_string(),
                            active: filters.difficulty.as_ref() == Some(&difficulty),
                            onclick: {
                                let difficulty = difficulty.clone();
                                move |_| {
                                    let current = state.filters();
                                    let next = toggle_option(current.difficulty.clone(), difficulty.clone());
                                    state.set_filters(current.with_difficulty(next));
                                }
                            },
                        }
                    }
                }
            }

            div {
                class: "filter-group",
                span { class: "filter-label", "Durée" }
                div {
                    class: "filter-options",
                    for duration in AdventureDuration::KNOWN {
                        FilterButton {
                            key: "{duration}",
                            label: duration.label().to_string(),
                            active: filters.duration.as_ref() == Some(&duration),
                            onclick: {
                                let duration = duration.clone();
                                move |_| {
                                    let current = state.filters();
                                    let next = toggle_option(current.duration.clone(), duration.clone());
                                    state.set_filters(current.with_duration(next));
                                }
                            },
                        }
                    }
                }
            }

            div {
                class: "filter-group",
                label {
                    class: "filter-label",
                    r#for: "max-distance",
                    "Distance maximale : {max_distance} km"
                }
                input {
                    id: "max-distance",
                    r#type: "number",
                    min: "{MIN_DISTANCE_KM}",
                    max: "{MAX_DISTANCE_KM}",
                    value: "{max_distance}",
                    oninput: move |evt| {
                        if let Some(km) = parse_max_distance(&evt.value()) {
                            let next = state.filters().with_max_distance(km);
                            state.set_filters(next);
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn FilterButton(label: String, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let class = if active {
        "filter-button active"
    } else {
        "filter-button"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_active_option_clears_it() {
        assert_eq!(
            toggle_option(Some(Difficulty::Facile), Difficulty::Facile),
            None
        );
    }

    #[test]
    fn toggling_other_option_replaces_it() {
        assert_eq!(
            toggle_option(Some(Difficulty::Facile), Difficulty::Moyen),
            Some(Difficulty::Moyen)
        );
        assert_eq!(
            toggle_option(None, AdventureDuration::FullDay),
            Some(AdventureDuration::FullDay)
        );
    }

    #[test]
    fn distance_input_is_clamped() {
        assert_eq!(parse_max_distance("50"), Some(50.0));
        assert_eq!(parse_max_distance(" 12.5 "), Some(12.5));
        assert_eq!(parse_max_distance("0"), Some(1.0));
        assert_eq!(parse_max_distance("-3"), Some(1.0));
        assert_eq!(parse_max_distance("250"), Some(100.0));
    }

    #[test]
    fn unparsable_distance_is_ignored() {
        assert_eq!(parse_max_distance(""), None);
        assert_eq!(parse_max_distance("loin"), None);
        assert_eq!(parse_max_distance("NaN"), None);
    }
}
