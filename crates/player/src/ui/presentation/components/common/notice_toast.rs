//! Notice toast
//!
//! Shows the current notice and auto-dismisses it after a few seconds, or
//! on click.

use dioxus::prelude::*;

use crate::presentation::services::use_sleep;
use crate::presentation::state::{use_notice_state, NoticeKind};

pub const NOTICE_DISMISS_MS: u64 = 3_000;

#[component]
pub fn NoticeToast() -> Element {
    let notices = use_notice_state();
    let sleep = use_sleep();

    use_effect(move || {
        if let Some(notice) = notices.current() {
            let sleep = sleep.clone();
            let mut notices = notices;
            spawn(async move {
                sleep.sleep_ms(NOTICE_DISMISS_MS).await;
                notices.dismiss(notice.id);
            });
        }
    });

    let Some(notice) = notices.current() else {
        return rsx! {};
    };

    let kind_class = match notice.kind {
        NoticeKind::Info => "notice notice-info",
        NoticeKind::Error => "notice notice-error",
    };
    let id = notice.id;

    rsx! {
        div {
            class: "{kind_class}",
            role: "alert",
            onclick: move |_| {
                let mut notices = notices;
                notices.dismiss(id);
            },
            span { "{notice.message}" }
            button { class: "notice-close", "×" }
        }
    }
}
