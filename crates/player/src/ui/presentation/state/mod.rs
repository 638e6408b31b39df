//! Presentation state
//!
//! Signal-backed stores provided through Dioxus context by the app root.

pub mod app_state;
pub mod notice_state;

pub use app_state::{use_app_state, AppState};
pub use notice_state::{use_notice_state, Notice, NoticeKind, NoticeState};
