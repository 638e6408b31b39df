//! Shared components

pub mod notice_toast;

pub use notice_toast::{NoticeToast, NOTICE_DISMISS_MS};
