//! Transient user notices (toast)

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Sequence number, so a stale dismiss timer cannot clear a newer notice
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NoticeState {
    current: Signal<Option<Notice>>,
    next_id: Signal<u64>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self {
            current: Signal::new(None),
            next_id: Signal::new(1),
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.read().clone()
    }

    /// Replace the current notice. Returns the new notice id.
    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.current.set(Some(Notice {
            id,
            kind,
            message: message.into(),
        }));
        id
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeKind::Error, message)
    }

    /// Clear the notice if it is still the one identified by `id`.
    pub fn dismiss(&mut self, id: u64) {
        let is_current = self
            .current
            .peek()
            .as_ref()
            .is_some_and(|notice| notice.id == id);
        if is_current {
            self.current.set(None);
        }
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notice_state() -> NoticeState {
    use_context::<NoticeState>()
}
