//! Platform abstraction ports for cross-platform compatibility
//!
//! Keeps `#[cfg]` branches out of presentation code.

use std::{future::Future, pin::Pin};

/// Async sleep abstraction (tokio on desktop, browser timers on wasm)
pub trait SleepPort: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}
