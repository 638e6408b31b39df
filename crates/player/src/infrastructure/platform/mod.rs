//! Platform-specific implementations
//!
//! The correct platform is selected at compile time based on the target architecture.

use std::sync::Arc;

use crate::ports::outbound::SleepPort;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::WasmSleep;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopSleep;

/// Sleep implementation for the current target
pub fn create_sleep() -> Arc<dyn SleepPort> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(WasmSleep)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(DesktopSleep)
    }
}
