//! WASM platform implementations

use std::{future::Future, pin::Pin};

use gloo_timers::future::TimeoutFuture;

use crate::ports::outbound::SleepPort;

/// Browser sleep using `setTimeout`
#[derive(Clone, Copy, Default)]
pub struct WasmSleep;

impl SleepPort for WasmSleep {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(ms))
    }
}
