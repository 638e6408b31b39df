//! Test utilities for outbound ports
//!
//! In-memory map surfaces that record every call, available when the
//! `testing` feature is enabled.
//!
//! ```ignore
//! use crate::ports::outbound::testing::RecordingSurfaceFactory;
//! ```

#[cfg(any(test, feature = "testing"))]
mod recording_surface;

#[cfg(any(test, feature = "testing"))]
pub use recording_surface::{RecordingSurface, RecordingSurfaceFactory, SurfaceLog};
