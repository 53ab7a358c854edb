//! Frame timing utilities.
//!
//! Two pieces, deliberately decoupled from the runtime so both are testable:
//! - [`FrameClock`] measures a clamped monotonic delta per loop pass
//! - [`TickCadence`] accumulates those deltas and fires fixed-period ticks
//!
//! Intended usage: one `FrameClock` per render loop, `tick()` once per pass,
//! and feed the resulting delta into a `TickCadence` to decide when the
//! expensive work (sampling, geometry rebuild) should happen.

mod cadence;
mod frame_clock;

pub use cadence::TickCadence;
pub use frame_clock::{FrameClock, FrameTime};
