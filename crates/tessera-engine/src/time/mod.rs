//! Time subsystem.
//!
//! - [`FrameClock`] measures delta time between presented frames.
//! - [`IntervalTimer`] paces redraws at a fixed period, the way a page
//!   interval timer does.
//!
//! Both take `Instant`s explicitly through their `*_at` methods so they can
//! be driven deterministically in tests.

mod frame_clock;
mod interval;

pub use frame_clock::{FrameClock, FrameTime};
pub use interval::IntervalTimer;
