//! Launch countdown
//!
//! This module provides:
//! - **Target instant**: the fixed launch moment, parsed once with its UTC offset
//! - **Snapshots**: remaining days/hours/minutes/seconds, computed purely from
//!   `now` and the target
//! - **Engine**: a latch that turns the first zero snapshot into a one-time
//!   "reached" signal, plus a tokio scheduler with cancellation
//!
//! # Lifecycle
//!
//! 1. Config string parsed into a `TargetInstant` (fails fast on bad input)
//! 2. Engine ticks on a fixed cadence, emitting a snapshot each time
//! 3. First tick at or past the target → `onReached` fires once, ticking stops

mod clock;
mod engine;
mod error;
mod instant;
mod snapshot;


pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{
    CountdownEngine, CountdownEvent, CountdownHandle, CountdownState, DEFAULT_CADENCE, Tick,
};
pub use error::CountdownError;
pub use instant::TargetInstant;
pub use snapshot::{CountdownSnapshot, compute};
