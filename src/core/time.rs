//! Frame Timing
//!
//! The simulation never reads a clock. Callers pass the elapsed frame
//! time and the current monotonic time into every step.

use serde::{Serialize, Deserialize};

/// Timing for a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Seconds elapsed since the previous frame
    pub dt: f32,
    /// Monotonic time in seconds at the start of this frame
    pub now: f64,
}

impl FrameTime {
    /// Create a frame timing sample.
    #[inline]
    pub const fn new(dt: f32, now: f64) -> Self {
        Self { dt, now }
    }

    /// Fixed-rate timing for frame number `frame` starting at `start`.
    #[inline]
    pub fn fixed(frame: u32, dt: f32, start: f64) -> Self {
        Self {
            dt,
            now: start + frame as f64 * dt as f64,
        }
    }

    /// Timing for the following frame with the same `dt`.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            dt: self.dt,
            now: self.now + self.dt as f64,
        }
    }
}
