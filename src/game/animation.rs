//! Sprite Animation Timing
//!
//! Frame-index cyclers for sprite sheets. All timing state lives in
//! these structs, owned by the caller; the current time comes in as an
//! argument. Textures and drawing stay outside this crate.

use serde::{Serialize, Deserialize};

use crate::core::time::FrameTime;
use crate::game::entity::EntityState;
use crate::game::hooks::EntityHooks;

/// Cycles through `frames` indices, one step per `delay_secs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteAnimation {
    idx: usize,
    next_cycle: f64,
    delay_secs: f64,
    frames: usize,
}

impl SpriteAnimation {
    /// Create a cycler over `frames` sprites (at least one).
    pub fn new(delay_secs: f64, frames: usize) -> Self {
        Self {
            idx: 0,
            next_cycle: 0.0,
            delay_secs,
            frames: frames.max(1),
        }
    }

    /// Jump back to the first frame.
    pub fn reset(&mut self) {
        self.idx = 0;
    }

    /// Current frame index.
    #[inline]
    pub fn get(&self) -> usize {
        self.idx
    }

    /// Advance if the delay has passed, then return the frame index.
    pub fn next(&mut self, now: f64) -> usize {
        if now > self.next_cycle {
            self.next_cycle = now + self.delay_secs;
            self.idx = (self.idx + 1) % self.frames;
        }
        self.get()
    }
}

/// Which sprite sheet row is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationClip {
    /// Standing still
    Idle,
    /// Walking either way
    Running,
}

/// Idle/running selection driven by the entity's committed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    idle: SpriteAnimation,
    running: SpriteAnimation,
    clip: AnimationClip,
}

impl AnimationState {
    /// Create from the two cyclers.
    pub fn new(idle: SpriteAnimation, running: SpriteAnimation) -> Self {
        Self {
            idle,
            running,
            clip: AnimationClip::Idle,
        }
    }

    /// Clip and frame index to draw.
    pub fn current(&self) -> (AnimationClip, usize) {
        match self.clip {
            AnimationClip::Idle => (AnimationClip::Idle, self.idle.get()),
            AnimationClip::Running => (AnimationClip::Running, self.running.get()),
        }
    }

    /// Advance for a committed entity state.
    pub fn advance(&mut self, state: EntityState, now: f64) {
        match state {
            EntityState::MovingLeft | EntityState::MovingRight => {
                self.clip = AnimationClip::Running;
                self.running.next(now);
                self.idle.reset();
            }
            EntityState::Idle => {
                self.clip = AnimationClip::Idle;
                self.idle.next(now);
                self.running.reset();
            }
        }
    }
}

impl Default for AnimationState {
    /// Knight sprite sheet timings: 5 idle frames at 0.2 s, 16 running at 0.1 s.
    fn default() -> Self {
        Self::new(SpriteAnimation::new(0.2, 5), SpriteAnimation::new(0.1, 16))
    }
}

impl EntityHooks for AnimationState {
    fn on_update(&mut self, state: EntityState, frame: FrameTime) {
        self.advance(state, frame.now);
    }
}
