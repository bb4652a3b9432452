//! Input Commands
//!
//! One frame of boolean commands, packed into a byte so recordings stay
//! small. Polling the keyboard is the caller's job.

use serde::{Serialize, Deserialize};

use crate::core::hash::{StateHash, StateHasher};

/// Commands for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct InputFrame {
    /// Action flags (packed bits):
    /// - Bit 0: Walk left (held)
    /// - Bit 1: Walk right (held)
    /// - Bit 2: Jump (pressed this frame)
    /// - Bit 3: Dash (pressed this frame)
    /// - Bit 4-7: Reserved
    pub flags: u8,
}

impl InputFrame {
    /// Walk left flag bit
    pub const FLAG_LEFT: u8 = 0x01;

    /// Walk right flag bit
    pub const FLAG_RIGHT: u8 = 0x02;

    /// Jump flag bit
    pub const FLAG_JUMP: u8 = 0x04;

    /// Dash flag bit
    pub const FLAG_DASH: u8 = 0x08;

    /// Create an empty input frame.
    pub const fn new() -> Self {
        Self { flags: 0 }
    }

    /// Holding left.
    pub const fn left() -> Self {
        Self { flags: Self::FLAG_LEFT }
    }

    /// Holding right.
    pub const fn right() -> Self {
        Self { flags: Self::FLAG_RIGHT }
    }

    /// Add a jump press.
    pub const fn with_jump(self) -> Self {
        Self { flags: self.flags | Self::FLAG_JUMP }
    }

    /// Add a dash press.
    pub const fn with_dash(self) -> Self {
        Self { flags: self.flags | Self::FLAG_DASH }
    }

    /// Walk left held.
    #[inline]
    pub fn left_held(&self) -> bool {
        self.flags & Self::FLAG_LEFT != 0
    }

    /// Walk right held.
    #[inline]
    pub fn right_held(&self) -> bool {
        self.flags & Self::FLAG_RIGHT != 0
    }

    /// Jump pressed this frame.
    #[inline]
    pub fn jump_pressed(&self) -> bool {
        self.flags & Self::FLAG_JUMP != 0
    }

    /// Dash pressed this frame.
    #[inline]
    pub fn dash_pressed(&self) -> bool {
        self.flags & Self::FLAG_DASH != 0
    }

    /// Set walk left.
    #[inline]
    pub fn set_left(&mut self, held: bool) {
        self.set_flag(Self::FLAG_LEFT, held);
    }

    /// Set walk right.
    #[inline]
    pub fn set_right(&mut self, held: bool) {
        self.set_flag(Self::FLAG_RIGHT, held);
    }

    /// Set jump.
    #[inline]
    pub fn set_jump(&mut self, pressed: bool) {
        self.set_flag(Self::FLAG_JUMP, pressed);
    }

    /// Set dash.
    #[inline]
    pub fn set_dash(&mut self, pressed: bool) {
        self.set_flag(Self::FLAG_DASH, pressed);
    }

    #[inline]
    fn set_flag(&mut self, flag: u8, on: bool) {
        if on {
            self.flags |= flag;
        } else {
            self.flags &= !flag;
        }
    }
}

/// Hash a recorded input sequence.
pub fn hash_recording(frames: &[InputFrame]) -> StateHash {
    let mut hasher = StateHasher::for_input_recording();
    hasher.update_u32(frames.len() as u32);
    for frame in frames {
        hasher.update_u8(frame.flags);
    }
    hasher.finalize()
}
