//! Core geometry and timing primitives.
//!
//! Nothing in this module reads a clock or touches global state.

pub mod vec2;
pub mod rect;
pub mod time;
pub mod hash;

// Re-export core types
pub use vec2::Vec2;
pub use rect::Rect;
pub use time::FrameTime;
pub use hash::{StateHash, StateHasher};
