//! # Platformer Physics
//!
//! Movement and collision core for a 2D platformer: one axis-aligned
//! entity with gravity, walking, jump, extra jumps and dash, resolved
//! against static rectangles.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PLATFORMER PHYSICS                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Geometry and timing primitives            │
//! │  ├── vec2.rs     - 2D f32 vector                             │
//! │  ├── rect.rs     - Axis-aligned rectangle, overlap test      │
//! │  ├── time.rs     - Injected frame timing (dt, now)           │
//! │  └── hash.rs     - State hashing for replay checks           │
//! │                                                              │
//! │  game/           - Simulation                                │
//! │  ├── config.rs   - Tunables, JSON loading                    │
//! │  ├── entity.rs   - Intent, gravity, integration              │
//! │  ├── collision.rs- Probe rectangles, grounded flag           │
//! │  ├── dash.rs     - Dash charges and cooldown                 │
//! │  ├── hooks.rs    - Observer callbacks                        │
//! │  ├── animation.rs- Sprite frame cycling                      │
//! │  ├── events.rs   - Event recording hook                      │
//! │  ├── level.rs    - Static geometry                           │
//! │  ├── input.rs    - Command flags                             │
//! │  └── tick.rs     - Frame driver and replay                   │
//! │                                                              │
//! │  error.rs        - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Timing
//!
//! No function in this crate reads a clock. Every step takes the frame's
//! `dt` and the current monotonic `now` as arguments, so a run is fully
//! determined by its inputs. Integration is explicit Euler with no
//! sub-stepping: behaviour depends on the frame rate.
//!
//! ## Example
//!
//! ```
//! use platformer_physics::{FrameTime, InputFrame, Level, PhysicsEntity, Vec2, tick};
//!
//! let level = Level::arena(1600.0, 900.0, 100.0);
//! let mut player = PhysicsEntity::new(Vec2::new(800.0, 400.0), 70.0, 95.0).unwrap();
//!
//! let mut frame = FrameTime::new(1.0 / 60.0, 1.0);
//! for _ in 0..120 {
//!     tick(&mut player, InputFrame::new(), level.items(), frame);
//!     frame = frame.next();
//! }
//! assert!(player.is_grounded());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod game;

// Re-export commonly used types
pub use core::{FrameTime, Rect, Vec2};
pub use error::{ConfigError, PhysicsError};
pub use game::{
    tick, replay, TickResult,
    EntityHooks, NoHooks,
    EntityState, MovementDirection, PhysicsEntity, EntitySnapshot,
    InputFrame, Item, Level, PhysicsConfig,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Frame rate the default tuning was balanced for (Hz)
pub const TARGET_FPS: u32 = 60;

/// Frame duration at [`TARGET_FPS`]
pub const FRAME_DT: f32 = 1.0 / TARGET_FPS as f32;
