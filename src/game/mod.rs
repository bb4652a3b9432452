//! Platformer Simulation
//!
//! ## Module Structure
//!
//! - `config`: Tunable movement constants
//! - `dash`: Dash charge/cooldown state machine
//! - `entity`: The moving entity, intent and integration
//! - `collision`: Probe-rectangle collision resolution
//! - `hooks`: Observer callbacks for the entity
//! - `animation`: Sprite frame cycling driven by entity state
//! - `events`: Event recording hook
//! - `level`: Static level geometry
//! - `input`: Per-frame command flags
//! - `tick`: Frame driver and replay

pub mod config;
pub mod dash;
pub mod entity;
pub mod collision;
pub mod hooks;
pub mod animation;
pub mod events;
pub mod level;
pub mod input;
pub mod tick;

// Re-export key types
pub use config::{PhysicsConfig, DashConfig};
pub use dash::Dash;
pub use entity::{PhysicsEntity, EntitySnapshot, EntityState, MovementDirection};
pub use collision::{CollisionReport, Probes};
pub use hooks::{EntityHooks, NoHooks};
pub use animation::{AnimationClip, AnimationState, SpriteAnimation};
pub use events::{EventRecorder, PhysicsEvent};
pub use level::{Color, Item, Level};
pub use input::InputFrame;
pub use tick::{tick, replay, apply_commands, TickResult};
