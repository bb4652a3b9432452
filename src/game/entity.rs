//! Physics Entity
//!
//! One moving axis-aligned box: walking, gravity, jump, extra jumps and
//! dash. Collision resolution lives in [`collision`](crate::game::collision).
//!
//! ## Frame order
//!
//! ```text
//! input ──► move_in / jump / dash
//!       ──► resolve_collisions(items, dt)   grounded flag refreshed
//!       ──► update(frame)                   gravity, refill, integrate
//! ```
//!
//! `resolve_collisions` must run before `update`: the refill and gravity
//! branch reads the grounded flag it produces.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::core::hash::{StateHash, StateHasher};
use crate::core::rect::Rect;
use crate::core::time::FrameTime;
use crate::core::vec2::Vec2;
use crate::error::PhysicsError;
use crate::game::config::PhysicsConfig;
use crate::game::dash::Dash;
use crate::game::hooks::{EntityHooks, NoHooks};

/// Horizontal facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum MovementDirection {
    /// Facing -X
    Left = 0,
    /// Facing +X
    #[default]
    Right = 1,
}

/// Movement state used for animation selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum EntityState {
    /// Walked left this frame
    MovingLeft = 0,
    /// Walked right this frame
    MovingRight = 1,
    /// No walk command this frame
    #[default]
    Idle = 2,
}

impl EntityState {
    /// Display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            EntityState::MovingLeft => "MovingLeft",
            EntityState::MovingRight => "MovingRight",
            EntityState::Idle => "Idle",
        }
    }
}

/// A single moving entity.
#[derive(Debug, Clone)]
pub struct PhysicsEntity<H: EntityHooks = NoHooks> {
    pub(crate) dash: Dash,
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) grounded: bool,
    direction: MovementDirection,
    new_state: EntityState,
    state: EntityState,
    jump_count: u32,
    width: f32,
    height: f32,
    pub(crate) config: PhysicsConfig,
    hooks: H,
}

impl PhysicsEntity<NoHooks> {
    /// Create an entity centered on `position` with default tuning.
    pub fn new(position: Vec2, width: f32, height: f32) -> Result<Self, PhysicsError> {
        Self::with_config(position, width, height, PhysicsConfig::default())
    }

    /// Create an entity with custom tuning.
    pub fn with_config(
        position: Vec2,
        width: f32,
        height: f32,
        config: PhysicsConfig,
    ) -> Result<Self, PhysicsError> {
        Self::with_hooks(position, width, height, config, NoHooks)
    }
}

impl<H: EntityHooks> PhysicsEntity<H> {
    /// Create an entity that reports to `hooks`.
    ///
    /// Starts airborne with no jump or dash charges; both fill on the
    /// first grounded update.
    pub fn with_hooks(
        position: Vec2,
        width: f32,
        height: f32,
        config: PhysicsConfig,
        hooks: H,
    ) -> Result<Self, PhysicsError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PhysicsError::InvalidDimensions { width, height });
        }
        if !position.is_finite() {
            return Err(PhysicsError::InvalidPosition { x: position.x, y: position.y });
        }
        config.validate()?;

        Ok(Self {
            dash: Dash::new(config.dash.clone()),
            position,
            velocity: Vec2::ZERO,
            grounded: false,
            direction: MovementDirection::Right,
            new_state: EntityState::Idle,
            state: EntityState::Idle,
            jump_count: 0,
            width,
            height,
            config,
            hooks,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Center point.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity (units/second).
    #[inline]
    pub fn speed(&self) -> Vec2 {
        self.velocity
    }

    /// Whether the last collision pass found ground underneath.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Last walking direction.
    #[inline]
    pub fn direction(&self) -> MovementDirection {
        self.direction
    }

    /// Movement state committed by the last `update`.
    #[inline]
    pub fn state(&self) -> EntityState {
        self.state
    }

    /// Remaining airborne jumps.
    #[inline]
    pub fn jump_count(&self) -> u32 {
        self.jump_count
    }

    /// Remaining dash charges.
    #[inline]
    pub fn dash_count(&self) -> u32 {
        self.dash.charges()
    }

    /// Hitbox width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Hitbox height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Tuning in use.
    #[inline]
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Attached observers.
    #[inline]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Give back the hooks, dropping the entity.
    pub fn into_hooks(self) -> H {
        self.hooks
    }

    /// Bounding box, `position ± (width/2, height/2)`.
    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::from_center(self.position, self.width, self.height)
    }

    /// Copy of the observable state.
    pub fn snapshot(&self) -> EntitySnapshot {
        EntitySnapshot {
            position: self.position,
            velocity: self.velocity,
            grounded: self.grounded,
            direction: self.direction,
            state: self.state,
            jump_count: self.jump_count,
            dash_count: self.dash.charges(),
        }
    }

    // =========================================================================
    // Intent
    // =========================================================================

    /// Walk one frame in `direction`.
    ///
    /// Displaces the position directly instead of setting velocity, so
    /// calling it twice in a frame walks twice as far.
    pub fn move_in(&mut self, direction: MovementDirection, dt: f32) {
        self.direction = direction;

        let step = self.config.movement_speed * dt;
        match direction {
            MovementDirection::Left => {
                self.new_state = EntityState::MovingLeft;
                self.position.x -= step;
            }
            MovementDirection::Right => {
                self.new_state = EntityState::MovingRight;
                self.position.x += step;
            }
        }

        self.hooks.on_move(direction);
    }

    /// Jump if possible. Returns whether the jump happened.
    ///
    /// Grounded jumps are free; airborne jumps spend one extra-jump
    /// charge. The vertical velocity is overwritten, not added to.
    pub fn jump(&mut self) -> bool {
        if self.grounded {
            // Free
        } else if self.jump_count > 0 {
            self.jump_count -= 1;
        } else {
            return false;
        }

        self.velocity.y = -self.config.jumping_speed;
        debug!(grounded = self.grounded, jumps_left = self.jump_count, "jump");

        self.hooks.on_jump();
        true
    }

    /// Dash in the facing direction if a charge is ready.
    /// Returns whether the dash started.
    pub fn dash(&mut self, now: f64) -> bool {
        // Stops dash spamming
        if !self.dash.can_dash(now) {
            return false;
        }

        self.velocity.x = match self.direction {
            MovementDirection::Left => -self.config.dashing_speed,
            MovementDirection::Right => self.config.dashing_speed,
        };
        self.dash.start(now);
        debug!(direction = ?self.direction, dashes_left = self.dash.charges(), "dash");

        self.hooks.on_dash();
        true
    }

    // =========================================================================
    // Integration
    // =========================================================================

    /// Advance one frame. Call after [`resolve_collisions`](Self::resolve_collisions).
    pub fn update(&mut self, frame: FrameTime) {
        self.state = self.new_state;
        self.new_state = EntityState::Idle;

        if self.grounded {
            self.jump_count = self.config.max_extra_jumps;
            self.dash.reset();
            self.velocity.y = 0.0;
        } else {
            self.velocity.y += self.config.gravity * frame.dt;
        }

        self.position += self.velocity * frame.dt;

        if self.dash.has_ended(frame.now) {
            self.velocity.x = 0.0;
        } else {
            // No falling mid-dash
            self.velocity.y = 0.0;
        }

        debug_assert!(self.jump_count <= self.config.max_extra_jumps);
        debug_assert!(self.dash.charges() <= self.config.dash.max_dashes);

        self.hooks.on_update(self.state, frame);
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Observable entity state at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Center point
    pub position: Vec2,
    /// Velocity in pixels per second
    pub velocity: Vec2,
    /// Standing on something
    pub grounded: bool,
    /// Facing
    pub direction: MovementDirection,
    /// Committed movement state
    pub state: EntityState,
    /// Extra jumps left
    pub jump_count: u32,
    /// Dash charges left
    pub dash_count: u32,
}

impl EntitySnapshot {
    /// Feed this snapshot into a hasher.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.update_vec2(self.position);
        hasher.update_vec2(self.velocity);
        hasher.update_bool(self.grounded);
        hasher.update_u8(self.direction as u8);
        hasher.update_u8(self.state as u8);
        hasher.update_u32(self.jump_count);
        hasher.update_u32(self.dash_count);
    }

    /// SHA-256 of this snapshot.
    pub fn hash(&self) -> StateHash {
        let mut hasher = StateHasher::for_entity_state();
        self.hash_into(&mut hasher);
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn entity() -> PhysicsEntity {
        PhysicsEntity::new(Vec2::new(100.0, 100.0), 20.0, 40.0).unwrap()
    }

    /// Pretend a floor was found this frame.
    fn land(e: &mut PhysicsEntity, now: f64) {
        e.grounded = true;
        e.update(FrameTime::new(DT, now));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let pos = Vec2::ZERO;
        assert_eq!(
            PhysicsEntity::new(pos, 0.0, 10.0).unwrap_err(),
            PhysicsError::InvalidDimensions { width: 0.0, height: 10.0 }
        );
        assert!(PhysicsEntity::new(pos, 10.0, -1.0).is_err());
        assert!(PhysicsEntity::new(pos, f32::NAN, 10.0).is_err());
        assert!(PhysicsEntity::new(Vec2::new(f32::INFINITY, 0.0), 10.0, 10.0).is_err());
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = PhysicsConfig { gravity: -5.0, ..Default::default() };
        let err = PhysicsEntity::with_config(Vec2::ZERO, 1.0, 1.0, config).unwrap_err();
        assert!(matches!(err, PhysicsError::Config(_)));
    }

    #[test]
    fn test_initial_state() {
        let e = entity();
        assert_eq!(e.position(), Vec2::new(100.0, 100.0));
        assert_eq!(e.speed(), Vec2::ZERO);
        assert!(!e.is_grounded());
        assert_eq!(e.direction(), MovementDirection::Right);
        assert_eq!(e.state(), EntityState::Idle);
        assert_eq!(e.jump_count(), 0);
        assert_eq!(e.dash_count(), 0);
        assert_eq!(e.hitbox(), Rect::new(90.0, 80.0, 20.0, 40.0));
    }

    #[test]
    fn test_move_is_direct_displacement() {
        let mut e = entity();
        e.move_in(MovementDirection::Left, 0.1);

        assert_eq!(e.position().x, 50.0);
        assert_eq!(e.speed().x, 0.0);
        assert_eq!(e.direction(), MovementDirection::Left);
        // Not committed until update
        assert_eq!(e.state(), EntityState::Idle);
    }

    #[test]
    fn test_state_commits_one_frame_later() {
        let mut e = entity();
        e.move_in(MovementDirection::Right, DT);
        e.update(FrameTime::new(DT, 1.0));
        assert_eq!(e.state(), EntityState::MovingRight);

        // No move this frame: back to idle
        e.update(FrameTime::new(DT, 1.0 + DT as f64));
        assert_eq!(e.state(), EntityState::Idle);
    }

    #[test]
    fn test_gravity_when_airborne() {
        let mut e = entity();
        e.update(FrameTime::new(0.1, 1.0));

        assert!((e.speed().y - 100.0).abs() < 1e-4);
        assert!((e.position().y - 110.0).abs() < 1e-4);
    }

    #[test]
    fn test_grounded_update_refills_and_stops_falling() {
        let mut e = entity();
        e.velocity.y = 300.0;
        land(&mut e, 1.0);

        assert_eq!(e.speed().y, 0.0);
        assert_eq!(e.jump_count(), e.config().max_extra_jumps);
        assert_eq!(e.dash_count(), e.config().dash.max_dashes);
        assert_eq!(e.position().y, 100.0);
    }

    #[test]
    fn test_ground_jump_is_free() {
        let mut e = entity();
        land(&mut e, 1.0);

        assert!(e.jump());
        assert_eq!(e.speed().y, -700.0);
        assert_eq!(e.jump_count(), 1);
    }

    #[test]
    fn test_airborne_jump_without_charge_is_noop() {
        let mut e = entity();
        e.velocity.y = 250.0;

        assert!(!e.jump());
        assert_eq!(e.speed().y, 250.0);
        assert_eq!(e.jump_count(), 0);
    }

    #[test]
    fn test_airborne_jump_overwrites_fall_speed() {
        let mut e = entity();
        land(&mut e, 1.0);
        e.grounded = false;
        e.velocity.y = 900.0;

        assert!(e.jump());
        assert_eq!(e.speed().y, -700.0);
        assert_eq!(e.jump_count(), 0);
    }

    #[test]
    fn test_dash_requires_charge() {
        let mut e = entity();
        assert!(!e.dash(5.0));
        assert_eq!(e.speed().x, 0.0);
    }

    #[test]
    fn test_dash_direction_follows_facing() {
        let mut e = entity();
        land(&mut e, 1.0);

        assert!(e.dash(2.0));
        assert_eq!(e.speed().x, 2000.0);

        e.move_in(MovementDirection::Left, DT);
        assert!(e.dash(3.0));
        assert_eq!(e.speed().x, -2000.0);
        assert_eq!(e.dash_count(), 0);
    }

    #[test]
    fn test_dash_suspends_gravity_then_stops() {
        let mut e = entity();
        land(&mut e, 1.0);
        e.grounded = false;

        assert!(e.dash(2.0));
        e.update(FrameTime::new(DT, 2.05));
        // Still dashing: no vertical speed, horizontal kept
        assert_eq!(e.speed().y, 0.0);
        assert_eq!(e.speed().x, 2000.0);

        e.update(FrameTime::new(DT, 2.2));
        // Dash over: horizontal speed dropped, gravity applies again
        assert_eq!(e.speed().x, 0.0);
        assert!(e.speed().y > 0.0);
    }

    #[test]
    fn test_snapshot_hash_tracks_state() {
        let mut e = entity();
        let before = e.snapshot();
        assert_eq!(before.hash(), e.snapshot().hash());

        e.move_in(MovementDirection::Left, DT);
        assert_ne!(before.hash(), e.snapshot().hash());
    }

    #[test]
    fn test_state_names() {
        assert_eq!(EntityState::MovingLeft.as_str(), "MovingLeft");
        assert_eq!(EntityState::Idle.as_str(), "Idle");
    }
}
