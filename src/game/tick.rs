//! Frame Driver
//!
//! Runs one frame in the required order: commands, collision pass,
//! integration. Every frame is a pure function of the previous entity
//! state, the input, the items and the frame timing.

use tracing::debug;

use crate::core::time::FrameTime;
use crate::game::collision::CollisionReport;
use crate::game::entity::{MovementDirection, PhysicsEntity};
use crate::game::hooks::EntityHooks;
use crate::game::input::InputFrame;
use crate::game::level::Item;

/// Outcome of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Sides hit during the collision pass
    pub collisions: CollisionReport,
    /// A jump was applied
    pub jumped: bool,
    /// A dash started
    pub dashed: bool,
    /// Grounded now but not on the previous frame
    pub landed: bool,
    /// Grounded on the previous frame but not now
    pub left_ground: bool,
}

/// Run one frame.
///
/// Commands apply in a fixed order (jump, dash, right, left), so holding
/// both directions cancels out while still facing left.
pub fn tick<H: EntityHooks>(
    entity: &mut PhysicsEntity<H>,
    input: InputFrame,
    items: &[Item],
    frame: FrameTime,
) -> TickResult {
    let mut result = TickResult::default();
    let was_grounded = entity.is_grounded();

    // 1. Commands
    let (jumped, dashed) = apply_commands(entity, input, frame);
    result.jumped = jumped;
    result.dashed = dashed;

    // 2. Collisions (refreshes the grounded flag)
    result.collisions = entity.resolve_collisions(items, frame.dt);

    // 3. Integration
    entity.update(frame);

    result.landed = !was_grounded && entity.is_grounded();
    result.left_ground = was_grounded && !entity.is_grounded();

    if result.landed {
        debug!(position = %entity.position(), now = frame.now, "landed");
    } else if result.left_ground {
        debug!(position = %entity.position(), now = frame.now, "left ground");
    }

    result
}

/// Apply a frame's commands without resolving or integrating.
///
/// Returns `(jumped, dashed)`.
pub fn apply_commands<H: EntityHooks>(
    entity: &mut PhysicsEntity<H>,
    input: InputFrame,
    frame: FrameTime,
) -> (bool, bool) {
    let jumped = input.jump_pressed() && entity.jump();
    let dashed = input.dash_pressed() && entity.dash(frame.now);

    if input.right_held() {
        entity.move_in(MovementDirection::Right, frame.dt);
    }
    if input.left_held() {
        entity.move_in(MovementDirection::Left, frame.dt);
    }

    (jumped, dashed)
}

/// Replay a recorded input sequence at a fixed `dt`.
///
/// Frame `i` runs at `start + i * dt`. Returns the final entity and the
/// per-frame results.
pub fn replay<H: EntityHooks>(
    initial: PhysicsEntity<H>,
    items: &[Item],
    frames: &[InputFrame],
    dt: f32,
    start: f64,
) -> (PhysicsEntity<H>, Vec<TickResult>) {
    let mut entity = initial;
    let mut results = Vec::with_capacity(frames.len());

    for (i, input) in frames.iter().enumerate() {
        let frame = FrameTime::fixed(i as u32, dt, start);
        results.push(tick(&mut entity, *input, items, frame));
    }

    (entity, results)
}
