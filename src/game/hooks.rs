//! Entity Hooks
//!
//! Observers notified after the entity acts. Every method has an empty
//! default, so implementors only override what they care about. Hooks
//! see copies of the relevant values and cannot mutate physics state.

use crate::core::time::FrameTime;
use crate::game::entity::{EntityState, MovementDirection};

/// Callbacks fired by [`PhysicsEntity`](crate::game::entity::PhysicsEntity).
pub trait EntityHooks {
    /// Called after a horizontal displacement was applied.
    fn on_move(&mut self, _direction: MovementDirection) {}

    /// Called after a jump changed the vertical velocity.
    fn on_jump(&mut self) {}

    /// Called after a dash started.
    fn on_dash(&mut self) {}

    /// Called at the end of `update` with the committed state.
    fn on_update(&mut self, _state: EntityState, _frame: FrameTime) {}
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHooks;

impl EntityHooks for NoHooks {}

// Pairs fan out to both sides, left first.
impl<A: EntityHooks, B: EntityHooks> EntityHooks for (A, B) {
    fn on_move(&mut self, direction: MovementDirection) {
        self.0.on_move(direction);
        self.1.on_move(direction);
    }

    fn on_jump(&mut self) {
        self.0.on_jump();
        self.1.on_jump();
    }

    fn on_dash(&mut self) {
        self.0.on_dash();
        self.1.on_dash();
    }

    fn on_update(&mut self, state: EntityState, frame: FrameTime) {
        self.0.on_update(state, frame);
        self.1.on_update(state, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        jumps: u32,
        updates: u32,
    }

    impl EntityHooks for Counter {
        fn on_jump(&mut self) {
            self.jumps += 1;
        }

        fn on_update(&mut self, _state: EntityState, _frame: FrameTime) {
            self.updates += 1;
        }
    }

    #[test]
    fn test_pair_fans_out() {
        let mut pair = (Counter::default(), Counter::default());
        pair.on_jump();
        pair.on_update(EntityState::Idle, FrameTime::default());
        // Default no-ops are fine to call
        pair.on_dash();

        assert_eq!(pair.0.jumps, 1);
        assert_eq!(pair.1.jumps, 1);
        assert_eq!(pair.0.updates, 1);
        assert_eq!(pair.1.updates, 1);
    }
}
