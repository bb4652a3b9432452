//! Physics Events
//!
//! A hook that records what the entity did, frame by frame, for
//! debugging and replay comparison.

use serde::{Serialize, Deserialize};

use crate::core::time::FrameTime;
use crate::game::entity::{EntityState, MovementDirection};
use crate::game::hooks::EntityHooks;

/// Something the entity did.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PhysicsEvent {
    /// Walked one frame's worth
    Moved {
        /// Frame index
        frame: u32,
        /// Walk direction
        direction: MovementDirection,
    },

    /// Jump applied
    Jumped {
        /// Frame index
        frame: u32,
    },

    /// Dash started
    Dashed {
        /// Frame index
        frame: u32,
    },

    /// Committed movement state differs from the previous frame
    StateChanged {
        /// Frame index
        frame: u32,
        /// State on the previous frame
        from: EntityState,
        /// State committed this frame
        to: EntityState,
        /// Clock value of the frame
        at: f64,
    },
}

impl PhysicsEvent {
    /// Frame the event belongs to.
    pub fn frame(&self) -> u32 {
        match self {
            PhysicsEvent::Moved { frame, .. }
            | PhysicsEvent::Jumped { frame }
            | PhysicsEvent::Dashed { frame }
            | PhysicsEvent::StateChanged { frame, .. } => *frame,
        }
    }
}

/// Hook collecting [`PhysicsEvent`]s.
///
/// The frame counter advances on every `on_update`, so events raised
/// before `update` carry the index of the frame being simulated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventRecorder {
    frame: u32,
    last_state: EntityState,
    events: Vec<PhysicsEvent>,
}

impl EventRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[PhysicsEvent] {
        &self.events
    }

    /// Number of completed updates.
    pub fn frame(&self) -> u32 {
        self.frame
    }
}

impl EntityHooks for EventRecorder {
    fn on_move(&mut self, direction: MovementDirection) {
        self.events.push(PhysicsEvent::Moved { frame: self.frame, direction });
    }

    fn on_jump(&mut self) {
        self.events.push(PhysicsEvent::Jumped { frame: self.frame });
    }

    fn on_dash(&mut self) {
        self.events.push(PhysicsEvent::Dashed { frame: self.frame });
    }

    fn on_update(&mut self, state: EntityState, frame: FrameTime) {
        if state != self.last_state {
            self.events.push(PhysicsEvent::StateChanged {
                frame: self.frame,
                from: self.last_state,
                to: state,
                at: frame.now,
            });
            self.last_state = state;
        }
        self.frame += 1;
    }
}
