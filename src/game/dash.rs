//! Dash Charges and Cooldown
//!
//! Two fields drive three implicit states: ready (charge left and
//! cooldown over), dashing (`now <= active_until`) and cooling down.
//! Charges only come back through [`Dash::reset`], which the entity
//! calls while grounded.

use serde::{Serialize, Deserialize};

use crate::game::config::DashConfig;

/// Dash charge/cooldown state machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dash {
    charges: u32,
    active_until: f64,
    config: DashConfig,
}

impl Dash {
    /// Create an empty dash. No charges until the first landing.
    pub fn new(config: DashConfig) -> Self {
        Self {
            charges: 0,
            active_until: 0.0,
            config,
        }
    }

    /// Remaining charges.
    #[inline]
    pub fn charges(&self) -> u32 {
        self.charges
    }

    /// Whether the last dash is over.
    #[inline]
    pub fn has_ended(&self, now: f64) -> bool {
        now > self.active_until
    }

    /// A charge is left and the cooldown after the last dash has passed.
    ///
    /// The cooldown counts from the end of the previous dash, not its start.
    #[inline]
    pub fn can_dash(&self, now: f64) -> bool {
        let cooldown_over = now > self.active_until + self.config.cooldown_secs;
        cooldown_over && self.charges > 0
    }

    /// Consume a charge and open the dash window.
    pub fn start(&mut self, now: f64) {
        debug_assert!(self.charges > 0, "dash started without a charge");
        self.charges = self.charges.saturating_sub(1);
        self.active_until = now + self.config.duration_secs;
    }

    /// Refill charges.
    pub fn reset(&mut self) {
        self.charges = self.config.max_dashes;
    }
}

impl Default for Dash {
    fn default() -> Self {
        Self::new(DashConfig::default())
    }
}
