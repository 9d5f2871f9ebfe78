// Health with a display-lagging copy for the health bar

use crate::core::math::{approach, clamp};

/// Current and displayed health of an actor
///
/// `smoothed` trails `current` downward at a fixed rate per tick and snaps up
/// immediately. It only feeds the health bar; gameplay checks read `current`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthPool {
    current: i32,
    max: i32,
    smoothed: f32,
}

impl HealthPool {
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self {
            current: max,
            max,
            smoothed: max as f32,
        }
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn smoothed(&self) -> f32 {
        self.smoothed
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Remove `amount` health, never going below zero; returns what is left
    pub fn take(&mut self, amount: i32) -> i32 {
        self.current = clamp(self.current - amount.max(0), 0, self.max);
        self.current
    }

    /// Back to full, display included
    pub fn refill(&mut self) {
        self.current = self.max;
        self.smoothed = self.max as f32;
    }

    /// Move the displayed value one tick toward real health
    pub fn smooth(&mut self, rate_per_tick: f32) {
        let target = self.current as f32;
        if self.smoothed > target {
            self.smoothed = approach(self.smoothed, target, rate_per_tick);
        } else {
            self.smoothed = target;
        }
    }

    /// Real health as a fraction of max
    pub fn ratio(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }

    /// Displayed health as a fraction of max
    pub fn smoothed_ratio(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        (self.smoothed / self.max as f32).clamp(0.0, 1.0)
    }
}
