// Character state machine

use crate::core::time::{elapsed, Millis};

use super::animation::TrackId;

/// Represents the current logical state of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActorState {
    /// Standing still
    #[default]
    Idle,
    /// Walking left or right
    Moving,
    /// Playing the attack action (player only)
    Attacking,
    /// Mid bounce (player only)
    Jumping,
    /// Taking damage or recovering from it
    Hit,
    /// Health reached zero; death animation playing
    Dead,
    /// Death animation finished; waiting out the respawn delay
    Respawning,
}

impl ActorState {
    /// Check if the actor is out of the fight
    pub fn is_dead(&self) -> bool {
        matches!(self, Self::Dead | Self::Respawning)
    }

    /// Check if the actor can start an attack
    pub fn can_attack(&self) -> bool {
        matches!(self, Self::Idle | Self::Moving | Self::Attacking)
    }

    /// Check if the actor can start a jump
    pub fn can_jump(&self) -> bool {
        matches!(self, Self::Idle | Self::Moving)
    }

    /// Check if attack collisions can hurt the actor
    pub fn can_take_damage(&self) -> bool {
        !self.is_dead()
    }

    /// Check if the actor should be drawn at all
    pub fn is_drawable(&self) -> bool {
        !matches!(self, Self::Respawning)
    }

    /// Track that shows this state's body pose
    pub fn animation_track(&self) -> TrackId {
        match self {
            Self::Idle | Self::Respawning => TrackId::Idle,
            Self::Moving => TrackId::Walk,
            Self::Attacking => TrackId::Attack,
            Self::Jumping => TrackId::Jump,
            Self::Hit | Self::Dead => TrackId::Hit,
        }
    }
}

/// State machine that records state transitions and when they happened
#[derive(Debug, Clone)]
pub struct ActorStateMachine {
    current_state: ActorState,
    previous_state: ActorState,
    entered_at: Millis,
}

impl Default for ActorStateMachine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ActorStateMachine {
    pub fn new(now: Millis) -> Self {
        Self {
            current_state: ActorState::Idle,
            previous_state: ActorState::Idle,
            entered_at: now,
        }
    }

    /// Get the current state
    pub fn state(&self) -> ActorState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> ActorState {
        self.previous_state
    }

    /// When the current state was entered
    pub fn entered_at(&self) -> Millis {
        self.entered_at
    }

    /// Time spent in the current state
    pub fn time_in_state(&self, now: Millis) -> Millis {
        elapsed(now, self.entered_at)
    }

    /// Transition to a new state; returns whether the state changed
    pub fn transition(&mut self, new_state: ActorState, now: Millis) -> bool {
        if self.current_state == new_state {
            return false;
        }
        self.previous_state = self.current_state;
        self.current_state = new_state;
        self.entered_at = now;
        true
    }

    /// Force transition even to the same state (restamps entry time)
    pub fn force_transition(&mut self, new_state: ActorState, now: Millis) {
        self.previous_state = self.current_state;
        self.current_state = new_state;
        self.entered_at = now;
    }

    /// Return to idle from scratch
    pub fn reset(&mut self, now: Millis) {
        *self = Self::new(now);
    }
}
