// The bomb: an autonomous opponent that takes hits, dies and respawns
//
// The hostile owns its data; the combat resolver drives its transitions.

use crate::core::time::{elapsed, has_elapsed, Millis};
use crate::game::combat::HealthPool;
use crate::game::settings::GameSettings;

use super::animation::{AnimationFrameData, Animator};
use super::body::Body;
use super::locomotion::Locomotion;
use super::state::{ActorState, ActorStateMachine};
use super::stats::ActorStats;

/// Bookkeeping for the span from the first damaging tick to the end of the
/// recovery animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitSequence {
    /// A damaging collision happened this tick
    pub being_attacked: bool,
    /// Collision has ceased and the recovery frames are playing out
    pub recovery_started: bool,
    /// Attacker facing at the last damaging tick; decides knockback direction
    pub attacker_facing_right: bool,
}

impl Default for HitSequence {
    fn default() -> Self {
        Self {
            being_attacked: false,
            recovery_started: false,
            attacker_facing_right: true,
        }
    }
}

/// Cosmetic flicker after a recovery or respawn
///
/// Damage is still accepted while blinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkWindow {
    started_at: Option<Millis>,
    duration_ms: Millis,
}

impl BlinkWindow {
    pub fn new(duration_ms: Millis) -> Self {
        Self {
            started_at: None,
            duration_ms,
        }
    }

    pub fn start(&mut self, now: Millis) {
        self.started_at = Some(now);
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn started_at(&self) -> Option<Millis> {
        self.started_at
    }

    /// Close the window once its duration has passed; returns whether it closed
    pub fn expire(&mut self, now: Millis) -> bool {
        match self.started_at {
            Some(start) if has_elapsed(now, start, self.duration_ms) => {
                self.started_at = None;
                true
            }
            _ => false,
        }
    }

    /// Flicker phase: visible on even `flicker_ms` periods
    pub fn is_visible(&self, now: Millis, flicker_ms: Millis) -> bool {
        if !self.is_active() || flicker_ms == 0 {
            return true;
        }
        (now / flicker_ms) % 2 == 0
    }
}

#[derive(Debug, Clone)]
pub struct Hostile {
    pub body: Body,
    pub stats: ActorStats,
    pub state_machine: ActorStateMachine,
    pub animator: Animator,
    pub locomotion: Locomotion,
    pub health: HealthPool,
    pub hit: HitSequence,
    pub blink: BlinkWindow,
    /// Knockback already fired in the current blink window
    pub knockback_applied: bool,
    pub last_damage_at: Option<Millis>,
    /// Death-animation end while dead, respawn time once alive
    pub last_spawn_at: Millis,
}

impl Hostile {
    pub fn new(settings: &GameSettings, now: Millis) -> Self {
        let stats = settings.hostile;
        Self {
            body: Body::new(stats.spawn(), stats.draw_extent(), false),
            stats,
            state_machine: ActorStateMachine::new(now),
            animator: Animator::new(settings.animation.hostile.library(), now),
            locomotion: Locomotion::new(stats.move_speed, false, false),
            health: HealthPool::new(stats.max_health),
            hit: HitSequence::default(),
            blink: BlinkWindow::new(settings.combat.blink_duration_ms),
            knockback_applied: false,
            last_damage_at: None,
            last_spawn_at: now,
        }
    }

    pub fn state(&self) -> ActorState {
        self.state_machine.state()
    }

    pub fn is_dead(&self) -> bool {
        self.state().is_dead()
    }

    /// Death animation has finished and the respawn timer is running
    pub fn death_sequence_complete(&self) -> bool {
        self.state() == ActorState::Respawning
    }

    /// Time until respawn while waiting, zero otherwise
    pub fn respawn_remaining(&self, now: Millis, respawn_delay_ms: Millis) -> Millis {
        if self.death_sequence_complete() {
            respawn_delay_ms.saturating_sub(elapsed(now, self.last_spawn_at))
        } else {
            0
        }
    }

    /// Whether the renderer should draw the hostile this tick
    pub fn should_draw(&self, now: Millis, flicker_ms: Millis) -> bool {
        self.state().is_drawable() && self.blink.is_visible(now, flicker_ms)
    }

    pub fn visible_frame(&self) -> Option<AnimationFrameData> {
        if !self.state().is_drawable() {
            return None;
        }
        self.animator.frame_data(self.state().animation_track())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::animation::TrackId;
    use glam::IVec2;

    #[test]
    fn test_spawn_faces_left() {
        let hostile = Hostile::new(&GameSettings::default(), 0);
        assert_eq!(hostile.body.position, IVec2::new(800, 470));
        assert!(!hostile.body.facing_right);
        assert_eq!(hostile.health.current(), 300);
        assert_eq!(hostile.body.center().x, 900.0);
    }

    #[test]
    fn test_blink_window_expires() {
        let mut blink = BlinkWindow::new(1000);
        assert!(!blink.expire(10));
        blink.start(100);
        assert!(blink.is_active());
        assert!(!blink.expire(1099));
        assert!(blink.expire(1100));
        assert!(!blink.is_active());
    }

    #[test]
    fn test_blink_flicker() {
        let mut blink = BlinkWindow::new(1000);
        assert!(blink.is_visible(150, 100));
        blink.start(0);
        assert!(blink.is_visible(50, 100));
        assert!(!blink.is_visible(150, 100));
        assert!(blink.is_visible(250, 100));
    }

    #[test]
    fn test_not_drawn_while_waiting_to_respawn() {
        let mut hostile = Hostile::new(&GameSettings::default(), 0);
        hostile.state_machine.transition(ActorState::Dead, 10);
        assert!(hostile.should_draw(10, 100));
        assert_eq!(hostile.visible_frame().map(|f| f.track), Some(TrackId::Hit));

        hostile.state_machine.transition(ActorState::Respawning, 20);
        hostile.last_spawn_at = 20;
        assert!(!hostile.should_draw(20, 100));
        assert!(hostile.visible_frame().is_none());
        assert_eq!(hostile.respawn_remaining(1020, 5000), 4000);
    }
}
