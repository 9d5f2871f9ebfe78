// The player-controlled character

use log::debug;

use crate::core::time::Millis;
use crate::engine::input::TickInput;
use crate::game::combat::{HealthPool, Strike};
use crate::game::events::EventQueue;
use crate::game::settings::GameSettings;

use super::animation::{AnimationFrameData, Animator, TrackId};
use super::attack::{AttackStart, AttackSubsystem};
use super::body::Body;
use super::jump::JumpMotion;
use super::locomotion::{Locomotion, MoveIntent};
use super::state::{ActorState, ActorStateMachine};
use super::stats::ActorStats;

/// Intro pose shown once at the start of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntroState {
    pub playing: bool,
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub stats: ActorStats,
    pub state_machine: ActorStateMachine,
    pub animator: Animator,
    pub locomotion: Locomotion,
    pub attack: AttackSubsystem,
    pub jump: JumpMotion,
    /// The bomb never fights back, so this only feeds the health bar
    pub health: HealthPool,
    pub intro: IntroState,
}

impl Player {
    pub fn new(settings: &GameSettings, now: Millis) -> Self {
        let stats = settings.player;
        Self {
            body: Body::new(stats.spawn(), stats.draw_extent(), true),
            stats,
            state_machine: ActorStateMachine::new(now),
            animator: Animator::new(settings.animation.player.library(), now),
            locomotion: Locomotion::new(stats.move_speed, true, true),
            attack: AttackSubsystem::new(&settings.combat),
            jump: JumpMotion::new(settings.jump),
            health: HealthPool::new(stats.max_health),
            intro: IntroState::default(),
        }
    }

    /// Put the player back on its spawn point with fresh timers
    pub fn reset(&mut self, now: Millis) {
        self.body.position = self.stats.spawn();
        self.body.facing_right = true;
        self.state_machine.reset(now);
        self.animator.reset_all(now);
        self.attack.reset();
        self.jump.reset();
        self.health.refill();
        self.intro = IntroState::default();
    }

    pub fn state(&self) -> ActorState {
        self.state_machine.state()
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.is_attacking()
    }

    pub fn is_jumping(&self) -> bool {
        self.jump.is_active()
    }

    /// Run one tick of input, attack and movement
    pub fn update(&mut self, now: Millis, input: &TickInput, arena_width: i32, events: &mut EventQueue) {
        if input.attack_held {
            if self.state().can_attack()
                && self.attack.start(now, &mut self.animator, events) == AttackStart::Started
            {
                self.locomotion.halt(events);
            }
        } else {
            self.attack.release(events);
        }

        if input.jump_pressed
            && self.state().can_jump()
            && !self.attack.is_attacking()
            && self.jump.start(now, &self.body, &mut self.animator)
        {
            self.locomotion.halt(events);
            debug!("Jump started at {}ms", now);
        }

        let next = if self.attack.is_attacking() {
            if self.attack.update(now, &mut self.animator, events) {
                ActorState::Attacking
            } else {
                ActorState::Idle
            }
        } else if self.jump.is_active() {
            if self.jump.update(now, &mut self.body, &mut self.animator, arena_width) {
                ActorState::Jumping
            } else {
                ActorState::Idle
            }
        } else {
            let intent = MoveIntent::new(input.move_left, input.move_right);
            self.locomotion
                .update(now, intent, &mut self.body, &mut self.animator, arena_width, events)
        };
        self.state_machine.transition(next, now);
    }

    /// Start the intro pose and its fog effect
    pub fn begin_intro(&mut self, now: Millis) {
        self.intro = IntroState {
            playing: true,
            complete: false,
        };
        self.animator.reset(TrackId::Start, now);
        self.animator.reset(TrackId::Fog, now);
    }

    /// Advance the intro tracks; the intro ends when the start pose runs out
    pub fn update_intro(&mut self, now: Millis) {
        if !self.intro.playing {
            return;
        }
        self.animator.advance(TrackId::Start, now);
        self.animator.advance(TrackId::Fog, now);
        if self.animator.is_complete(TrackId::Start) {
            self.intro = IntroState {
                playing: false,
                complete: true,
            };
        }
    }

    /// What the combat resolver needs to know about the player this tick
    pub fn strike(&self) -> Strike {
        Strike {
            center: self.body.center(),
            facing_right: self.body.facing_right,
            charge_active: self.attack.is_attacking() && self.attack.is_showing_charge(),
        }
    }

    /// Frames the renderer should draw this tick
    pub fn visible_frames(&self) -> Vec<AnimationFrameData> {
        let mut tracks = Vec::with_capacity(3);
        if self.intro.playing {
            tracks.push(TrackId::Start);
            tracks.push(TrackId::Fog);
        } else {
            tracks.push(self.state().animation_track());
            if self.attack.is_showing_charge() {
                tracks.push(TrackId::Charge);
            }
        }
        tracks
            .into_iter()
            .filter_map(|track| self.animator.frame_data(track))
            .collect()
    }
}
