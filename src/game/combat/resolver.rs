// Combat resolver
//
// Runs once per tick after the player has moved. It reads a snapshot of the
// player's attack (`Strike`) and drives the hostile through
// Idle -> Hit -> (recovery) -> Idle, or Hit -> Dead -> Respawning -> Idle.

use glam::Vec2;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::time::{has_elapsed, Millis};
use crate::game::characters::animation::TrackId;
use crate::game::characters::hostile::{HitSequence, Hostile};
use crate::game::characters::locomotion::MoveIntent;
use crate::game::characters::state::ActorState;
use crate::game::events::{EventQueue, GameEvent, SoundCue};
use crate::game::settings::CombatSettings;

/// The attacker's side of a collision check, captured once per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub center: Vec2,
    pub facing_right: bool,
    /// Attacking with the charge effect visible; only then can the strike connect
    pub charge_active: bool,
}

impl Strike {
    /// A strike that can never connect
    pub fn idle(center: Vec2, facing_right: bool) -> Self {
        Self {
            center,
            facing_right,
            charge_active: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CombatResolver {
    settings: CombatSettings,
    rng: ChaCha8Rng,
}

impl CombatResolver {
    pub fn new(settings: CombatSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn settings(&self) -> &CombatSettings {
        &self.settings
    }

    /// Whether a strike is close enough to hit the hostile
    pub fn in_range(&self, strike: &Strike, hostile: &Hostile) -> bool {
        strike.center.distance(hostile.body.center()) < self.settings.attack_range
    }

    /// Resolve one tick of combat against the hostile
    pub fn resolve(
        &mut self,
        strike: &Strike,
        hostile: &mut Hostile,
        now: Millis,
        arena_width: i32,
        events: &mut EventQueue,
    ) {
        match hostile.state() {
            ActorState::Respawning => {
                if has_elapsed(now, hostile.last_spawn_at, self.settings.respawn_delay_ms) {
                    self.respawn(hostile, now, arena_width, events);
                }
            }
            ActorState::Dead => self.advance_death(hostile, now),
            _ => {
                self.check_collision(strike, hostile, now, events);
                if hostile.state() == ActorState::Hit {
                    self.advance_hit(hostile, now, arena_width, events);
                } else if !hostile.is_dead() {
                    let state = hostile.locomotion.update(
                        now,
                        MoveIntent::NONE,
                        &mut hostile.body,
                        &mut hostile.animator,
                        arena_width,
                        events,
                    );
                    hostile.state_machine.transition(state, now);
                }
                if hostile.blink.expire(now) {
                    hostile.knockback_applied = false;
                }
            }
        }

        hostile.health.smooth(self.settings.health_smoothing_per_tick);
    }

    fn check_collision(&mut self, strike: &Strike, hostile: &mut Hostile, now: Millis, events: &mut EventQueue) {
        if strike.charge_active && self.in_range(strike, hostile) {
            if hostile.state().can_take_damage() {
                self.apply_damage(strike, hostile, now, events);
            }
            return;
        }

        hostile.hit.being_attacked = false;
        if !strike.charge_active && hostile.state() == ActorState::Hit {
            // Attack is over: play the remaining hit frames once, from wherever
            // the flinch left the cursor
            hostile.hit.recovery_started = true;
        }
    }

    fn apply_damage(&mut self, strike: &Strike, hostile: &mut Hostile, now: Millis, events: &mut EventQueue) {
        let left = hostile.health.take(self.settings.damage_per_tick);
        hostile.hit.being_attacked = true;
        hostile.hit.attacker_facing_right = strike.facing_right;
        hostile.last_damage_at = Some(now);

        if hostile.state_machine.transition(ActorState::Hit, now) {
            hostile.hit.recovery_started = false;
            hostile.animator.reset(TrackId::Hit, now);
        }

        if left == 0 {
            hostile.state_machine.transition(ActorState::Dead, now);
            hostile.hit.being_attacked = false;
            hostile.animator.reset(TrackId::Hit, now);
            events.sound(SoundCue::HostileDeath);
            events.push(GameEvent::HostileKilled);
            info!("Hostile destroyed at {}ms", now);
        }
    }

    fn advance_hit(&mut self, hostile: &mut Hostile, now: Millis, arena_width: i32, events: &mut EventQueue) {
        if !hostile.animator.is_due(TrackId::Hit, now) {
            return;
        }

        if hostile.hit.being_attacked {
            hostile
                .animator
                .advance_within(TrackId::Hit, now, self.settings.flinch_frames);
            return;
        }

        if !hostile.hit.recovery_started {
            hostile.animator.rewind(TrackId::Hit);
            hostile.hit.recovery_started = true;
        }
        hostile.animator.advance(TrackId::Hit, now);
        if hostile.animator.is_complete(TrackId::Hit) {
            self.finish_hit_sequence(hostile, now, arena_width, events);
        }
    }

    fn finish_hit_sequence(&mut self, hostile: &mut Hostile, now: Millis, arena_width: i32, events: &mut EventQueue) {
        let attacker_facing_right = hostile.hit.attacker_facing_right;
        hostile.hit = HitSequence {
            attacker_facing_right,
            ..HitSequence::default()
        };
        hostile.animator.rewind(TrackId::Hit);
        hostile.state_machine.transition(ActorState::Idle, now);
        hostile.blink.start(now);
        events.sound(SoundCue::HitRecovered);

        if !hostile.knockback_applied {
            hostile.knockback_applied = true;
            let from_x = hostile.body.x();
            let dx = if attacker_facing_right {
                self.settings.knockback_distance
            } else {
                -self.settings.knockback_distance
            };
            hostile.body.shift_x(dx, arena_width);
            events.push(GameEvent::KnockbackApplied {
                from_x,
                to_x: hostile.body.x(),
            });
            debug!("Hostile knocked back {} -> {}", from_x, hostile.body.x());
        }
    }

    fn advance_death(&mut self, hostile: &mut Hostile, now: Millis) {
        if !hostile.animator.is_due(TrackId::Hit, now) {
            return;
        }
        hostile.animator.advance(TrackId::Hit, now);
        if hostile.animator.is_complete(TrackId::Hit) {
            hostile.state_machine.transition(ActorState::Respawning, now);
            hostile.last_spawn_at = now;
            debug!("Hostile death animation finished at {}ms", now);
        }
    }

    /// Bring the hostile back at full health near its spawn point
    pub fn respawn(&mut self, hostile: &mut Hostile, now: Millis, arena_width: i32, events: &mut EventQueue) {
        let jitter = if self.settings.spawn_jitter > 0 {
            self.rng.gen_range(0..self.settings.spawn_jitter)
        } else {
            0
        };

        hostile.health.refill();
        hostile.body.position.y = hostile.stats.spawn_y;
        hostile.body.set_x(hostile.stats.spawn_x + jitter, arena_width);
        hostile.hit = HitSequence::default();
        hostile.knockback_applied = false;
        hostile.last_damage_at = None;
        hostile.last_spawn_at = now;
        hostile.blink.start(now);
        hostile.animator.reset_all(now);
        hostile.state_machine.force_transition(ActorState::Idle, now);

        events.push(GameEvent::HostileRespawned {
            x: hostile.body.x(),
        });
        info!("Hostile respawned at x={}", hostile.body.x());
    }
}
