// Player attack subsystem
//
// Ready -> Attacking -> Ready. The attack pose and the charge effect run on
// separate animation clocks. The cooldown is anchored at the moment the attack
// ends (release at a frame boundary, or the duration ceiling), not when it
// starts, so a long held attack delays the next one more than a tap does.

use log::debug;

use crate::core::time::{elapsed, has_elapsed, remaining, Millis};
use crate::game::events::{EventQueue, GameEvent, SoundCue};
use crate::game::settings::CombatSettings;

use super::animation::{Animator, TrackId};

/// Outcome of pressing attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackStart {
    /// A fresh attack began
    Started,
    /// Already attacking; the press only keeps the attack held
    Extended,
    OnCooldown,
}

#[derive(Debug, Clone)]
pub struct AttackSubsystem {
    attacking: bool,
    holding: bool,
    show_charge: bool,
    charge_sound_playing: bool,
    attack_started_at: Millis,
    /// Cooldown anchor; `None` until the first attack ends
    last_attack_at: Option<Millis>,
    cooldown_ms: Millis,
    max_duration_ms: Millis,
}

impl AttackSubsystem {
    pub fn new(combat: &CombatSettings) -> Self {
        Self {
            attacking: false,
            holding: false,
            show_charge: false,
            charge_sound_playing: false,
            attack_started_at: 0,
            last_attack_at: None,
            cooldown_ms: combat.attack_cooldown_ms,
            max_duration_ms: combat.max_attack_duration_ms,
        }
    }

    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Whether the charge effect is visible (and therefore able to connect)
    pub fn is_showing_charge(&self) -> bool {
        self.show_charge
    }

    pub fn attack_started_at(&self) -> Millis {
        self.attack_started_at
    }

    pub fn last_attack_at(&self) -> Option<Millis> {
        self.last_attack_at
    }

    pub fn cooldown_ms(&self) -> Millis {
        self.cooldown_ms
    }

    pub fn max_duration_ms(&self) -> Millis {
        self.max_duration_ms
    }

    pub fn can_attack(&self, now: Millis) -> bool {
        match self.last_attack_at {
            Some(last) => has_elapsed(now, last, self.cooldown_ms),
            None => true,
        }
    }

    pub fn remaining_cooldown(&self, now: Millis) -> Millis {
        match self.last_attack_at {
            Some(last) => remaining(now, last, self.cooldown_ms),
            None => 0,
        }
    }

    pub fn remaining_attack_time(&self, now: Millis) -> Millis {
        if self.attacking {
            remaining(now, self.attack_started_at, self.max_duration_ms)
        } else {
            0
        }
    }

    /// Press (or keep pressing) attack
    pub fn start(&mut self, now: Millis, animator: &mut Animator, events: &mut EventQueue) -> AttackStart {
        if !self.can_attack(now) {
            return AttackStart::OnCooldown;
        }

        self.holding = true;
        if self.attacking {
            return AttackStart::Extended;
        }

        self.attacking = true;
        self.show_charge = true;
        self.attack_started_at = now;
        animator.reset(TrackId::Attack, now);
        animator.reset(TrackId::Charge, now);

        events.push(GameEvent::AttackStarted);
        if !self.charge_sound_playing {
            self.charge_sound_playing = true;
            events.sound(SoundCue::ChargeStart);
        }
        debug!("Attack started at {}ms", now);
        AttackStart::Started
    }

    /// Attack input released. The attack keeps playing until its next frame
    /// boundary notices the release.
    pub fn release(&mut self, events: &mut EventQueue) {
        self.holding = false;
        self.stop_charge_sound(events);
    }

    /// Advance an attack in progress; returns whether it is still running
    pub fn update(&mut self, now: Millis, animator: &mut Animator, events: &mut EventQueue) -> bool {
        if !self.attacking {
            return false;
        }

        if elapsed(now, self.attack_started_at) >= self.max_duration_ms {
            self.finish(now, animator, events);
            return false;
        }

        if animator.is_due(TrackId::Attack, now) {
            animator.advance(TrackId::Attack, now);
        }
        if animator.is_complete(TrackId::Attack) {
            if self.holding {
                animator.hold_last_frame(TrackId::Attack);
            } else {
                self.finish(now, animator, events);
                return false;
            }
        }

        if self.show_charge {
            animator.advance(TrackId::Charge, now);
        }
        true
    }

    fn finish(&mut self, now: Millis, animator: &mut Animator, events: &mut EventQueue) {
        self.attacking = false;
        self.show_charge = false;
        self.holding = false;
        self.last_attack_at = Some(now);
        animator.rewind(TrackId::Attack);
        self.stop_charge_sound(events);
        events.push(GameEvent::AttackEnded);
        debug!(
            "Attack ended at {}ms after {}ms",
            now,
            elapsed(now, self.attack_started_at)
        );
    }

    fn stop_charge_sound(&mut self, events: &mut EventQueue) {
        if self.charge_sound_playing {
            self.charge_sound_playing = false;
            events.sound(SoundCue::ChargeStop);
        }
    }

    /// Forget all attack history (new game)
    pub fn reset(&mut self) {
        self.attacking = false;
        self.holding = false;
        self.show_charge = false;
        self.charge_sound_playing = false;
        self.attack_started_at = 0;
        self.last_attack_at = None;
    }
}
