// Derived UI quantities, recomputed after every tick
//
// Nothing here feeds back into gameplay. The renderer draws from a snapshot and
// never touches the actors directly.

use glam::IVec2;

use crate::core::math::fill_ratio;
use crate::core::time::Millis;
use crate::game::characters::animation::AnimationFrameData;
use crate::game::characters::hostile::Hostile;
use crate::game::characters::player::Player;
use crate::game::characters::state::ActorState;
use crate::game::combat::HealthPool;
use crate::game::settings::CombatSettings;

/// Health bar fill, real and displayed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthBar {
    pub ratio: f32,
    pub smoothed_ratio: f32,
}

impl From<&HealthPool> for HealthBar {
    fn from(health: &HealthPool) -> Self {
        Self {
            ratio: health.ratio(),
            smoothed_ratio: health.smoothed_ratio(),
        }
    }
}

/// What the renderer needs to draw one actor
#[derive(Debug, Clone, PartialEq)]
pub struct ActorView {
    pub position: IVec2,
    pub facing_right: bool,
    pub state: ActorState,
    /// Tracks to draw this tick, bottom layer first
    pub frames: Vec<AnimationFrameData>,
    pub health: HealthBar,
    pub should_draw: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub now: Millis,
    pub player: ActorView,
    pub hostile: ActorView,
    /// Cooldown bar, `Some` only while the next attack is not yet allowed
    pub cooldown_fill: Option<f32>,
    /// Attack duration bar, `Some` only while attacking and off cooldown
    pub attack_fill: Option<f32>,
    /// Progress toward the hostile's respawn while it waits off screen
    pub respawn_progress: Option<f32>,
    pub intro_playing: bool,
}

impl HudSnapshot {
    pub fn capture(player: &Player, hostile: &Hostile, combat: &CombatSettings, now: Millis) -> Self {
        let attack = &player.attack;

        let cooldown_fill = (!attack.can_attack(now)).then(|| {
            let cooldown = attack.cooldown_ms();
            fill_ratio(cooldown - attack.remaining_cooldown(now).min(cooldown), cooldown)
        });

        let attack_fill = match attack.remaining_attack_time(now) {
            0 => None,
            _ if cooldown_fill.is_some() => None,
            remaining => {
                let max = attack.max_duration_ms();
                Some(fill_ratio(max - remaining.min(max), max))
            }
        };

        let respawn_progress = hostile.death_sequence_complete().then(|| {
            let delay = combat.respawn_delay_ms;
            fill_ratio(delay - hostile.respawn_remaining(now, delay), delay)
        });

        Self {
            now,
            player: ActorView {
                position: player.body.position,
                facing_right: player.body.facing_right,
                state: player.state(),
                frames: player.visible_frames(),
                health: HealthBar::from(&player.health),
                should_draw: true,
            },
            hostile: ActorView {
                position: hostile.body.position,
                facing_right: hostile.body.facing_right,
                state: hostile.state(),
                frames: hostile.visible_frame().into_iter().collect(),
                health: HealthBar::from(&hostile.health),
                should_draw: hostile.should_draw(now, combat.blink_flicker_ms),
            },
            cooldown_fill,
            attack_fill,
            respawn_progress,
            intro_playing: player.intro.playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::TickInput;
    use crate::game::events::EventQueue;
    use crate::game::settings::GameSettings;
    use approx::assert_relative_eq;

    fn actors() -> (GameSettings, Player, Hostile) {
        let settings = GameSettings::default();
        let player = Player::new(&settings, 0);
        let hostile = Hostile::new(&settings, 0);
        (settings, player, hostile)
    }

    #[test]
    fn test_fresh_session() {
        let (settings, player, hostile) = actors();
        let hud = HudSnapshot::capture(&player, &hostile, &settings.combat, 0);
        assert_eq!(hud.cooldown_fill, None);
        assert_eq!(hud.attack_fill, None);
        assert_eq!(hud.respawn_progress, None);
        assert_eq!(hud.player.position, IVec2::new(200, 470));
        assert!(hud.hostile.should_draw);
        assert_relative_eq!(hud.hostile.health.ratio, 1.0);
    }

    #[test]
    fn test_attack_bar_fills_while_attacking() {
        let (settings, mut player, hostile) = actors();
        let mut events = EventQueue::new();
        let held = TickInput {
            attack_held: true,
            ..TickInput::default()
        };
        player.update(0, &held, 1280, &mut events);
        player.update(500, &held, 1280, &mut events);

        let hud = HudSnapshot::capture(&player, &hostile, &settings.combat, 500);
        let fill = hud.attack_fill.unwrap_or_default();
        assert_relative_eq!(fill, 0.25, epsilon = 1e-6);
        assert_eq!(hud.cooldown_fill, None);
    }

    #[test]
    fn test_cooldown_bar_after_attack() {
        let (settings, mut player, hostile) = actors();
        let mut events = EventQueue::new();
        let held = TickInput {
            attack_held: true,
            ..TickInput::default()
        };
        player.update(0, &held, 1280, &mut events);
        let mut now = 0;
        while player.is_attacking() {
            now += 16;
            player.update(now, &TickInput::default(), 1280, &mut events);
        }

        let hud = HudSnapshot::capture(&player, &hostile, &settings.combat, now);
        assert_eq!(hud.cooldown_fill, Some(0.0));
        let hud = HudSnapshot::capture(&player, &hostile, &settings.combat, now + 2500);
        assert_relative_eq!(hud.cooldown_fill.unwrap_or_default(), 0.5, epsilon = 1e-6);
        let hud = HudSnapshot::capture(&player, &hostile, &settings.combat, now + 5000);
        assert_eq!(hud.cooldown_fill, None);
    }

    #[test]
    fn test_respawn_progress_and_hidden_hostile() {
        let (settings, player, mut hostile) = actors();
        hostile.state_machine.transition(ActorState::Dead, 100);
        hostile.state_machine.transition(ActorState::Respawning, 1000);
        hostile.last_spawn_at = 1000;

        let hud = HudSnapshot::capture(&player, &hostile, &settings.combat, 2000);
        assert_relative_eq!(hud.respawn_progress.unwrap_or_default(), 0.2, epsilon = 1e-6);
        assert!(!hud.hostile.should_draw);
        assert!(hud.hostile.frames.is_empty());
    }

    #[test]
    fn test_blink_flicker() {
        let (settings, player, mut hostile) = actors();
        hostile.blink.start(0);
        let shown = HudSnapshot::capture(&player, &hostile, &settings.combat, 50);
        let hidden = HudSnapshot::capture(&player, &hostile, &settings.combat, 150);
        assert!(shown.hostile.should_draw);
        assert!(!hidden.hostile.should_draw);
    }
}
