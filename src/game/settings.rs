// Game settings
//
// Every tunable of the combat loop lives here. `GameSettings::default()` is the
// shipped balance; a TOML file can override any subset of it. Settings are
// validated once at startup and trusted by the tick loop afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::time::Millis;

use super::characters::animation::{AnimationClip, TrackId, TrackLibrary};
use super::characters::stats::{ActorStats, HOSTILE_STATS, PLAYER_STATS};

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Playfield size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    pub width: i32,
    pub height: i32,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Attack, damage and recovery tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatSettings {
    /// Minimum time between the end of one attack and the start of the next
    pub attack_cooldown_ms: Millis,
    /// Hard ceiling on a single attack, held or not
    pub max_attack_duration_ms: Millis,
    /// Center-to-center distance below which the charge effect connects
    pub attack_range: f32,
    /// Health removed per qualifying tick
    pub damage_per_tick: i32,
    /// Wait between the end of the death animation and the respawn
    pub respawn_delay_ms: Millis,
    /// Respawn X lies in `[spawn_x, spawn_x + spawn_jitter)`
    pub spawn_jitter: i32,
    pub knockback_distance: i32,
    pub blink_duration_ms: Millis,
    /// Visibility toggle period while blinking
    pub blink_flicker_ms: Millis,
    /// Displayed health catches up with real health by this much per tick
    pub health_smoothing_per_tick: f32,
    /// Leading hit frames cycled while the hostile is still being hit
    pub flinch_frames: usize,
}

impl Default for CombatSettings {
    fn default() -> Self {
        Self {
            attack_cooldown_ms: 5000,
            max_attack_duration_ms: 2000,
            attack_range: 400.0,
            damage_per_tick: 2,
            respawn_delay_ms: 5000,
            spawn_jitter: 200,
            knockback_distance: 100,
            blink_duration_ms: 1000,
            blink_flicker_ms: 100,
            health_smoothing_per_tick: 2.0,
            flinch_frames: 2,
        }
    }
}

/// Player hop tuning
///
/// Each jump frame `n` places the player at
/// `origin + (-bounce_back + n * bounce_back_step, -bounce_up + n * bounce_up_step)`,
/// with the X offset pointing away from the facing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpSettings {
    pub cooldown_ms: Millis,
    pub bounce_up: i32,
    pub bounce_up_step: i32,
    pub bounce_back: i32,
    pub bounce_back_step: i32,
}

impl Default for JumpSettings {
    fn default() -> Self {
        Self {
            cooldown_ms: 800,
            bounce_up: 60,
            bounce_up_step: 12,
            bounce_back: 30,
            bounce_back_step: 6,
        }
    }
}

/// Player animation clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerAnimations {
    pub idle: AnimationClip,
    pub walk: AnimationClip,
    pub attack: AnimationClip,
    pub charge: AnimationClip,
    pub jump: AnimationClip,
    pub start: AnimationClip,
    pub fog: AnimationClip,
}

impl Default for PlayerAnimations {
    fn default() -> Self {
        Self {
            idle: AnimationClip::new(6, 120),
            walk: AnimationClip::new(6, 80),
            attack: AnimationClip::new(4, 100),
            charge: AnimationClip::new(4, 80),
            jump: AnimationClip::new(6, 80),
            start: AnimationClip::new(3, 100),
            fog: AnimationClip::new(2, 120),
        }
    }
}

impl PlayerAnimations {
    pub fn library(&self) -> TrackLibrary {
        TrackLibrary::new()
            .with_clip(TrackId::Idle, self.idle)
            .with_clip(TrackId::Walk, self.walk)
            .with_clip(TrackId::Attack, self.attack)
            .with_clip(TrackId::Charge, self.charge)
            .with_clip(TrackId::Jump, self.jump)
            .with_clip(TrackId::Start, self.start)
            .with_clip(TrackId::Fog, self.fog)
    }

    fn clips(&self) -> [(&'static str, AnimationClip); 7] {
        [
            ("animation.player.idle", self.idle),
            ("animation.player.walk", self.walk),
            ("animation.player.attack", self.attack),
            ("animation.player.charge", self.charge),
            ("animation.player.jump", self.jump),
            ("animation.player.start", self.start),
            ("animation.player.fog", self.fog),
        ]
    }
}

/// Hostile animation clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostileAnimations {
    pub idle: AnimationClip,
    /// Doubles as the death animation
    pub hit: AnimationClip,
}

impl Default for HostileAnimations {
    fn default() -> Self {
        Self {
            idle: AnimationClip::new(6, 120),
            hit: AnimationClip::new(7, 150),
        }
    }
}

impl HostileAnimations {
    pub fn library(&self) -> TrackLibrary {
        TrackLibrary::new()
            .with_clip(TrackId::Idle, self.idle)
            .with_clip(TrackId::Hit, self.hit)
    }

    fn clips(&self) -> [(&'static str, AnimationClip); 2] {
        [
            ("animation.hostile.idle", self.idle),
            ("animation.hostile.hit", self.hit),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnimationSettings {
    pub player: PlayerAnimations,
    pub hostile: HostileAnimations,
}

/// All tunables of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub arena: ArenaSettings,
    pub player: ActorStats,
    pub hostile: ActorStats,
    pub combat: CombatSettings,
    pub jump: JumpSettings,
    pub animation: AnimationSettings,
    /// Delay after a new game before the intro animation plays
    pub intro_delay_ms: Millis,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            arena: ArenaSettings::default(),
            player: PLAYER_STATS,
            hostile: HOSTILE_STATS,
            combat: CombatSettings::default(),
            jump: JumpSettings::default(),
            animation: AnimationSettings::default(),
            intro_delay_ms: 1000,
        }
    }
}

impl GameSettings {
    /// Parse settings from TOML; omitted fields keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate a TOML settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&source)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings the tick loop cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        check(self.arena.width > 0, "arena.width", "must be positive")?;
        check(self.arena.height > 0, "arena.height", "must be positive")?;

        validate_actor(
            &self.player,
            self.arena.width,
            ["player.scale", "player.max_health", "player.frame_width"],
        )?;
        validate_actor(
            &self.hostile,
            self.arena.width,
            ["hostile.scale", "hostile.max_health", "hostile.frame_width"],
        )?;
        check(self.player.move_speed >= 0, "player.move_speed", "must not be negative")?;

        let combat = &self.combat;
        check(
            combat.attack_cooldown_ms > 0,
            "combat.attack_cooldown_ms",
            "must be positive",
        )?;
        check(
            combat.max_attack_duration_ms > 0,
            "combat.max_attack_duration_ms",
            "must be positive",
        )?;
        check(combat.attack_range > 0.0, "combat.attack_range", "must be positive")?;
        check(combat.damage_per_tick > 0, "combat.damage_per_tick", "must be positive")?;
        check(combat.spawn_jitter >= 0, "combat.spawn_jitter", "must not be negative")?;
        check(
            combat.knockback_distance >= 0,
            "combat.knockback_distance",
            "must not be negative",
        )?;
        check(
            combat.blink_flicker_ms > 0,
            "combat.blink_flicker_ms",
            "must be positive",
        )?;
        check(
            combat.health_smoothing_per_tick > 0.0,
            "combat.health_smoothing_per_tick",
            "must be positive",
        )?;
        check(combat.flinch_frames > 0, "combat.flinch_frames", "must be positive")?;

        check(self.jump.cooldown_ms > 0, "jump.cooldown_ms", "must be positive")?;

        let player_clips = self.animation.player.clips();
        let hostile_clips = self.animation.hostile.clips();
        for &(field, clip) in player_clips.iter().chain(hostile_clips.iter()) {
            check(clip.delay_ms > 0, field, "frame delay must be positive")?;
        }

        Ok(())
    }
}

fn check(ok: bool, field: &'static str, reason: &'static str) -> Result<(), SettingsError> {
    if ok {
        Ok(())
    } else {
        Err(SettingsError::Invalid { field, reason })
    }
}

/// `fields` names the scale, health and frame-size settings in error messages
fn validate_actor(
    stats: &ActorStats,
    arena_width: i32,
    fields: [&'static str; 3],
) -> Result<(), SettingsError> {
    let [scale, max_health, frame] = fields;
    check(stats.scale > 0.0, scale, "must be positive")?;
    check(stats.max_health > 0, max_health, "must be positive")?;
    let extent = stats.draw_extent();
    check(
        extent.x > 0 && extent.y > 0,
        frame,
        "frame size times scale must be at least one pixel",
    )?;
    check(extent.x <= arena_width, frame, "actor is wider than the arena")
}
