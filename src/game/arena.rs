// The arena: one player, one hostile, one clock
//
// Tick order: player input and movement, then combat against the player's
// strike snapshot, then the intro, then the HUD. Every tick finishes before
// anything outside reads state.

use log::info;

use crate::core::time::{has_elapsed, Millis};
use crate::engine::input::TickInput;
use crate::game::characters::hostile::Hostile;
use crate::game::characters::player::Player;
use crate::game::combat::CombatResolver;
use crate::game::events::{EventQueue, GameEvent, SoundCue};
use crate::game::hud::HudSnapshot;
use crate::game::settings::{GameSettings, SettingsError};

pub struct Arena {
    settings: GameSettings,
    player: Player,
    hostile: Hostile,
    resolver: CombatResolver,
    events: EventQueue,
    session_started_at: Millis,
    intro_triggered: bool,
    tick_count: u64,
}

impl Arena {
    /// Build an arena from validated settings; `seed` drives respawn jitter
    pub fn new(settings: GameSettings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            player: Player::new(&settings, 0),
            hostile: Hostile::new(&settings, 0),
            resolver: CombatResolver::new(settings.combat, seed),
            events: EventQueue::new(),
            session_started_at: 0,
            intro_triggered: false,
            tick_count: 0,
            settings,
        })
    }

    /// Reset both actors and restart the intro countdown
    pub fn new_game(&mut self, now: Millis) {
        self.player.reset(now);
        let width = self.settings.arena.width;
        self.resolver
            .respawn(&mut self.hostile, now, width, &mut self.events);
        self.session_started_at = now;
        self.intro_triggered = false;
        info!("New game at {}ms", now);
    }

    /// Run one tick at simulation time `now`
    pub fn tick(&mut self, input: &TickInput, now: Millis) -> HudSnapshot {
        let width = self.settings.arena.width;

        self.player.update(now, input, width, &mut self.events);

        let strike = self.player.strike();
        self.resolver
            .resolve(&strike, &mut self.hostile, now, width, &mut self.events);

        if !self.intro_triggered && has_elapsed(now, self.session_started_at, self.settings.intro_delay_ms) {
            self.intro_triggered = true;
            self.events.sound(SoundCue::MusicStop);
            self.events.sound(SoundCue::HostileRespawn);
            self.events.push(GameEvent::IntroStarted);
            self.player.begin_intro(now);
            info!("Intro started at {}ms", now);
        }
        self.player.update_intro(now);

        self.tick_count += 1;
        self.hud(now)
    }

    pub fn hud(&self, now: Millis) -> HudSnapshot {
        HudSnapshot::capture(&self.player, &self.hostile, &self.settings.combat, now)
    }

    /// Take every event produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain().collect()
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn hostile(&self) -> &Hostile {
        &self.hostile
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn session_started_at(&self) -> Millis {
        self.session_started_at
    }
}
