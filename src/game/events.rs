// One-way notifications from the combat loop to audio and rendering
//
// The core pushes events while it ticks; the caller drains them afterwards.
// Nothing in the core ever reads an event back.

use std::vec::Drain;

/// Sound the audio collaborator should start or stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Attack charge effect began
    ChargeStart,
    ChargeStop,
    /// Looped footsteps
    FootstepsStart,
    FootstepsStop,
    HostileDeath,
    /// Hostile finished playing out a hit sequence
    HitRecovered,
    HostileRespawn,
    /// Background music should stop (intro begins)
    MusicStop,
}

/// Something observable happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Sound(SoundCue),
    AttackStarted,
    AttackEnded,
    HostileKilled,
    HostileRespawned { x: i32 },
    KnockbackApplied { from_x: i32, to_x: i32 },
    IntroStarted,
}

/// Events produced since the last drain
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn sound(&mut self, cue: SoundCue) {
        self.push(GameEvent::Sound(cue));
    }

    pub fn drain(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Whether any queued event equals `event`
    pub fn contains(&self, event: GameEvent) -> bool {
        self.events.contains(&event)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
