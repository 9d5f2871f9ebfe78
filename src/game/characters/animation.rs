// Character animation system
//
// Every animation track owns a cursor: a frame index plus the timestamp of its
// last advance. Cursors only move when the caller passes in a tick time that is
// at least one track delay past the previous advance, so frame timing is
// independent of how often the game is rendered.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::time::{has_elapsed, Millis};

/// Identifies an animation track an actor can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackId {
    Idle,
    Walk,
    Attack,
    /// Effect drawn alongside the attack pose
    Charge,
    Hit,
    Jump,
    /// Intro pose played once when a session begins
    Start,
    Fog,
}

impl TrackId {
    /// How the track behaves when it runs past its last frame
    pub fn playback(&self) -> Playback {
        match self {
            Self::Idle | Self::Walk | Self::Charge | Self::Fog => Playback::Loop,
            Self::Attack | Self::Hit | Self::Jump | Self::Start => Playback::Once,
        }
    }

    /// Get the animation name for this track
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Attack => "attack",
            Self::Charge => "charge",
            Self::Hit => "hit",
            Self::Jump => "jump",
            Self::Start => "start",
            Self::Fog => "fog",
        }
    }
}

/// Frame-advance behaviour of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    /// Wraps back to frame 0
    Loop,
    /// Keeps counting; an index past the last frame means "finished"
    Once,
}

/// Frame count and per-frame delay of a single animation clip
///
/// Only the number of frames matters here; pixel data lives with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationClip {
    /// Number of frames in the clip (0 if the asset failed to load)
    pub frame_count: usize,
    /// Milliseconds each frame stays on screen
    pub delay_ms: Millis,
}

impl AnimationClip {
    pub const fn new(frame_count: usize, delay_ms: Millis) -> Self {
        Self {
            frame_count,
            delay_ms,
        }
    }

    /// A clip with no frames; every operation on it is a no-op
    pub const fn empty() -> Self {
        Self::new(0, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count == 0
    }

    /// Time to play every frame once
    pub fn total_duration(&self) -> Millis {
        self.frame_count as Millis * self.delay_ms
    }
}

/// Cursor over one animation track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationClock {
    frame_index: usize,
    last_advance: Millis,
}

impl AnimationClock {
    pub fn new(now: Millis) -> Self {
        Self {
            frame_index: 0,
            last_advance: now,
        }
    }

    /// Current frame index (may be past the end for finished one-shot tracks)
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn last_advance(&self) -> Millis {
        self.last_advance
    }

    /// Whether a frame delay has passed since the last advance
    pub fn is_due(&self, now: Millis, delay: Millis) -> bool {
        has_elapsed(now, self.last_advance, delay)
    }

    /// Advance one frame if the delay has passed and return the new index
    ///
    /// An empty clip pins the index at 0 and never advances.
    pub fn advance(&mut self, now: Millis, clip: AnimationClip, playback: Playback) -> usize {
        self.step(now, clip, playback);
        self.frame_index
    }

    /// Advance one frame if the delay has passed; returns whether it did
    pub fn step(&mut self, now: Millis, clip: AnimationClip, playback: Playback) -> bool {
        if clip.is_empty() {
            self.frame_index = 0;
            return false;
        }
        if !self.is_due(now, clip.delay_ms) {
            return false;
        }

        self.frame_index = match playback {
            Playback::Loop => (self.frame_index + 1) % clip.frame_count,
            Playback::Once => self.frame_index + 1,
        };
        self.last_advance = now;
        true
    }

    /// Whether a one-shot track has run past its last frame
    ///
    /// An empty clip counts as finished so nothing waits on it forever.
    pub fn is_complete(&self, clip: AnimationClip) -> bool {
        self.frame_index >= clip.frame_count
    }

    /// Restart from frame 0, timing the first frame from `now`
    pub fn reset(&mut self, now: Millis) {
        self.frame_index = 0;
        self.last_advance = now;
    }

    /// Jump back to frame 0 without touching the frame timer
    pub fn rewind(&mut self) {
        self.frame_index = 0;
    }

    /// Pin the cursor on the clip's last frame
    pub fn hold_last_frame(&mut self, clip: AnimationClip) {
        self.frame_index = clip.frame_count.saturating_sub(1);
    }

    /// Frame to draw, always inside the clip; `None` for an empty clip
    pub fn display_frame(&self, clip: AnimationClip) -> Option<usize> {
        if clip.is_empty() {
            None
        } else {
            Some(self.frame_index % clip.frame_count)
        }
    }
}

/// Clips available to an actor, keyed by track
#[derive(Debug, Clone, Default)]
pub struct TrackLibrary {
    clips: HashMap<TrackId, AnimationClip>,
}

impl TrackLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a clip
    pub fn with_clip(mut self, track: TrackId, clip: AnimationClip) -> Self {
        self.clips.insert(track, clip);
        self
    }

    /// Clip for a track; unknown tracks behave like an empty clip
    pub fn clip(&self, track: TrackId) -> AnimationClip {
        self.clips
            .get(&track)
            .copied()
            .unwrap_or(AnimationClip::empty())
    }

    pub fn contains(&self, track: TrackId) -> bool {
        self.clips.contains_key(&track)
    }

    pub fn tracks(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.clips.keys().copied()
    }
}

/// Animation cursors for one actor
#[derive(Debug, Clone)]
pub struct Animator {
    library: TrackLibrary,
    cursors: HashMap<TrackId, AnimationClock>,
}

impl Animator {
    pub fn new(library: TrackLibrary, now: Millis) -> Self {
        let cursors = library
            .tracks()
            .map(|track| (track, AnimationClock::new(now)))
            .collect();
        Self { library, cursors }
    }

    pub fn library(&self) -> &TrackLibrary {
        &self.library
    }

    pub fn clip(&self, track: TrackId) -> AnimationClip {
        self.library.clip(track)
    }

    fn cursor_mut(&mut self, track: TrackId) -> &mut AnimationClock {
        self.cursors.entry(track).or_default()
    }

    /// Cursor for a track (a fresh one if the track has never played)
    pub fn cursor(&self, track: TrackId) -> AnimationClock {
        self.cursors.get(&track).copied().unwrap_or_default()
    }

    pub fn frame(&self, track: TrackId) -> usize {
        self.cursor(track).frame_index()
    }

    pub fn is_due(&self, track: TrackId, now: Millis) -> bool {
        self.cursor(track).is_due(now, self.clip(track).delay_ms)
    }

    /// Advance a track with its natural playback mode
    pub fn advance(&mut self, track: TrackId, now: Millis) -> usize {
        let clip = self.clip(track);
        self.cursor_mut(track).advance(now, clip, track.playback())
    }

    /// Loop over only the first `frames` frames of a track
    pub fn advance_within(&mut self, track: TrackId, now: Millis, frames: usize) -> usize {
        let clip = self.clip(track);
        let window = AnimationClip::new(frames.min(clip.frame_count), clip.delay_ms);
        self.cursor_mut(track).advance(now, window, Playback::Loop)
    }

    pub fn is_complete(&self, track: TrackId) -> bool {
        self.cursor(track).is_complete(self.clip(track))
    }

    pub fn reset(&mut self, track: TrackId, now: Millis) {
        self.cursor_mut(track).reset(now);
    }

    pub fn rewind(&mut self, track: TrackId) {
        self.cursor_mut(track).rewind();
    }

    pub fn hold_last_frame(&mut self, track: TrackId) {
        let clip = self.clip(track);
        self.cursor_mut(track).hold_last_frame(clip);
    }

    /// Restart every track
    pub fn reset_all(&mut self, now: Millis) {
        for cursor in self.cursors.values_mut() {
            cursor.reset(now);
        }
    }

    /// Get animation data for rendering a track
    pub fn frame_data(&self, track: TrackId) -> Option<AnimationFrameData> {
        self.cursor(track)
            .display_frame(self.clip(track))
            .map(|frame_index| AnimationFrameData { track, frame_index })
    }
}

/// Data needed to render the current animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrameData {
    pub track: TrackId,
    pub frame_index: usize,
}
