// Horizontal movement and the idle/walk tracks

use crate::core::time::Millis;
use crate::game::events::{EventQueue, SoundCue};

use super::animation::{Animator, TrackId};
use super::body::Body;
use super::state::ActorState;

/// Directions held this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };

    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    pub fn is_moving(&self) -> bool {
        self.left || self.right
    }
}

/// Walks an actor around the arena
#[derive(Debug, Clone)]
pub struct Locomotion {
    speed: i32,
    /// Whether a direction press turns the actor around
    turns_to_face: bool,
    /// Whether walking plays footsteps
    has_footsteps: bool,
    footsteps_playing: bool,
}

impl Locomotion {
    pub fn new(speed: i32, turns_to_face: bool, has_footsteps: bool) -> Self {
        Self {
            speed,
            turns_to_face,
            has_footsteps,
            footsteps_playing: false,
        }
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn footsteps_playing(&self) -> bool {
        self.footsteps_playing
    }

    /// Apply one tick of movement and advance the idle or walk track
    ///
    /// Returns `Moving` when any direction is held, `Idle` otherwise. Holding
    /// both directions walks in place.
    pub fn update(
        &mut self,
        now: Millis,
        intent: MoveIntent,
        body: &mut Body,
        animator: &mut Animator,
        arena_width: i32,
        events: &mut EventQueue,
    ) -> ActorState {
        if self.turns_to_face {
            match (intent.left, intent.right) {
                (true, false) => body.facing_right = false,
                (false, true) => body.facing_right = true,
                _ => {}
            }
        }

        if intent.left {
            body.shift_x(-self.speed, arena_width);
        }
        if intent.right {
            body.shift_x(self.speed, arena_width);
        }

        if intent.is_moving() {
            self.start_footsteps(events);
            animator.advance(TrackId::Walk, now);
            ActorState::Moving
        } else {
            self.stop_footsteps(events);
            animator.advance(TrackId::Idle, now);
            ActorState::Idle
        }
    }

    /// Silence footsteps when something else takes over the actor
    pub fn halt(&mut self, events: &mut EventQueue) {
        self.stop_footsteps(events);
    }

    fn start_footsteps(&mut self, events: &mut EventQueue) {
        if self.has_footsteps && !self.footsteps_playing {
            self.footsteps_playing = true;
            events.sound(SoundCue::FootstepsStart);
        }
    }

    fn stop_footsteps(&mut self, events: &mut EventQueue) {
        if self.footsteps_playing {
            self.footsteps_playing = false;
            events.sound(SoundCue::FootstepsStop);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::animation::{AnimationClip, TrackLibrary};
    use crate::game::events::GameEvent;
    use glam::IVec2;

    const ARENA_WIDTH: i32 = 1280;

    fn setup(x: i32) -> (Locomotion, Body, Animator, EventQueue) {
        let library = TrackLibrary::new()
            .with_clip(TrackId::Idle, AnimationClip::new(6, 120))
            .with_clip(TrackId::Walk, AnimationClip::new(6, 80));
        (
            Locomotion::new(4, true, true),
            Body::new(IVec2::new(x, 470), IVec2::new(200, 202), true),
            Animator::new(library, 0),
            EventQueue::new(),
        )
    }

    #[test]
    fn test_walk_right() {
        let (mut loco, mut body, mut animator, mut events) = setup(100);
        let state = loco.update(16, MoveIntent::new(false, true), &mut body, &mut animator, ARENA_WIDTH, &mut events);
        assert_eq!(state, ActorState::Moving);
        assert_eq!(body.x(), 104);
        assert!(body.facing_right);
        assert!(events.contains(GameEvent::Sound(SoundCue::FootstepsStart)));
    }

    #[test]
    fn test_walk_left_turns_around() {
        let (mut loco, mut body, mut animator, mut events) = setup(100);
        loco.update(16, MoveIntent::new(true, false), &mut body, &mut animator, ARENA_WIDTH, &mut events);
        assert_eq!(body.x(), 96);
        assert!(!body.facing_right);
    }

    #[test]
    fn test_left_edge_clamp() {
        let (mut loco, mut body, mut animator, mut events) = setup(0);
        loco.update(16, MoveIntent::new(true, false), &mut body, &mut animator, ARENA_WIDTH, &mut events);
        assert_eq!(body.x(), 0);
    }

    #[test]
    fn test_right_edge_clamp() {
        let (mut loco, mut body, mut animator, mut events) = setup(ARENA_WIDTH - 200);
        loco.update(16, MoveIntent::new(false, true), &mut body, &mut animator, ARENA_WIDTH, &mut events);
        assert_eq!(body.x(), ARENA_WIDTH - 200);
    }

    #[test]
    fn test_both_directions_walk_in_place() {
        let (mut loco, mut body, mut animator, mut events) = setup(100);
        let state = loco.update(16, MoveIntent::new(true, true), &mut body, &mut animator, ARENA_WIDTH, &mut events);
        assert_eq!(state, ActorState::Moving);
        assert_eq!(body.x(), 100);
        assert!(body.facing_right);
    }

    #[test]
    fn test_idle_advances_idle_track_only() {
        let (mut loco, mut body, mut animator, mut events) = setup(100);
        let state = loco.update(120, MoveIntent::NONE, &mut body, &mut animator, ARENA_WIDTH, &mut events);
        assert_eq!(state, ActorState::Idle);
        assert_eq!(animator.frame(TrackId::Idle), 1);
        assert_eq!(animator.frame(TrackId::Walk), 0);
    }

    #[test]
    fn test_footsteps_stop_once() {
        let (mut loco, mut body, mut animator, mut events) = setup(100);
        loco.update(16, MoveIntent::new(false, true), &mut body, &mut animator, ARENA_WIDTH, &mut events);
        loco.update(32, MoveIntent::NONE, &mut body, &mut animator, ARENA_WIDTH, &mut events);
        loco.update(48, MoveIntent::NONE, &mut body, &mut animator, ARENA_WIDTH, &mut events);
        let stops = events
            .iter()
            .filter(|e| **e == GameEvent::Sound(SoundCue::FootstepsStop))
            .count();
        assert_eq!(stops, 1);
    }

    #[test]
    fn test_fixed_facing_actor_never_turns() {
        let (_, mut body, mut animator, mut events) = setup(100);
        body.facing_right = false;
        let mut loco = Locomotion::new(0, false, false);
        loco.update(16, MoveIntent::new(false, true), &mut body, &mut animator, ARENA_WIDTH, &mut events);
        assert!(!body.facing_right);
        assert!(events.is_empty());
    }
}
