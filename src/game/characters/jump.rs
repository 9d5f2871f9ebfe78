// Player hop: a short backward bounce driven by the jump track

use glam::IVec2;

use crate::core::time::{has_elapsed, Millis};
use crate::game::settings::JumpSettings;

use super::animation::{Animator, TrackId};
use super::body::Body;

#[derive(Debug, Clone)]
pub struct JumpMotion {
    settings: JumpSettings,
    active: bool,
    origin: IVec2,
    /// Cooldown anchor, stamped when a jump lands
    last_jump_at: Option<Millis>,
}

impl JumpMotion {
    pub fn new(settings: JumpSettings) -> Self {
        Self {
            settings,
            active: false,
            origin: IVec2::ZERO,
            last_jump_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn can_jump(&self, now: Millis) -> bool {
        !self.active
            && self
                .last_jump_at
                .map_or(true, |last| has_elapsed(now, last, self.settings.cooldown_ms))
    }

    /// Begin a hop from the current position; returns whether it started
    pub fn start(&mut self, now: Millis, body: &Body, animator: &mut Animator) -> bool {
        if !self.can_jump(now) {
            return false;
        }
        self.active = true;
        self.origin = body.position;
        animator.reset(TrackId::Jump, now);
        true
    }

    /// Offset from the origin at jump frame `frame`, before facing is applied
    pub fn offset_at(&self, frame: usize) -> IVec2 {
        let frame = frame as i32;
        IVec2::new(
            -self.settings.bounce_back + frame * self.settings.bounce_back_step,
            -self.settings.bounce_up + frame * self.settings.bounce_up_step,
        )
    }

    /// Advance the hop; returns whether the player is still airborne
    pub fn update(&mut self, now: Millis, body: &mut Body, animator: &mut Animator, arena_width: i32) -> bool {
        if !self.active {
            return false;
        }

        if animator.is_due(TrackId::Jump, now) {
            animator.advance(TrackId::Jump, now);
        }

        if animator.is_complete(TrackId::Jump) {
            self.land(now, body, animator);
            return false;
        }

        let frame = animator.frame(TrackId::Jump);
        if frame > 0 {
            let offset = self.offset_at(frame);
            // Negative X offset means "behind" the player
            body.set_x(self.origin.x + offset.x * body.facing_sign(), arena_width);
            body.position.y = self.origin.y + offset.y;
        }
        true
    }

    fn land(&mut self, now: Millis, body: &mut Body, animator: &mut Animator) {
        self.active = false;
        self.last_jump_at = Some(now);
        body.position.y = self.origin.y;
        animator.rewind(TrackId::Jump);
    }

    /// Cancel any hop and forget the cooldown (new game)
    pub fn reset(&mut self) {
        self.active = false;
        self.last_jump_at = None;
    }
}
