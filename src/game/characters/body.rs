// Position, facing and extent of an actor in arena pixel space

use glam::{IVec2, Vec2};

use crate::core::math::{center_of, clamp};

/// Placement of an actor; `position` is the top-left corner of its draw box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: IVec2,
    pub extent: IVec2,
    pub facing_right: bool,
}

impl Body {
    pub fn new(position: IVec2, extent: IVec2, facing_right: bool) -> Self {
        Self {
            position,
            extent,
            facing_right,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn center(&self) -> Vec2 {
        center_of(self.position, self.extent)
    }

    /// Right-most X that keeps the whole draw box inside the arena
    pub fn max_x(&self, arena_width: i32) -> i32 {
        arena_width - self.extent.x
    }

    /// Move horizontally by `dx`, clamped to the arena
    pub fn shift_x(&mut self, dx: i32, arena_width: i32) {
        self.set_x(self.position.x + dx, arena_width);
    }

    /// Place horizontally at `x`, clamped to the arena
    pub fn set_x(&mut self, x: i32, arena_width: i32) {
        self.position.x = clamp(x, 0, self.max_x(arena_width));
    }

    /// Unit direction along X the actor is facing
    pub fn facing_sign(&self) -> i32 {
        if self.facing_right {
            1
        } else {
            -1
        }
    }
}
