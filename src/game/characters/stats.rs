// Actor stats
//
// The two actors share one stats shape; what differs is the numbers.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Per-actor tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorStats {
    // Movement
    /// Horizontal pixels moved per tick while a direction is held
    pub move_speed: i32,

    // Dimensions
    /// Draw scale applied to the sprite frame size
    pub scale: f32,
    /// Source frame width in pixels
    pub frame_width: u32,
    /// Source frame height in pixels
    pub frame_height: u32,

    // Placement
    /// Spawn X (top-left anchor)
    pub spawn_x: i32,
    /// Spawn Y (top-left anchor)
    pub spawn_y: i32,

    // Combat
    /// Base health points
    pub max_health: i32,
}

/// The player character
pub const PLAYER_STATS: ActorStats = ActorStats {
    move_speed: 4,
    scale: 2.3,
    frame_width: 87,
    frame_height: 88,
    spawn_x: 200,
    spawn_y: 470,
    max_health: 100,
};

/// The bomb opponent. It never walks and is drawn as a 200x200 box.
pub const HOSTILE_STATS: ActorStats = ActorStats {
    move_speed: 0,
    scale: 2.3,
    frame_width: 87,
    frame_height: 87,
    spawn_x: 800,
    spawn_y: 470,
    max_health: 300,
};

impl Default for ActorStats {
    fn default() -> Self {
        PLAYER_STATS
    }
}

impl ActorStats {
    /// On-screen size of the actor in pixels
    pub fn draw_extent(&self) -> IVec2 {
        IVec2::new(
            (self.frame_width as f32 * self.scale) as i32,
            (self.frame_height as f32 * self.scale) as i32,
        )
    }

    /// Spawn point as a vector
    pub fn spawn(&self) -> IVec2 {
        IVec2::new(self.spawn_x, self.spawn_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = ActorStats::default();
        assert_eq!(stats.move_speed, 4);
        assert_eq!(stats.max_health, 100);
    }

    #[test]
    fn test_draw_extent_truncates() {
        assert_eq!(PLAYER_STATS.draw_extent(), IVec2::new(200, 202));
        assert_eq!(HOSTILE_STATS.draw_extent(), IVec2::new(200, 200));
    }

    #[test]
    fn test_hostile_does_not_walk() {
        assert_eq!(HOSTILE_STATS.move_speed, 0);
        assert_eq!(HOSTILE_STATS.spawn(), IVec2::new(800, 470));
    }
}
