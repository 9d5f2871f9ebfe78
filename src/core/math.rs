// Math utilities and helper functions

use glam::{IVec2, Vec2};

/// Clamp a value between min and max
///
/// Unlike `Ord::clamp` this never panics when `min > max`; the lower bound wins.
/// An arena narrower than an actor's draw width therefore pins the actor at 0.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value > max {
        if max < min {
            min
        } else {
            max
        }
    } else if value < min {
        min
    } else {
        value
    }
}

/// Move `current` toward `target` by at most `step`, never overshooting
pub fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current > target {
        (current - step).max(target)
    } else {
        (current + step).min(target)
    }
}

/// Center of a box anchored at its top-left corner
pub fn center_of(top_left: IVec2, extent: IVec2) -> Vec2 {
    top_left.as_vec2() + extent.as_vec2() * 0.5
}

/// Fraction of `total` covered by `part`, clamped to [0, 1]
///
/// A zero `total` reads as full so a bar never divides by zero.
pub fn fill_ratio(part: u64, total: u64) -> f32 {
    if total == 0 {
        return 1.0;
    }
    (part.min(total) as f32) / (total as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(15, 0, 10), 10);
    }

    #[test]
    fn test_clamp_inverted_bounds() {
        assert_eq!(clamp(50, 0, -20), 0);
        assert_eq!(clamp(-50, 0, -20), 0);
    }

    #[test]
    fn test_approach_down_without_overshoot() {
        assert_eq!(approach(300.0, 296.0, 2.0), 298.0);
        assert_eq!(approach(297.0, 296.0, 2.0), 296.0);
    }

    #[test]
    fn test_approach_up() {
        assert_eq!(approach(10.0, 11.0, 5.0), 11.0);
    }

    #[test]
    fn test_center_of() {
        let a = center_of(IVec2::new(0, 0), IVec2::new(200, 200));
        let b = center_of(IVec2::new(300, 400), IVec2::new(200, 200));
        assert_eq!(a, Vec2::new(100.0, 100.0));
        assert_relative_eq!(a.distance(b), 500.0);
    }

    #[test]
    fn test_fill_ratio() {
        assert_relative_eq!(fill_ratio(0, 5000), 0.0);
        assert_relative_eq!(fill_ratio(2500, 5000), 0.5);
        assert_relative_eq!(fill_ratio(9000, 5000), 1.0);
        assert_relative_eq!(fill_ratio(3, 0), 1.0);
    }
}
