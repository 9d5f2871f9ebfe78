// Input state for the single local player

use super::action::Action;
use std::collections::HashSet;

/// Booleans the arena consumes once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub attack_held: bool,
    /// Edge: true only on the tick after the key went down
    pub jump_pressed: bool,
}

/// Held and freshly pressed actions between two samples
#[derive(Debug, Default)]
pub struct InputState {
    /// Actions that are currently pressed
    pressed: HashSet<Action>,

    /// Actions pressed since the last `update`
    just_pressed: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was pressed since the last update
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Register an action press
    pub(crate) fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub(crate) fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Snapshot the gameplay booleans for one tick
    pub fn sample(&self) -> TickInput {
        TickInput {
            move_left: self.is_pressed(Action::MoveLeft),
            move_right: self.is_pressed(Action::MoveRight),
            // A tap shorter than one frame still starts an attack
            attack_held: self.is_pressed(Action::Attack) || self.just_pressed(Action::Attack),
            jump_pressed: self.just_pressed(Action::Jump),
        }
    }

    /// Clear edge state; call once per frame after sampling
    pub(crate) fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_just_pressed_cleared_on_update() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.update();
        assert!(input.is_pressed(Action::Jump));
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_repeated_press_is_not_a_new_edge() {
        let mut input = InputState::new();
        input.press(Action::Jump);
        input.update();
        input.press(Action::Jump);
        assert!(!input.just_pressed(Action::Jump));
    }

    #[test]
    fn test_sample() {
        let mut input = InputState::new();
        input.press(Action::MoveRight);
        input.press(Action::Attack);
        input.press(Action::Jump);
        assert_eq!(
            input.sample(),
            TickInput {
                move_left: false,
                move_right: true,
                attack_held: true,
                jump_pressed: true,
            }
        );

        input.update();
        input.release(Action::Attack);
        let tick = input.sample();
        assert!(!tick.attack_held);
        assert!(!tick.jump_pressed);
        assert!(tick.move_right);
    }

    #[test]
    fn test_tap_within_one_frame_reaches_attack() {
        let mut input = InputState::new();
        input.press(Action::Attack);
        input.release(Action::Attack);
        assert!(input.sample().attack_held);

        input.update();
        assert!(!input.sample().attack_held);
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        input.reset();
        assert_eq!(input.sample(), TickInput::default());
    }
}
