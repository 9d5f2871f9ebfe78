// Input manager - turns winit keyboard events into per-tick input

use super::action::{default_bindings, Action};
use super::player::{InputState, TickInput};
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Maps keys to actions and tracks their state between ticks
pub struct InputManager {
    bindings: HashMap<KeyCode, Action>,
    state: InputState,
}

impl InputManager {
    /// Create a manager with the default key bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    pub fn with_bindings(bindings: impl IntoIterator<Item = (KeyCode, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            state: InputState::new(),
        }
    }

    /// Rebind a key, replacing whatever it did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.bindings.insert(key, action);
    }

    /// Action bound to a key, if any
    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Process a keyboard event from winit
    ///
    /// Returns a meta action (pause, new game) on a fresh press so the caller can
    /// act on it right away, even while the simulation is paused.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> Option<Action> {
        // Only process physical key presses
        match event.physical_key {
            PhysicalKey::Code(key_code) => self.process_key(key_code, event.state, event.repeat),
            _ => None,
        }
    }

    /// Apply one key transition; OS key repeats are ignored
    pub fn process_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) -> Option<Action> {
        let action = self.action_for(key)?;
        match state {
            ElementState::Pressed if !repeat => {
                self.state.press(action);
                action.is_meta().then_some(action)
            }
            ElementState::Pressed => None,
            ElementState::Released => {
                self.state.release(action);
                None
            }
        }
    }

    /// Gameplay input for the next tick
    pub fn sample(&self) -> TickInput {
        self.state.sample()
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.state.just_pressed(action)
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.state.is_pressed(action)
    }

    /// Clear edge state; call once per frame after all ticks ran
    pub fn update(&mut self) {
        self.state.update();
    }

    /// Forget held keys, e.g. after the window lost focus
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_loaded() {
        let manager = InputManager::new();
        assert_eq!(manager.action_for(KeyCode::Space), Some(Action::Attack));
        assert_eq!(manager.action_for(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyD, ElementState::Pressed, false);
        assert!(manager.sample().move_right);

        manager.process_key(KeyCode::KeyD, ElementState::Released, false);
        assert!(!manager.sample().move_right);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyW, ElementState::Pressed, false);
        assert!(manager.sample().jump_pressed);

        manager.update();
        manager.process_key(KeyCode::KeyW, ElementState::Pressed, true);
        assert!(!manager.sample().jump_pressed);
    }

    #[test]
    fn test_repeat_ignored() {
        let mut manager = InputManager::new();
        assert_eq!(manager.process_key(KeyCode::Enter, ElementState::Pressed, true), None);
        assert!(!manager.just_pressed(Action::NewGame));
    }

    #[test]
    fn test_meta_press_reported() {
        let mut manager = InputManager::new();
        assert_eq!(
            manager.process_key(KeyCode::KeyP, ElementState::Pressed, false),
            Some(Action::Pause)
        );
        assert_eq!(manager.process_key(KeyCode::KeyP, ElementState::Released, false), None);
        assert_eq!(manager.process_key(KeyCode::Space, ElementState::Pressed, false), None);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut manager = InputManager::new();
        manager.process_key(KeyCode::KeyZ, ElementState::Pressed, false);
        assert_eq!(manager.sample(), TickInput::default());
    }

    #[test]
    fn test_rebind() {
        let mut manager = InputManager::new();
        manager.bind(KeyCode::KeyJ, Action::Attack);
        manager.process_key(KeyCode::KeyJ, ElementState::Pressed, false);
        assert!(manager.sample().attack_held);
    }
}
