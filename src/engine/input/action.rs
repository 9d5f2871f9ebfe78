// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,

    // Combat
    Attack,

    // Meta actions
    NewGame,
    Pause,
}

impl Action {
    /// Meta actions are handled by the window loop, not the arena
    pub fn is_meta(&self) -> bool {
        matches!(self, Action::NewGame | Action::Pause)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::KeyW, Action::Jump),
        (KeyCode::Space, Action::Attack),
        (KeyCode::Enter, Action::NewGame),
        (KeyCode::KeyP, Action::Pause),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_action_is_bound() {
        let bound: HashSet<Action> = default_bindings().into_iter().map(|(_, a)| a).collect();
        for action in [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Jump,
            Action::Attack,
            Action::NewGame,
            Action::Pause,
        ] {
            assert!(bound.contains(&action), "{:?} has no key", action);
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (key, _) in default_bindings() {
            assert!(seen.insert(key), "Duplicate key found in bindings");
        }
    }

    #[test]
    fn test_meta_actions() {
        assert!(Action::Pause.is_meta());
        assert!(Action::NewGame.is_meta());
        assert!(!Action::Attack.is_meta());
    }
}
