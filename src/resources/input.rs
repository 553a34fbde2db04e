//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the demo cares about: four held
//! arrow directions for movement, plus the printable-character stream,
//! backspace and submit used by the dialogue input bubble. Systems read this
//! resource instead of the hardware, so tests can script input directly.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame input relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    // Held arrow keys, level-triggered.
    pub dir_up: BoolState,
    pub dir_down: BoolState,
    pub dir_left: BoolState,
    pub dir_right: BoolState,
    /// Submit the dialogue input buffer (Enter).
    pub submit: BoolState,
    /// Remove the last character of the input buffer (Backspace).
    pub backspace: BoolState,
    /// Printable characters typed this frame, in order. Drained by the
    /// dialogue system only while it is capturing text.
    pub typed: Vec<char>,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            dir_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            dir_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            dir_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            dir_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            submit: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            backspace: BoolState::bound_to(KeyboardKey::KEY_BACKSPACE),
            typed: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_inactive() {
        let input = InputState::default();
        assert!(!input.dir_up.active);
        assert!(!input.dir_down.active);
        assert!(!input.dir_left.active);
        assert!(!input.dir_right.active);
        assert!(!input.submit.just_pressed);
        assert!(!input.backspace.just_pressed);
        assert!(input.typed.is_empty());
    }

    #[test]
    fn default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.dir_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.dir_down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.dir_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.dir_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.submit.key_binding, KeyboardKey::KEY_ENTER);
        assert_eq!(input.backspace.key_binding, KeyboardKey::KEY_BACKSPACE);
    }
}
