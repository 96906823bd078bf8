//! Keyboard state read by the control mapper

use serde::{Deserialize, Serialize};

/// Logical keys the toy reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Jump,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value. Letter and arrow bindings both work.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "a" | "ArrowLeft" => Some(Key::Left),
            "d" | "ArrowRight" => Some(Key::Right),
            "w" | "ArrowUp" => Some(Key::Jump),
            _ => None,
        }
    }
}

/// Held direction keys, sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left_held: bool,
    pub right_held: bool,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = true,
            Key::Right => self.right_held = true,
            Key::Jump => {}
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
            Key::Jump => {}
        }
    }

    /// Direction the held keys point in: +1 right, -1 left, 0 none.
    /// Right wins when both are held.
    pub fn direction(&self) -> f64 {
        if self.right_held {
            1.0
        } else if self.left_held {
            -1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_bindings_map() {
        assert_eq!(Key::from_key_name("a"), Some(Key::Left));
        assert_eq!(Key::from_key_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_key_name("d"), Some(Key::Right));
        assert_eq!(Key::from_key_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_key_name("w"), Some(Key::Jump));
        assert_eq!(Key::from_key_name("ArrowUp"), Some(Key::Jump));
        assert_eq!(Key::from_key_name("s"), None);
        assert_eq!(Key::from_key_name("A"), None);
    }

    #[test]
    fn test_press_release() {
        let mut input = InputState::default();
        input.press(Key::Left);
        assert!(input.left_held);
        assert_eq!(input.direction(), -1.0);

        input.press(Key::Right);
        assert_eq!(input.direction(), 1.0);

        input.release(Key::Right);
        input.release(Key::Left);
        assert_eq!(input, InputState::default());
        assert_eq!(input.direction(), 0.0);
    }

    #[test]
    fn test_jump_is_not_held() {
        let mut input = InputState::default();
        input.press(Key::Jump);
        assert_eq!(input, InputState::default());
    }
}
