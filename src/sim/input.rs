//! Input snapshot and per-player key bindings
//!
//! The host collects held keys each frame and hands the simulation an
//! immutable [`InputSnapshot`]. Nothing in the simulation writes to it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Host key identifier (browser keyCode values in the default bindings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

/// Keys currently held down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    held: HashSet<KeyCode>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            held: keys.into_iter().collect(),
        }
    }

    /// Record a key-down event
    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    /// Record a key-up event
    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    #[inline]
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }
}

/// One player's controls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    /// Bound for completeness; movement ignores it
    pub down: KeyCode,
    pub shoot: KeyCode,
    pub shield: KeyCode,
}

impl Bindings {
    /// W/A/S/D, shoot on `1`, shield on `2`
    pub fn zero_default() -> Self {
        Self {
            left: KeyCode(65),
            right: KeyCode(68),
            up: KeyCode(87),
            down: KeyCode(83),
            shoot: KeyCode(49),
            shield: KeyCode(50),
        }
    }

    /// Arrow keys, shoot on `\`, shield on `Enter`
    pub fn infinity_default() -> Self {
        Self {
            left: KeyCode(37),
            right: KeyCode(39),
            up: KeyCode(38),
            down: KeyCode(40),
            shoot: KeyCode(220),
            shield: KeyCode(13),
        }
    }

    pub fn keys(&self) -> [KeyCode; 6] {
        [
            self.left,
            self.right,
            self.up,
            self.down,
            self.shoot,
            self.shield,
        ]
    }

    /// Every action needs its own key
    pub fn validate(&self, player: &str) -> Result<(), ConfigError> {
        let keys = self.keys();
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].contains(key) {
                return Err(ConfigError::DuplicateBinding {
                    key: key.0,
                    player: player.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputSnapshot::new();
        assert!(!input.is_held(KeyCode(65)));
        input.press(KeyCode(65));
        assert!(input.is_held(KeyCode(65)));
        assert!(!input.is_held(KeyCode(68)));
        input.release(KeyCode(65));
        assert!(!input.is_held(KeyCode(65)));
    }

    #[test]
    fn test_default_bindings_valid_and_disjoint() {
        let zero = Bindings::zero_default();
        let infinity = Bindings::infinity_default();
        assert!(zero.validate("zero").is_ok());
        assert!(infinity.validate("infinity").is_ok());
        assert!(zero.keys().iter().all(|k| !infinity.keys().contains(k)));
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let bindings = Bindings {
            shield: KeyCode(65),
            ..Bindings::zero_default()
        };
        assert!(matches!(
            bindings.validate("zero"),
            Err(ConfigError::DuplicateBinding { key: 65, .. })
        ));
    }
}
