//! Physics and timing constants
//!
//! Data-driven so a match can be re-balanced from a JSON file without a
//! rebuild. Velocities are in units/ms, durations in ms.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    pub xv_acceleration: f32,
    pub xv_terminal: f32,
    pub xv_friction: f32,
    pub yv_gravity: f32,
    pub yv_terminal: f32,

    // === Jumping ===
    /// Upward velocity set by a jump
    pub jump_impulse: f32,
    pub jump_max: u8,
    pub jump_cooldown: f64,

    // === Combat ===
    pub ammo_max: u8,
    pub shot_cooldown: f64,
    pub projectile_speed: f32,
    pub shield_time: f64,
    pub invincibility_time: f64,

    // === Arena ===
    /// Extra depth below the floor before a fall counts as a death
    pub fall_allowance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            xv_acceleration: XV_ACCELERATION,
            xv_terminal: XV_TERMINAL,
            xv_friction: XV_FRICTION,
            yv_gravity: YV_GRAVITY,
            yv_terminal: YV_TERMINAL,

            jump_impulse: JUMP,
            jump_max: JUMP_MAX,
            jump_cooldown: JUMP_COOLDOWN,

            ammo_max: AMMO_MAX,
            shot_cooldown: SHOT_COOLDOWN,
            projectile_speed: PROJECTILE_SPEED,
            shield_time: SHIELD_TIME,
            invincibility_time: INVINCIBILITY_TIME,

            fall_allowance: FALL_ALLOWANCE,
        }
    }
}

impl Tuning {
    /// Reject values that would break the velocity or counter invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("xv_acceleration", self.xv_acceleration)?;
        non_negative("xv_terminal", self.xv_terminal)?;
        non_negative("xv_friction", self.xv_friction)?;
        non_negative("yv_gravity", self.yv_gravity)?;
        non_negative("yv_terminal", self.yv_terminal)?;
        non_negative("jump_impulse", self.jump_impulse)?;
        non_negative("projectile_speed", self.projectile_speed)?;
        non_negative("fall_allowance", self.fall_allowance)?;

        // A jump writes its impulse after the clamp, so it must already be in range
        if self.jump_impulse > self.yv_terminal {
            return Err(ConfigError::InvalidTuning("jump_impulse"));
        }

        for (name, value) in [
            ("jump_cooldown", self.jump_cooldown),
            ("shot_cooldown", self.shot_cooldown),
            ("shield_time", self.shield_time),
            ("invincibility_time", self.invincibility_time),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTuning(name));
            }
        }

        Ok(())
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidTuning(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning =
            serde_json::from_str(r#"{ "jump_max": 3, "shield_time": 1500.0 }"#).unwrap();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.jump_max, 3);
        assert_eq!(tuning.shield_time, 1500.0);
        assert_eq!(tuning.xv_terminal, XV_TERMINAL);
    }

    #[test]
    fn test_rejects_negative_values() {
        let tuning = Tuning {
            xv_friction: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning("xv_friction"))
        ));

        let tuning = Tuning {
            invincibility_time: f64::NAN,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_jump_above_terminal() {
        let tuning = Tuning {
            jump_impulse: 2.0,
            yv_terminal: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::InvalidTuning("jump_impulse"))
        ));
    }

    #[test]
    fn test_nested_tuning_is_validated_with_settings() {
        let json = r#"{ "tuning": { "xv_terminal": -1.0 } }"#;
        assert!(matches!(
            crate::MatchSettings::from_json(json),
            Err(ConfigError::InvalidTuning("xv_terminal"))
        ));
    }
}
