//! Shared kinematic integration for players and projectiles
//!
//! One semi-implicit Euler step per tick: velocity is settled first (drag,
//! clamp, gravity, clamp) and the final velocity moves the position. Drag and
//! gravity are per-tick quantities and are NOT scaled by the frame delta.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Drag/gravity coefficients applied by [`Body::integrate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub friction: f32,
    pub xv_terminal: f32,
    pub gravity: f32,
    pub yv_terminal: f32,
}

impl Motion {
    /// Straight-line flight: no drag, no gravity, no speed cap
    pub const BALLISTIC: Motion = Motion {
        friction: 0.0,
        xv_terminal: f32::INFINITY,
        gravity: 0.0,
        yv_terminal: f32::INFINITY,
    };

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            friction: tuning.xv_friction,
            xv_terminal: tuning.xv_terminal,
            gravity: tuning.yv_gravity,
            yv_terminal: tuning.yv_terminal,
        }
    }
}

/// Position and velocity (units and units/ms)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Advance one tick. Input acceleration must already be in `vel`.
    pub fn integrate(&mut self, motion: &Motion, grounded: bool, delta: f32) {
        // Drag toward zero, never past it
        let sign = if self.vel.x > 0.0 { 1.0 } else { -1.0 };
        self.vel.x = sign * (self.vel.x.abs() - motion.friction).max(0.0);
        self.vel.x = clamp_magnitude(self.vel.x, motion.xv_terminal);

        if grounded {
            self.vel.y = 0.0;
        } else {
            self.vel.y += motion.gravity;
        }
        self.vel.y = clamp_magnitude(self.vel.y, motion.yv_terminal);

        self.pos += self.vel * delta;
    }
}

#[inline]
fn clamp_magnitude(value: f32, limit: f32) -> f32 {
    if value.abs() > limit {
        value.signum() * limit
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn motion() -> Motion {
        Motion::from_tuning(&Tuning::default())
    }

    #[test]
    fn test_friction_never_overshoots_zero() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(0.03, 0.0));
        body.integrate(&motion(), true, 10.0);
        assert_eq!(body.vel.x, 0.0);

        let mut body = Body::new(Vec2::ZERO, Vec2::new(-0.03, 0.0));
        body.integrate(&motion(), true, 10.0);
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn test_friction_preserves_sign() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(-0.3, 0.0));
        body.integrate(&motion(), true, 1.0);
        assert!((body.vel.x - -0.25).abs() < 1e-6);
    }

    #[test]
    fn test_horizontal_clamp_after_drag() {
        let m = motion();
        let mut body = Body::new(Vec2::ZERO, Vec2::new(5.0, 0.0));
        body.integrate(&m, true, 1.0);
        assert_eq!(body.vel.x, m.xv_terminal);

        let mut body = Body::new(Vec2::ZERO, Vec2::new(-5.0, 0.0));
        body.integrate(&m, true, 1.0);
        assert_eq!(body.vel.x, -m.xv_terminal);
    }

    #[test]
    fn test_gravity_only_when_airborne() {
        let m = motion();
        let mut body = Body::new(Vec2::ZERO, Vec2::new(0.0, 0.4));
        body.integrate(&m, true, 10.0);
        assert_eq!(body.vel.y, 0.0);
        assert_eq!(body.pos.y, 0.0);

        let mut body = Body::new(Vec2::ZERO, Vec2::ZERO);
        body.integrate(&m, false, 10.0);
        assert!((body.vel.y - m.gravity).abs() < 1e-6);
        assert!((body.pos.y - m.gravity * 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_vertical_terminal_velocity() {
        let m = Motion {
            yv_terminal: 1.0,
            ..motion()
        };
        let mut body = Body::new(Vec2::ZERO, Vec2::new(0.0, 0.99));
        body.integrate(&m, false, 1.0);
        assert_eq!(body.vel.y, 1.0);
    }

    #[test]
    fn test_integration_uses_final_velocity() {
        let m = motion();
        let mut body = Body::new(Vec2::new(100.0, 100.0), Vec2::new(0.5, 0.0));
        body.integrate(&m, false, 20.0);
        // 0.5 - 0.05 drag, gravity 0.05
        assert!((body.pos.x - (100.0 + 0.45 * 20.0)).abs() < 1e-4);
        assert!((body.pos.y - (100.0 + 0.05 * 20.0)).abs() < 1e-4);
    }

    #[test]
    fn test_ballistic_keeps_velocity() {
        let mut body = Body::new(Vec2::ZERO, Vec2::new(-1.2, 0.0));
        body.integrate(&Motion::BALLISTIC, false, 10.0);
        assert_eq!(body.vel, Vec2::new(-1.2, 0.0));
        assert!((body.pos.x - -12.0).abs() < 1e-5);
        assert_eq!(body.pos.y, 0.0);
    }
}
