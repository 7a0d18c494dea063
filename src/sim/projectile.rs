//! Projectiles: straight-flying hazards credited to the player who fired them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Motion};
use super::geometry::Rect;
use super::player::{Facing, PlayerId};

/// A request to spawn a projectile, produced by a player's update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub owner: PlayerId,
    /// Centre of the shooter's leading edge
    pub muzzle: Vec2,
    pub facing: Facing,
}

/// A live projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub body: Body,
    pub size: Vec2,
    /// Credited with the ammo refund when this projectile leaves the arena
    pub owner: PlayerId,
}

impl Projectile {
    /// Place the projectile just outside the muzzle, vertically centred on it
    pub fn new(id: u32, shot: &Shot, speed: f32, size: Vec2) -> Self {
        let x = match shot.facing {
            Facing::Left => shot.muzzle.x - size.x,
            Facing::Right => shot.muzzle.x,
        };
        let pos = Vec2::new(x, shot.muzzle.y - size.y / 2.0);
        Self {
            id,
            body: Body::new(pos, Vec2::new(shot.facing.sign() * speed, 0.0)),
            size,
            owner: shot.owner,
        }
    }

    pub fn update(&mut self, delta: f32) {
        self.body.integrate(&Motion::BALLISTIC, false, delta);
    }

    #[inline]
    pub fn bbox(&self) -> Rect {
        Rect::at(self.body.pos, self.size)
    }

    /// Fully past either side wall
    pub fn exited(&self, world_width: f32) -> bool {
        let pos = self.body.pos;
        pos.x + self.size.x < 0.0 || pos.x > world_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot(x: f32, facing: Facing) -> Shot {
        Shot {
            owner: PlayerId::Zero,
            muzzle: Vec2::new(x, 100.0),
            facing,
        }
    }

    #[test]
    fn test_spawns_outside_muzzle() {
        let size = Vec2::new(10.0, 4.0);
        let left = Projectile::new(1, &shot(100.0, Facing::Left), 1.0, size);
        assert_eq!(left.body.pos, Vec2::new(90.0, 98.0));
        let right = Projectile::new(2, &shot(100.0, Facing::Right), 1.0, size);
        assert_eq!(right.body.pos, Vec2::new(100.0, 98.0));
        assert_eq!(right.owner, PlayerId::Zero);
    }

    #[test]
    fn test_flies_straight_in_facing_direction() {
        let mut p = Projectile::new(1, &shot(100.0, Facing::Left), 1.0, Vec2::new(10.0, 4.0));
        for _ in 0..5 {
            p.update(10.0);
        }
        assert!((p.body.pos.x - 40.0).abs() < 1e-4);
        assert_eq!(p.body.pos.y, 98.0);
        assert_eq!(p.body.vel, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_exit_requires_whole_box_outside() {
        let size = Vec2::new(10.0, 4.0);
        let mut p = Projectile::new(1, &shot(12.0, Facing::Left), 1.0, size);
        assert_eq!(p.body.pos.x, 2.0);
        p.update(10.0);
        // x = -8, right edge at 2
        assert!(!p.exited(800.0));
        p.update(10.0);
        assert!(p.exited(800.0));

        let p = Projectile::new(2, &shot(800.0, Facing::Right), 1.0, size);
        assert!(!p.exited(800.0));
        let p = Projectile::new(3, &shot(800.5, Facing::Right), 1.0, size);
        assert!(p.exited(800.0));
    }
}
