//! Player state and per-tick behaviour
//!
//! Lifecycle: a player is always alive. Dying teleports it to the top of the
//! arena and opens an invincibility window; the window closes on its own once
//! enough time has passed, so "invincible" is computed, never stored.

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Motion};
use super::geometry::Rect;
use super::input::{Bindings, InputSnapshot};
use super::projectile::Shot;
use super::tick::FrameTime;
use crate::consts::{BLINK_HIDDEN, BLINK_PERIOD, MUZZLE_GAP};
use crate::tuning::Tuning;

/// The two fixed combatants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Zero,
    Infinity,
}

impl PlayerId {
    /// Update and collision order
    pub const ALL: [PlayerId; 2] = [PlayerId::Zero, PlayerId::Infinity];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerId::Zero => 0,
            PlayerId::Infinity => 1,
        }
    }

    /// The player credited when this one dies
    #[inline]
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Zero => PlayerId::Infinity,
            PlayerId::Infinity => PlayerId::Zero,
        }
    }
}

/// Horizontal facing, used for aiming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// A player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub bindings: Bindings,
    /// Sprite bounding size
    pub size: Vec2,
    pub body: Body,
    pub facing: Facing,

    // === Jumping / grounding ===
    pub jump_count: u8,
    pub jump_time: Option<f64>,
    pub grounded: bool,
    /// Platform indices this player landed on during the previous tick
    pub resting: BTreeSet<usize>,

    // === Weapon and shield ===
    pub ammo: u8,
    pub last_shot: Option<f64>,
    /// Remaining shield charge (ms)
    pub shield_remaining: f64,
    pub shielded: bool,

    // === Lifecycle ===
    pub death_time: Option<f64>,
    pub score: u32,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        bindings: Bindings,
        size: Vec2,
        spawn: Vec2,
        tuning: &Tuning,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            bindings,
            size,
            body: Body::new(spawn, Vec2::ZERO),
            facing: Facing::Left,
            jump_count: 0,
            jump_time: None,
            grounded: false,
            resting: BTreeSet::new(),
            ammo: tuning.ammo_max,
            last_shot: None,
            shield_remaining: tuning.shield_time,
            shielded: false,
            death_time: None,
            score: 0,
        }
    }

    #[inline]
    pub fn bbox(&self) -> Rect {
        Rect::at(self.body.pos, self.size)
    }

    /// Inside the post-death immunity window
    pub fn invincible(&self, now: f64, tuning: &Tuning) -> bool {
        self.death_time
            .is_some_and(|t| now - t < tuning.invincibility_time)
    }

    /// Blink convention for renderers: invincible players skip some frames
    pub fn blink_hidden(&self, now: f64, tuning: &Tuning) -> bool {
        self.invincible(now, tuning) && now.rem_euclid(BLINK_PERIOD) < BLINK_HIDDEN
    }

    /// Advance one tick. Returns a shot when the player fired this tick.
    pub fn update(
        &mut self,
        input: &InputSnapshot,
        frame: FrameTime,
        tuning: &Tuning,
        motion: &Motion,
    ) -> Option<Shot> {
        let now = frame.now;

        // Strafing
        if input.is_held(self.bindings.left) {
            self.body.vel.x -= tuning.xv_acceleration;
            self.facing = Facing::Left;
        }
        if input.is_held(self.bindings.right) {
            self.body.vel.x += tuning.xv_acceleration;
            self.facing = Facing::Right;
        }

        self.body.integrate(motion, self.grounded, frame.delta);
        if self.grounded {
            self.jump_count = 0;
        }

        if input.is_held(self.bindings.up) && self.can_jump(now, tuning) {
            self.grounded = false;
            self.jump_count += 1;
            self.jump_time = Some(now);
            self.body.vel.y = -tuning.jump_impulse;
        }

        let shot = if input.is_held(self.bindings.shoot) && self.can_shoot(now, tuning) {
            Some(self.fire(now))
        } else {
            None
        };

        self.update_shield(input, frame, tuning);

        shot
    }

    fn can_jump(&self, now: f64, tuning: &Tuning) -> bool {
        self.jump_count < tuning.jump_max && cooled_down(self.jump_time, now, tuning.jump_cooldown)
    }

    fn can_shoot(&self, now: f64, tuning: &Tuning) -> bool {
        self.ammo > 0 && !self.shielded && cooled_down(self.last_shot, now, tuning.shot_cooldown)
    }

    fn fire(&mut self, now: f64) -> Shot {
        self.ammo -= 1;
        self.last_shot = Some(now);
        // Firing drops any pending invincibility bookkeeping
        self.death_time = None;

        let pos = self.body.pos;
        let muzzle_x = match self.facing {
            Facing::Left => pos.x - MUZZLE_GAP,
            Facing::Right => pos.x + self.size.x + MUZZLE_GAP,
        };
        log::debug!("{} fired ({} left)", self.name, self.ammo);
        Shot {
            owner: self.id,
            muzzle: Vec2::new(muzzle_x, pos.y + self.size.y / 2.0),
            facing: self.facing,
        }
    }

    /// The first tick of shielding is free; every following tick drains `delta`.
    fn update_shield(&mut self, input: &InputSnapshot, frame: FrameTime, tuning: &Tuning) {
        if self.shield_remaining > 0.0
            && input.is_held(self.bindings.shield)
            && !self.invincible(frame.now, tuning)
        {
            if self.shielded {
                self.shield_remaining -= f64::from(frame.delta);
            } else {
                self.shielded = true;
            }
        } else {
            self.shielded = false;
        }

        self.shield_remaining = self.shield_remaining.max(0.0);
    }

    /// Return one projectile's worth of ammo
    pub fn refund_ammo(&mut self, tuning: &Tuning) {
        debug_assert!(self.ammo < tuning.ammo_max, "ammo refund past capacity");
        if self.ammo < tuning.ammo_max {
            self.ammo += 1;
        } else {
            log::warn!("{}: ammo refund dropped, already at {}", self.name, self.ammo);
        }
    }

    /// Respawn at the top of the arena. Scoring is the caller's job.
    pub fn die(&mut self, now: f64, spawn_x: f32, tuning: &Tuning) {
        self.death_time = Some(now);
        self.body.pos = Vec2::new(spawn_x, 0.0);
        self.body.vel.y = 0.0;
        self.shield_remaining = tuning.shield_time;
    }
}

/// `None` means the action never happened, so there is nothing to wait for
#[inline]
fn cooled_down(last: Option<f64>, now: f64, cooldown: f64) -> bool {
    last.is_none_or(|t| now - t > cooldown)
}
