//! Zero vs Infinity - a two-player duel platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, player lifecycle)
//! - `tuning`: Data-driven physics and timing constants
//! - `settings`: Match setup (arena, players, bindings)
//! - `error`: Construction-time configuration errors
//!
//! Rendering, asset loading and keyboard wiring live outside this crate. They
//! feed an [`sim::InputSnapshot`] and a [`sim::FrameTime`] into
//! [`sim::World::step`] and read the resulting state back.

pub mod error;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::{MatchSettings, PlayerSpec};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`] and [`MatchSettings`])
pub mod consts {
    /// Horizontal acceleration per tick while a strafe key is held (units/ms)
    pub const XV_ACCELERATION: f32 = 0.085;
    /// Horizontal speed cap (units/ms)
    pub const XV_TERMINAL: f32 = 0.6;
    /// Horizontal drag applied every tick (units/ms)
    pub const XV_FRICTION: f32 = 0.05;
    /// Downward acceleration per airborne tick (units/ms)
    pub const YV_GRAVITY: f32 = 0.05;
    /// Vertical speed cap (units/ms)
    pub const YV_TERMINAL: f32 = 100.0;
    /// Upward velocity set by a jump (units/ms)
    pub const JUMP: f32 = 0.9;
    /// Jumps allowed before touching a platform again
    pub const JUMP_MAX: u8 = 2;
    /// Minimum time between jumps (ms)
    pub const JUMP_COOLDOWN: f64 = 400.0;

    /// Projectiles a player can have in flight
    pub const AMMO_MAX: u8 = 2;
    /// Minimum time between shots (ms)
    pub const SHOT_COOLDOWN: f64 = 300.0;
    /// Projectile horizontal speed (units/ms)
    pub const PROJECTILE_SPEED: f32 = 1.2;
    /// Shield charge after a respawn (ms of shielding)
    pub const SHIELD_TIME: f64 = 3000.0;
    /// Post-death immunity window (ms)
    pub const INVINCIBILITY_TIME: f64 = 2000.0;
    /// How far below the floor a player may fall before dying
    pub const FALL_ALLOWANCE: f32 = 150.0;

    /// Space left between a shooter and its fresh projectile
    pub const MUZZLE_GAP: f32 = 1.0;

    /// Platform thickness for the default arena layout
    pub const PLATFORM_THICKNESS: f32 = 10.0;

    /// Default arena size
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Default sprite sizes
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    pub const PROJECTILE_WIDTH: f32 = 12.0;
    pub const PROJECTILE_HEIGHT: f32 = 4.0;

    /// Frame pacing used by the driver (frames/s cap)
    pub const FPS_CAP: f64 = 100.0;
    pub const FPS_INTERVAL: f64 = 1000.0 / FPS_CAP;

    /// Invincible players are hidden for part of every blink period (ms)
    pub const BLINK_PERIOD: f64 = 500.0;
    pub const BLINK_HIDDEN: f64 = 150.0;
}
