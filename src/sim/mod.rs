//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in through [`FrameTime`], never from a system clock
//! - Seeded RNG only
//! - Stable iteration order (Zero before Infinity, projectiles by spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod geometry;
pub mod input;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;

pub use body::{Body, Motion};
pub use collision::{correct_bounds, land_on_platforms, projectile_hit};
pub use geometry::{Rect, intersects};
pub use input::{Bindings, InputSnapshot, KeyCode};
pub use player::{Facing, Player, PlayerId};
pub use projectile::{Projectile, Shot};
pub use state::{DeathCause, Platform, Snapshot, World, WorldEvent};
pub use tick::{FrameTime, tick};
