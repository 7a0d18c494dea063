//! Simulation tick
//!
//! One call advances the whole match by one frame. Order matters:
//! players move, projectiles move and expire, then each player is resolved
//! against platforms, projectiles and the arena bounds, in that order.

use super::collision::{correct_bounds, land_on_platforms, projectile_hit};
use super::input::InputSnapshot;
use super::player::PlayerId;
use super::state::{DeathCause, World, WorldEvent};

/// Timing for a single tick, supplied by the host's frame scheduler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Monotonic clock (ms)
    pub now: f64,
    /// Time since the previous tick (ms)
    pub delta: f32,
}

impl FrameTime {
    pub fn new(now: f64, delta: f32) -> Self {
        Self { now, delta }
    }
}

/// Advance the world by one tick
pub fn tick(world: &mut World, input: &InputSnapshot, frame: FrameTime) {
    world.now = frame.now;

    // Players move independently; shots become projectiles afterwards
    let mut shots = Vec::with_capacity(2);
    for player in world.players.iter_mut() {
        if let Some(shot) = player.update(input, frame, &world.tuning, &world.motion) {
            shots.push(shot);
        }
    }
    for shot in &shots {
        world.spawn_projectile(shot);
    }

    // Projectiles, including ones fired this tick
    for projectile in world.projectiles.iter_mut() {
        projectile.update(frame.delta);
    }
    let width = world.width;
    let tuning = &world.tuning;
    let players = &mut world.players;
    let events = &mut world.events;
    world.projectiles.retain(|projectile| {
        if !projectile.exited(width) {
            return true;
        }
        players[projectile.owner.index()].refund_ammo(tuning);
        log::debug!("Projectile {} left the arena", projectile.id);
        events.push(WorldEvent::ProjectileExpired {
            id: projectile.id,
            owner: projectile.owner,
        });
        false
    });

    for id in PlayerId::ALL {
        resolve_player(world, id);
    }
}

/// Platform, projectile and boundary passes for one player.
/// A player dies at most once here, whichever hazard comes first.
fn resolve_player(world: &mut World, id: PlayerId) {
    let now = world.now;
    let player = &mut world.players[id.index()];
    let bbox = player.bbox();

    land_on_platforms(player, &bbox, &world.platforms);

    let mut died = false;
    if !player.invincible(now, &world.tuning) {
        if let Some(hit) = projectile_hit(&bbox, &world.projectiles) {
            let cause = DeathCause::Projectile { owner: hit.owner };
            world.kill(id, cause);
            died = true;
        }
    }

    let player = &mut world.players[id.index()];
    let fell_out = correct_bounds(
        player,
        world.width,
        world.height,
        world.tuning.fall_allowance,
    );
    if fell_out && !died && !player.invincible(now, &world.tuning) {
        world.kill(id, DeathCause::FellOut);
    }
}
