//! Collision resolution for players
//!
//! Three passes run per player after everything has moved: platform landing,
//! projectile hits, then arena bounds. All of them test the same bounding box,
//! taken once before the platform pass.

use super::geometry::{Rect, intersects};
use super::player::Player;
use super::projectile::Projectile;
use super::state::Platform;

/// Land a falling player on platforms it has newly reached.
///
/// A platform only catches a player moving downward that was not already
/// resting on it last tick. Any other outcome forgets that platform, so a
/// player standing still loses `grounded` for one tick and lands again on the
/// next one after gravity pulls it back into the surface.
pub fn land_on_platforms(player: &mut Player, bbox: &Rect, platforms: &[Platform]) {
    player.grounded = false;

    for (i, platform) in platforms.iter().enumerate() {
        let falling = player.body.vel.y > 0.0;
        if falling && intersects(bbox, &platform.bbox()) && !player.resting.contains(&i) {
            player.body.pos.y = platform.rect.top() - player.size.y;
            player.body.vel.y = 0.0;
            player.grounded = true;
            player.jump_count = 0;
            player.resting.insert(i);
        } else {
            player.resting.remove(&i);
        }
    }
}

/// First live projectile overlapping `bbox`, in list order
pub fn projectile_hit<'a>(bbox: &Rect, projectiles: &'a [Projectile]) -> Option<&'a Projectile> {
    projectiles.iter().find(|p| intersects(bbox, &p.bbox()))
}

/// Keep a player between the side walls and below the ceiling.
///
/// Returns true when the player has dropped further than `fall_allowance`
/// below the floor; the caller decides whether that is a death.
pub fn correct_bounds(player: &mut Player, width: f32, height: f32, fall_allowance: f32) -> bool {
    let size = player.size;
    let pos = &mut player.body.pos;

    if pos.x < 0.0 {
        pos.x = 0.0;
    } else if pos.x + size.x > width {
        pos.x = width - size.x;
    }

    if pos.y < 0.0 {
        pos.y = 0.0;
        false
    } else {
        pos.y + size.y > height + fall_allowance
    }
}
