//! World state and core simulation types
//!
//! The world owns the platforms, both players and every live projectile.
//! Renderers read it between ticks; only [`super::tick::tick`] mutates it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Motion;
use super::geometry::Rect;
use super::input::InputSnapshot;
use super::player::{Player, PlayerId};
use super::projectile::{Projectile, Shot};
use super::tick::{FrameTime, tick};
use crate::error::ConfigError;
use crate::settings::MatchSettings;
use crate::tuning::Tuning;

/// A static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, ConfigError> {
        Ok(Self {
            rect: Rect::try_new("platform", x, y, width, height)?,
        })
    }

    #[inline]
    pub fn bbox(&self) -> Rect {
        self.rect
    }
}

/// What killed a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Projectile { owner: PlayerId },
    FellOut,
}

/// Events raised during a tick, drained by the host (particles, sound, HUD)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    PlayerDied {
        victim: PlayerId,
        scorer: PlayerId,
        cause: DeathCause,
        /// Where the player was when it died
        at: Vec2,
    },
    ProjectileFired {
        id: u32,
        owner: PlayerId,
    },
    ProjectileExpired {
        id: u32,
        owner: PlayerId,
    },
}

/// Read-only view for renderers and debugging
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub now: f64,
    pub platforms: &'a [Platform],
    pub players: &'a [Player; 2],
    pub projectiles: &'a [Projectile],
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) tuning: Tuning,
    pub(crate) motion: Motion,
    pub(crate) projectile_size: Vec2,
    pub(crate) platforms: Vec<Platform>,
    /// Indexed by [`PlayerId::index`]
    pub(crate) players: [Player; 2],
    pub(crate) projectiles: Vec<Projectile>,
    pub(crate) events: Vec<WorldEvent>,
    /// Frame time of the last tick
    pub(crate) now: f64,
    rng: Pcg32,
    next_id: u32,
}

impl World {
    /// Build a match from validated settings
    pub fn new(settings: &MatchSettings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let platforms = settings
            .platform_rects()?
            .into_iter()
            .map(|r| Platform::new(r.x, r.y, r.width, r.height))
            .collect::<Result<Vec<_>, _>>()?;

        let tuning = settings.tuning.clone();
        let players = PlayerId::ALL.map(|id| {
            let spec = &settings.players[id.index()];
            Player::new(
                id,
                spec.name.clone(),
                spec.bindings.clone(),
                spec.size,
                spec.spawn,
                &tuning,
            )
        });

        log::info!(
            "Match ready: {}x{} arena, {} platforms, {} vs {}, seed {}",
            settings.world_width,
            settings.world_height,
            platforms.len(),
            players[0].name,
            players[1].name,
            settings.seed
        );

        Ok(Self {
            width: settings.world_width,
            height: settings.world_height,
            motion: Motion::from_tuning(&tuning),
            tuning,
            projectile_size: settings.projectile_size,
            platforms,
            players,
            projectiles: Vec::new(),
            events: Vec::new(),
            now: 0.0,
            rng: Pcg32::seed_from_u64(settings.seed),
            next_id: 1,
        })
    }

    /// Advance the match by one tick
    pub fn step(&mut self, input: &InputSnapshot, frame: FrameTime) {
        tick(self, input, frame);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Scores as (zero, infinity)
    pub fn scores(&self) -> (u32, u32) {
        (self.players[0].score, self.players[1].score)
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            now: self.now,
            platforms: &self.platforms,
            players: &self.players,
            projectiles: &self.projectiles,
        }
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Turn a player's shot into a live projectile
    pub(crate) fn spawn_projectile(&mut self, shot: &Shot) {
        let id = self.next_entity_id();
        let projectile = Projectile::new(id, shot, self.tuning.projectile_speed, self.projectile_size);
        self.events.push(WorldEvent::ProjectileFired {
            id,
            owner: shot.owner,
        });
        self.projectiles.push(projectile);
    }

    /// Credit the opponent and respawn the victim
    pub(crate) fn kill(&mut self, victim: PlayerId, cause: DeathCause) {
        let scorer = victim.opponent();
        let spawn_x = self.rng.random_range(0.0..self.width);
        let at = self.players[victim.index()].body.pos;

        self.players[scorer.index()].score += 1;
        self.players[victim.index()].die(self.now, spawn_x, &self.tuning);

        log::info!(
            "{} died ({:?}), {} scores: {} - {}",
            self.players[victim.index()].name,
            cause,
            self.players[scorer.index()].name,
            self.players[0].score,
            self.players[1].score
        );
        self.events.push(WorldEvent::PlayerDied {
            victim,
            scorer,
            cause,
            at,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_world_from_defaults() {
        let world = World::new(&MatchSettings::default()).unwrap();
        assert_eq!(world.platforms().len(), 3);
        assert_eq!(world.player(PlayerId::Zero).name, "zero");
        assert_eq!(world.player(PlayerId::Infinity).name, "infinity");
        assert!(world.projectiles().is_empty());
        assert_eq!(world.scores(), (0, 0));
        assert_eq!(world.player(PlayerId::Zero).ammo, world.tuning().ammo_max);
    }

    #[test]
    fn test_new_world_rejects_bad_settings() {
        let settings = MatchSettings {
            world_width: -1.0,
            ..Default::default()
        };
        assert!(World::new(&settings).is_err());
    }

    #[test]
    fn test_platform_rejects_negative_size() {
        assert!(Platform::new(0.0, 0.0, 10.0, -1.0).is_err());
        assert!(Platform::new(0.0, 0.0, 10.0, 1.0).is_ok());
    }

    #[test]
    fn test_kill_credits_opponent_once() {
        let mut world = World::new(&MatchSettings::default()).unwrap();
        world.now = 250.0;
        world.kill(PlayerId::Zero, DeathCause::FellOut);

        assert_eq!(world.scores(), (0, 1));
        let zero = world.player(PlayerId::Zero);
        assert_eq!(zero.death_time, Some(250.0));
        assert_eq!(zero.body.pos.y, 0.0);
        assert!(zero.body.pos.x >= 0.0 && zero.body.pos.x < world.width());

        let events = world.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            WorldEvent::PlayerDied {
                victim: PlayerId::Zero,
                scorer: PlayerId::Infinity,
                cause: DeathCause::FellOut,
                ..
            }
        ));
        assert!(world.drain_events().is_empty());
    }

    #[test]
    fn test_respawn_positions_follow_seed() {
        let settings = MatchSettings {
            seed: 1234,
            ..Default::default()
        };
        let mut a = World::new(&settings).unwrap();
        let mut b = World::new(&settings).unwrap();
        for _ in 0..3 {
            a.kill(PlayerId::Infinity, DeathCause::FellOut);
            b.kill(PlayerId::Infinity, DeathCause::FellOut);
            assert_eq!(
                a.player(PlayerId::Infinity).body.pos,
                b.player(PlayerId::Infinity).body.pos
            );
        }
    }

    #[test]
    fn test_entity_ids_wrap() {
        let mut world = World::new(&MatchSettings::default()).unwrap();
        world.next_id = u32::MAX;
        assert_eq!(world.next_entity_id(), u32::MAX);
        assert_eq!(world.next_entity_id(), 0);
        assert_eq!(world.next_entity_id(), 1);
    }

    #[test]
    fn test_custom_platforms_become_world_platforms() {
        let settings = MatchSettings {
            platforms: Some(vec![Rect::new(10.0, 500.0, 300.0, 12.0)]),
            ..Default::default()
        };
        let world = World::new(&settings).unwrap();
        assert_eq!(
            world.platforms(),
            &[Platform::new(10.0, 500.0, 300.0, 12.0).unwrap()]
        );
    }

    #[test]
    fn test_snapshot_serializes() {
        let world = World::new(&MatchSettings::default()).unwrap();
        let json = serde_json::to_string(&world.snapshot()).unwrap();
        assert!(json.contains("\"infinity\""));
    }
}
