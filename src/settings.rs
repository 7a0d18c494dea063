//! Match setup
//!
//! Everything fixed for the lifetime of a [`crate::sim::World`]: arena size,
//! platform layout, player identities and controls, sprite sizes, RNG seed.
//! Loaded from JSON or taken from defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::geometry::{Rect, validate_size};
use crate::sim::input::Bindings;
use crate::tuning::Tuning;

/// Identity, controls and sprite size of one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub bindings: Bindings,
    /// Sprite bounding size
    pub size: Vec2,
    /// Top-left corner at match start
    pub spawn: Vec2,
}

/// Match settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Seed for respawn positions
    pub seed: u64,
    pub world_width: f32,
    pub world_height: f32,
    /// Platform layout; `None` uses the standard three-platform arena
    pub platforms: Option<Vec<Rect>>,
    /// Zero first, Infinity second
    pub players: [PlayerSpec; 2],
    pub projectile_size: Vec2,
    pub tuning: Tuning,
}

impl Default for MatchSettings {
    fn default() -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            seed: 0,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            platforms: None,
            players: [
                PlayerSpec {
                    name: "zero".to_string(),
                    bindings: Bindings::zero_default(),
                    size,
                    spawn: Vec2::new(100.0, 100.0),
                },
                PlayerSpec {
                    name: "infinity".to_string(),
                    bindings: Bindings::infinity_default(),
                    size,
                    spawn: Vec2::new(100.0, 100.0),
                },
            ],
            projectile_size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            tuning: Tuning::default(),
        }
    }
}

impl MatchSettings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: MatchSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded match settings from {}", path.as_ref().display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Platform rectangles for this match, validated
    pub fn platform_rects(&self) -> Result<Vec<Rect>, ConfigError> {
        match &self.platforms {
            Some(rects) => rects
                .iter()
                .map(|r| Rect::try_new("platform", r.x, r.y, r.width, r.height))
                .collect(),
            None => Ok(default_platforms(self.world_width, self.world_height)),
        }
    }

    /// Fail fast on anything the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        validate_size("world", Vec2::new(self.world_width, self.world_height))?;
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            return Err(ConfigError::InvalidGeometry {
                what: "world",
                width: self.world_width,
                height: self.world_height,
            });
        }
        validate_size("projectile", self.projectile_size)?;
        self.platform_rects()?;

        for spec in &self.players {
            if spec.name.trim().is_empty() {
                return Err(ConfigError::EmptyName);
            }
            spec.bindings.validate(&spec.name)?;
            validate_size("player", spec.size)?;
            if spec.size.x > self.world_width || !spec.spawn.is_finite() {
                return Err(ConfigError::InvalidGeometry {
                    what: "player",
                    width: spec.size.x,
                    height: spec.size.y,
                });
            }
        }

        // Both players read the same snapshot, so a shared key drives both
        let [zero, infinity] = &self.players;
        if let Some(key) = zero
            .bindings
            .keys()
            .into_iter()
            .find(|k| infinity.bindings.keys().contains(k))
        {
            return Err(ConfigError::DuplicateBinding {
                key: key.0,
                player: infinity.name.clone(),
            });
        }

        Ok(())
    }
}

/// One wide central platform with two smaller ledges above it
pub fn default_platforms(width: f32, height: f32) -> Vec<Rect> {
    vec![
        Rect::new((width - 400.0) / 2.0, height * 13.0 / 20.0, 400.0, PLATFORM_THICKNESS),
        Rect::new((width - 650.0) / 2.0, height * 9.0 / 20.0, 150.0, PLATFORM_THICKNESS),
        Rect::new((width + 350.0) / 2.0, height * 9.0 / 20.0, 150.0, PLATFORM_THICKNESS),
    ]
}
