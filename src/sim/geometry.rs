//! Axis-aligned rectangles for bounding boxes and platforms

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An axis-aligned rectangle (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Build a rectangle from trusted dimensions
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rect size");
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from untrusted dimensions (settings files)
    pub fn try_new(
        what: &'static str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<Self, ConfigError> {
        validate_size(what, Vec2::new(width, height))?;
        if !x.is_finite() || !y.is_finite() {
            return Err(ConfigError::InvalidGeometry {
                what,
                width,
                height,
            });
        }
        Ok(Self::new(x, y, width, height))
    }

    /// Rectangle at `pos` with the given size
    #[inline]
    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Reject negative or non-finite sizes
pub fn validate_size(what: &'static str, size: Vec2) -> Result<(), ConfigError> {
    if size.is_finite() && size.x >= 0.0 && size.y >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidGeometry {
            what,
            width: size.x,
            height: size.y,
        })
    }
}

/// Closed-interval overlap test: rectangles sharing only an edge still intersect
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    !(a.right() < b.left() || a.left() > b.right() || a.bottom() < b.top() || a.top() > b.bottom())
}
