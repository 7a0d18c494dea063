//! Construction-time errors
//!
//! The simulation itself never fails once built; everything here is raised
//! while turning settings into a [`crate::sim::World`].

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid geometry for {what}: {width}x{height}")]
    InvalidGeometry {
        what: &'static str,
        width: f32,
        height: f32,
    },

    #[error("Invalid tuning value for {0}")]
    InvalidTuning(&'static str),

    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Key {key} is bound more than once ({player})")]
    DuplicateBinding { key: u32, player: String },

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}
