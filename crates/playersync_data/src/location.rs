//! Player world position.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The dimension kind a world belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorldEnvironment {
    /// The overworld.
    Normal,
    /// The nether.
    Nether,
    /// The end.
    TheEnd,
    /// A custom, data-pack defined dimension.
    Custom,
}

/// A player's position and orientation within a world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationData {
    /// Name of the world the player is in.
    pub world_name: String,
    /// Unique id of the world, stable across renames.
    pub world_uuid: Uuid,
    /// The world's dimension kind.
    pub world_environment: WorldEnvironment,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
    /// Horizontal facing, in degrees.
    pub yaw: f32,
    /// Vertical facing, in degrees.
    pub pitch: f32,
}
