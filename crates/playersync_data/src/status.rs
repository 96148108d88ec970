//! Player status: vitals, experience, game mode and flight state.

use serde::{Deserialize, Serialize};

/// A player's game mode.
///
/// Serialized by symbolic name so snapshots written by newer servers with
/// additional modes stay human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMode {
    /// Standard survival play.
    Survival,
    /// Creative building mode.
    Creative,
    /// Adventure mode (restricted block interaction).
    Adventure,
    /// Free-flying observer mode.
    Spectator,
}

/// Vitals and progression state of a player.
///
/// Field order is part of the canonical wire encoding; do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusData {
    /// Current health points.
    pub health: f64,
    /// Maximum health points, including attribute modifiers.
    pub max_health: f64,
    /// Client-side health bar scale; `0.0` means unscaled.
    pub health_scale: f64,
    /// Food level.
    pub hunger: i32,
    /// Saturation level.
    pub saturation: f32,
    /// Saturation exhaustion accumulator.
    pub saturation_exhaustion: f32,
    /// Selected hotbar slot index.
    pub selected_item_slot: i32,
    /// Total accumulated experience points.
    pub total_experience: i32,
    /// Current experience level.
    pub experience_level: i32,
    /// Progress towards the next level, in `0.0..=1.0`.
    pub experience_progress: f32,
    /// Active game mode.
    pub game_mode: GameMode,
    /// Whether the player is currently flying.
    pub is_flying: bool,
}

bitflags::bitflags! {
    /// Selects which [`StatusData`] sub-fields are written when status is
    /// applied to a live player.
    ///
    /// Status itself is always applied; these flags narrow it to the
    /// sub-fields the deployment wants synchronised.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StatusFields: u32 {
        /// Write health.
        const HEALTH = 1 << 0;
        /// Write max health and health scale.
        const MAX_HEALTH = 1 << 1;
        /// Write hunger, saturation and exhaustion.
        const HUNGER = 1 << 2;
        /// Write total experience, level and progress.
        const EXPERIENCE = 1 << 3;
        /// Write the game mode.
        const GAME_MODE = 1 << 4;
        /// Write the flying flag.
        const FLYING = 1 << 5;
        /// Write the selected hotbar slot.
        const SELECTED_ITEM_SLOT = 1 << 6;
    }
}
