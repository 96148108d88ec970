//! The aggregate player snapshot.

use crate::advancements::AdvancementData;
use crate::items::{ItemData, PotionEffectData};
use crate::location::LocationData;
use crate::persistent::PersistentDataContainerData;
use crate::statistics::StatisticsData;
use crate::status::StatusData;
use serde::{Deserialize, Serialize};

/// A versioned capture of every syncable player-state facet at one instant.
///
/// Snapshots are the unit of storage and transport: created whole by capture
/// or decoding, immutable afterwards, and discarded once applied or stored.
/// Field order is part of the canonical wire encoding; do not reorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerSnapshot {
    /// Vitals, experience, game mode and flight state.
    pub status: StatusData,
    /// Main inventory contents.
    pub inventory: ItemData,
    /// Ender chest contents.
    pub ender_chest: ItemData,
    /// Active potion effects.
    pub potion_effects: PotionEffectData,
    /// Advancement progress, in platform-reported order.
    pub advancements: Vec<AdvancementData>,
    /// Statistic counters.
    pub statistics: StatisticsData,
    /// World position and orientation.
    pub location: LocationData,
    /// Plugin-attached persistent data tags.
    pub persistent_data_container: PersistentDataContainerData,
    /// Game version of the server that captured this snapshot.
    pub minecraft_version: String,
    /// Facet schema version this snapshot was encoded with.
    pub format_version: u32,
}

impl PlayerSnapshot {
    /// The facet schema version written by this build.
    ///
    /// Incremented whenever the facet schema changes shape. Capture stamps
    /// it; apply rejects snapshots carrying a greater value.
    pub const FORMAT_VERSION: u32 = 2;

    /// Returns true if this snapshot was encoded by a newer facet schema
    /// than this build understands.
    pub fn has_newer_format(&self) -> bool {
        self.format_version > Self::FORMAT_VERSION
    }
}
