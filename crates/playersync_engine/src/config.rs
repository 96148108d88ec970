//! Configuration for the sync engine.

use playersync_data::StatusFields;

/// Per-deployment toggles controlling which facets are synchronised.
///
/// All toggles default to on. The status facet is not toggled as a whole;
/// instead its sub-fields are narrowed via [`SyncConfig::status_fields`].
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Synchronise main inventories.
    pub sync_inventories: bool,
    /// Synchronise ender chests.
    pub sync_ender_chests: bool,
    /// Synchronise active potion effects.
    pub sync_potion_effects: bool,
    /// Synchronise advancement progress.
    pub sync_advancements: bool,
    /// Synchronise statistic counters.
    pub sync_statistics: bool,
    /// Synchronise world position.
    pub sync_location: bool,
    /// Synchronise persistent data containers.
    pub sync_persistent_data_container: bool,
    /// Capture the inventories of dead players instead of an empty one.
    pub save_dead_player_inventories: bool,
    /// Apply health, max health and health scale.
    pub sync_health: bool,
    /// Apply hunger, saturation and exhaustion.
    pub sync_hunger: bool,
    /// Apply experience points, level and progress.
    pub sync_experience: bool,
    /// Apply the game mode.
    pub sync_game_mode: bool,
}

impl SyncConfig {
    /// Creates a configuration with every toggle enabled.
    pub fn new() -> Self {
        Self {
            sync_inventories: true,
            sync_ender_chests: true,
            sync_potion_effects: true,
            sync_advancements: true,
            sync_statistics: true,
            sync_location: true,
            sync_persistent_data_container: true,
            save_dead_player_inventories: true,
            sync_health: true,
            sync_hunger: true,
            sync_experience: true,
            sync_game_mode: true,
        }
    }

    /// Sets whether main inventories are synchronised.
    pub fn with_inventories(mut self, enabled: bool) -> Self {
        self.sync_inventories = enabled;
        self
    }

    /// Sets whether ender chests are synchronised.
    pub fn with_ender_chests(mut self, enabled: bool) -> Self {
        self.sync_ender_chests = enabled;
        self
    }

    /// Sets whether potion effects are synchronised.
    pub fn with_potion_effects(mut self, enabled: bool) -> Self {
        self.sync_potion_effects = enabled;
        self
    }

    /// Sets whether advancements are synchronised.
    pub fn with_advancements(mut self, enabled: bool) -> Self {
        self.sync_advancements = enabled;
        self
    }

    /// Sets whether statistics are synchronised.
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.sync_statistics = enabled;
        self
    }

    /// Sets whether locations are synchronised.
    pub fn with_location(mut self, enabled: bool) -> Self {
        self.sync_location = enabled;
        self
    }

    /// Sets whether persistent data containers are synchronised.
    pub fn with_persistent_data_container(mut self, enabled: bool) -> Self {
        self.sync_persistent_data_container = enabled;
        self
    }

    /// Sets whether dead players' inventories are captured as-is.
    pub fn with_save_dead_player_inventories(mut self, enabled: bool) -> Self {
        self.save_dead_player_inventories = enabled;
        self
    }

    /// Sets whether health fields are applied.
    pub fn with_health(mut self, enabled: bool) -> Self {
        self.sync_health = enabled;
        self
    }

    /// Sets whether hunger fields are applied.
    pub fn with_hunger(mut self, enabled: bool) -> Self {
        self.sync_hunger = enabled;
        self
    }

    /// Sets whether experience fields are applied.
    pub fn with_experience(mut self, enabled: bool) -> Self {
        self.sync_experience = enabled;
        self
    }

    /// Sets whether the game mode is applied.
    pub fn with_game_mode(mut self, enabled: bool) -> Self {
        self.sync_game_mode = enabled;
        self
    }

    /// Derives the status sub-field set this configuration applies.
    ///
    /// The selected hotbar slot follows the inventory toggle and the flying
    /// flag follows the location toggle, since each is meaningless without
    /// its companion facet.
    pub fn status_fields(&self) -> StatusFields {
        let mut fields = StatusFields::empty();
        if self.sync_health {
            fields |= StatusFields::HEALTH | StatusFields::MAX_HEALTH;
        }
        if self.sync_hunger {
            fields |= StatusFields::HUNGER;
        }
        if self.sync_experience {
            fields |= StatusFields::EXPERIENCE;
        }
        if self.sync_game_mode {
            fields |= StatusFields::GAME_MODE;
        }
        if self.sync_inventories {
            fields |= StatusFields::SELECTED_ITEM_SLOT;
        }
        if self.sync_location {
            fields |= StatusFields::FLYING;
        }
        fields
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let config = SyncConfig::new();
        assert!(config.sync_inventories);
        assert!(config.save_dead_player_inventories);
        assert_eq!(config.status_fields(), StatusFields::all());
    }

    #[test]
    fn builder_chains() {
        let config = SyncConfig::new()
            .with_location(false)
            .with_statistics(false);
        assert!(!config.sync_location);
        assert!(!config.sync_statistics);
        assert!(config.sync_inventories);
    }

    #[test]
    fn status_fields_follow_companion_toggles() {
        let fields = SyncConfig::new()
            .with_inventories(false)
            .with_location(false)
            .status_fields();
        assert!(!fields.contains(StatusFields::SELECTED_ITEM_SLOT));
        assert!(!fields.contains(StatusFields::FLYING));
        assert!(fields.contains(StatusFields::HEALTH));
    }

    #[test]
    fn status_fields_can_be_emptied() {
        let fields = SyncConfig::new()
            .with_health(false)
            .with_hunger(false)
            .with_experience(false)
            .with_game_mode(false)
            .with_inventories(false)
            .with_location(false)
            .status_fields();
        assert!(fields.is_empty());
    }
}
