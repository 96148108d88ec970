//! Snapshot capture and apply orchestration.

use crate::config::SyncConfig;
use crate::error::{FacetError, FacetResult};
use crate::handle::PlayerHandle;
use crate::hook::{NoopHook, PreSyncHook};
use futures_util::future::{join_all, BoxFuture};
use playersync_data::{ItemData, MinecraftVersion, PlayerSnapshot};
use std::sync::Arc;
use tracing::{debug, error};

/// Captures snapshots from and applies snapshots to live players.
///
/// Both operations fan out one asynchronous unit per facet and join on all
/// of them; the join waits for every unit to settle before reporting, so a
/// completed call is a happens-before boundary for the next sync cycle of
/// that player. No retry is attempted and no timeout is enforced: a stalled
/// facet accessor stalls the whole join.
pub struct Synchronizer<H: PreSyncHook = NoopHook> {
    config: SyncConfig,
    hook: Arc<H>,
}

impl Synchronizer<NoopHook> {
    /// Creates a synchronizer with no pre-sync hook.
    pub fn new(config: SyncConfig) -> Self {
        Self::with_hook(config, NoopHook)
    }
}

impl<H: PreSyncHook> Synchronizer<H> {
    /// Creates a synchronizer firing `hook` before every apply.
    pub fn with_hook(config: SyncConfig, hook: H) -> Self {
        Self {
            config,
            hook: Arc::new(hook),
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Reads every facet from `player` into a fresh snapshot.
    ///
    /// All facets are read concurrently. If any read fails the whole
    /// capture yields `None` — never a partially populated snapshot — and
    /// the failure is logged with the player identity. Callers must treat
    /// `None` as "could not sync this cycle", not "player has no data".
    pub async fn capture(&self, player: &dyn PlayerHandle) -> Option<PlayerSnapshot> {
        let inventory = async {
            if player.is_dead() && !self.config.save_dead_player_inventories {
                // The death screen may already have dropped the live items.
                Ok(ItemData::default())
            } else {
                player.inventory().await
            }
        };
        let (status, inventory, ender_chest, potion_effects, advancements, statistics, location, container) = tokio::join!(
            player.status(),
            inventory,
            player.ender_chest(),
            player.potion_effects(),
            player.advancements(),
            player.statistics(),
            player.location(),
            player.persistent_data_container(),
        );

        let assembled = (|| {
            Ok::<PlayerSnapshot, FacetError>(PlayerSnapshot {
                status: status?,
                inventory: inventory?,
                ender_chest: ender_chest?,
                potion_effects: potion_effects?,
                advancements: advancements?,
                statistics: statistics?,
                location: location?,
                persistent_data_container: container?,
                minecraft_version: player.minecraft_version().to_string(),
                format_version: PlayerSnapshot::FORMAT_VERSION,
            })
        })();

        match assembled {
            Ok(snapshot) => Some(snapshot),
            Err(cause) => {
                error!(
                    "failed to get data from online player {}: {}",
                    player.username(),
                    cause
                );
                None
            }
        }
    }

    /// Applies `snapshot` to `player`, honouring the configured toggles.
    ///
    /// Returns `true` when every dispatched facet write completed, or when
    /// the application was legitimately skipped (hook cancellation, player
    /// already offline). Returns `false` when the snapshot is rejected by a
    /// version gate or any facet write fails. Writes that completed before
    /// a sibling failed are not rolled back.
    pub async fn apply(&self, player: &dyn PlayerHandle, snapshot: PlayerSnapshot) -> bool {
        let server_version = player.minecraft_version();
        let snapshot_version = snapshot
            .minecraft_version
            .parse::<MinecraftVersion>()
            .unwrap_or_else(|_| MinecraftVersion::new(Vec::new()));
        if snapshot_version > server_version {
            error!(
                "cannot set data for {}: snapshot game version ({}) is newer than the server's ({})",
                player.username(),
                snapshot.minecraft_version,
                server_version
            );
            return false;
        }
        if snapshot.has_newer_format() {
            error!(
                "cannot set data for {}: snapshot format version (v{}) is newer than the current format (v{})",
                player.username(),
                snapshot.format_version,
                PlayerSnapshot::FORMAT_VERSION
            );
            return false;
        }

        let outcome = self.hook.fire(player, snapshot).await;
        if outcome.cancelled || player.is_offline() {
            debug!(
                "skipped applying data for {}: cancelled or offline",
                player.username()
            );
            return true;
        }
        let data = &outcome.snapshot;

        let mut operations: Vec<BoxFuture<'_, FacetResult<()>>> = Vec::new();
        if self.config.sync_inventories {
            operations.push(player.set_inventory(&data.inventory));
        }
        if self.config.sync_ender_chests {
            operations.push(player.set_ender_chest(&data.ender_chest));
        }
        operations.push(player.set_status(&data.status, self.config.status_fields()));
        if self.config.sync_potion_effects {
            operations.push(player.set_potion_effects(&data.potion_effects));
        }
        if self.config.sync_advancements {
            operations.push(player.set_advancements(&data.advancements));
        }
        if self.config.sync_statistics {
            operations.push(player.set_statistics(&data.statistics));
        }
        if self.config.sync_location {
            operations.push(player.set_location(&data.location));
        }
        if self.config.sync_persistent_data_container {
            operations.push(player.set_persistent_data_container(&data.persistent_data_container));
        }

        // Every operation settles before the result is reported; completed
        // writes stay applied when a sibling fails.
        let failure = join_all(operations).await.into_iter().find_map(Result::err);
        match failure {
            Some(cause) => {
                error!(
                    "failed to set data for player {}: {}",
                    player.username(),
                    cause
                );
                false
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handle::{MockPlayer, MockPlayerState};
    use crate::hook::ScriptedHook;
    use playersync_data::PotionEffectData;

    fn snapshot_for(player: &MockPlayer) -> PlayerSnapshot {
        let state = player.state();
        PlayerSnapshot {
            status: state.status,
            inventory: state.inventory,
            ender_chest: state.ender_chest,
            potion_effects: state.potion_effects,
            advancements: state.advancements,
            statistics: state.statistics,
            location: state.location,
            persistent_data_container: state.persistent_data_container,
            minecraft_version: player.minecraft_version().to_string(),
            format_version: PlayerSnapshot::FORMAT_VERSION,
        }
    }

    #[tokio::test]
    async fn apply_writes_all_enabled_facets() {
        let player = MockPlayer::new("Steve");
        let mut snapshot = snapshot_for(&player);
        snapshot.inventory = ItemData::new("b64:bmV3");

        let applied = Synchronizer::new(SyncConfig::new())
            .apply(&player, snapshot)
            .await;

        assert!(applied);
        let setters = player.invoked_setters();
        assert_eq!(setters.len(), 8);
        assert!(setters.contains(&"set_status"));
        assert_eq!(player.state().inventory, ItemData::new("b64:bmV3"));
    }

    #[tokio::test]
    async fn apply_skips_disabled_facets() {
        let player = MockPlayer::new("Steve");
        let snapshot = snapshot_for(&player);

        let config = SyncConfig::new()
            .with_location(false)
            .with_statistics(false);
        assert!(Synchronizer::new(config).apply(&player, snapshot).await);

        let setters = player.invoked_setters();
        assert!(!setters.contains(&"set_location"));
        assert!(!setters.contains(&"set_statistics"));
        // Status is applied unconditionally.
        assert!(setters.contains(&"set_status"));
    }

    #[tokio::test]
    async fn apply_rejects_newer_game_version() {
        let player = MockPlayer::new("Steve")
            .with_version(MinecraftVersion::new([1, 18, 2]));
        let mut snapshot = snapshot_for(&player);
        snapshot.minecraft_version = "1.19.2".into();

        assert!(!Synchronizer::new(SyncConfig::new()).apply(&player, snapshot).await);
        assert!(player.invoked_setters().is_empty());
    }

    #[tokio::test]
    async fn apply_rejects_newer_format_version() {
        let player = MockPlayer::new("Steve");
        let mut snapshot = snapshot_for(&player);
        snapshot.format_version = PlayerSnapshot::FORMAT_VERSION + 1;

        assert!(!Synchronizer::new(SyncConfig::new()).apply(&player, snapshot).await);
        assert!(player.invoked_setters().is_empty());
    }

    #[tokio::test]
    async fn apply_accepts_older_snapshot_versions() {
        let player = MockPlayer::new("Steve");
        let mut snapshot = snapshot_for(&player);
        snapshot.minecraft_version = "1.16.5".into();
        snapshot.format_version = PlayerSnapshot::FORMAT_VERSION - 1;

        assert!(Synchronizer::new(SyncConfig::new()).apply(&player, snapshot).await);
        assert!(!player.invoked_setters().is_empty());
    }

    #[tokio::test]
    async fn cancelled_hook_resolves_true_with_no_writes() {
        let player = MockPlayer::new("Steve");
        let snapshot = snapshot_for(&player);

        let synchronizer = Synchronizer::with_hook(SyncConfig::new(), ScriptedHook::cancelling());
        assert!(synchronizer.apply(&player, snapshot).await);
        assert_eq!(synchronizer.hook.fire_count(), 1);
        assert!(player.invoked_setters().is_empty());
    }

    #[tokio::test]
    async fn offline_player_resolves_true_with_no_writes() {
        let player = MockPlayer::new("Steve");
        player.set_offline(true);
        let snapshot = snapshot_for(&player);

        assert!(Synchronizer::new(SyncConfig::new()).apply(&player, snapshot).await);
        assert!(player.invoked_setters().is_empty());
    }

    #[tokio::test]
    async fn hook_replacement_is_applied() {
        let player = MockPlayer::new("Steve");
        let snapshot = snapshot_for(&player);
        let mut replacement = snapshot.clone();
        replacement.potion_effects = PotionEffectData::new("b64:c3BlZWQ=");

        let hook = ScriptedHook::new().replace_with(replacement);
        assert!(Synchronizer::with_hook(SyncConfig::new(), hook).apply(&player, snapshot).await);
        assert_eq!(
            player.state().potion_effects,
            PotionEffectData::new("b64:c3BlZWQ=")
        );
    }

    #[tokio::test]
    async fn partial_failure_resolves_false_but_siblings_still_ran() {
        let player = MockPlayer::new("Steve");
        player.fail_on("set_location");
        let mut snapshot = snapshot_for(&player);
        snapshot.ender_chest = ItemData::new("b64:Y2hlc3Q=");

        assert!(!Synchronizer::new(SyncConfig::new()).apply(&player, snapshot).await);

        let setters = player.invoked_setters();
        assert_eq!(setters.len(), 8);
        // Completed sibling writes stay applied; nothing is rolled back.
        assert_eq!(player.state().ender_chest, ItemData::new("b64:Y2hlc3Q="));
    }

    #[tokio::test]
    async fn capture_reads_all_facets_and_stamps_versions() {
        let state = MockPlayerState {
            inventory: ItemData::new("b64:aXRlbXM="),
            ..MockPlayerState::default()
        };
        let player = MockPlayer::new("Steve").with_state(state);

        let snapshot = Synchronizer::new(SyncConfig::new())
            .capture(&player)
            .await
            .unwrap();

        assert_eq!(snapshot.inventory, ItemData::new("b64:aXRlbXM="));
        assert_eq!(snapshot.minecraft_version, "1.19.2");
        assert_eq!(snapshot.format_version, PlayerSnapshot::FORMAT_VERSION);
    }

    #[tokio::test]
    async fn capture_substitutes_empty_inventory_for_dead_players() {
        let state = MockPlayerState {
            inventory: ItemData::new("b64:aXRlbXM="),
            ender_chest: ItemData::new("b64:Y2hlc3Q="),
            ..MockPlayerState::default()
        };
        let player = MockPlayer::new("Steve").with_state(state);
        player.set_dead(true);

        let config = SyncConfig::new().with_save_dead_player_inventories(false);
        let snapshot = Synchronizer::new(config).capture(&player).await.unwrap();

        assert!(snapshot.inventory.is_empty());
        // The live inventory accessor is never consulted.
        assert!(!player.invoked().contains(&"inventory"));
        // The ender chest is unaffected by the dead-player rule.
        assert_eq!(snapshot.ender_chest, ItemData::new("b64:Y2hlc3Q="));
    }

    #[tokio::test]
    async fn capture_keeps_dead_inventory_when_configured() {
        let state = MockPlayerState {
            inventory: ItemData::new("b64:aXRlbXM="),
            ..MockPlayerState::default()
        };
        let player = MockPlayer::new("Steve").with_state(state);
        player.set_dead(true);

        let snapshot = Synchronizer::new(SyncConfig::new())
            .capture(&player)
            .await
            .unwrap();
        assert_eq!(snapshot.inventory, ItemData::new("b64:aXRlbXM="));
    }

    #[tokio::test]
    async fn capture_failure_yields_none() {
        let player = MockPlayer::new("Steve");
        player.fail_on("statistics");

        let captured = Synchronizer::new(SyncConfig::new()).capture(&player).await;
        assert!(captured.is_none());
    }
}
