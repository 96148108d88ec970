//! End-to-end test: capture on one server, apply on another.

use chrono::DateTime;
use playersync_codec::{CompressedAdapter, JsonAdapter, SnapshotAdapter};
use playersync_data::{AdvancementData, ItemData, PersistentDataTag, PotionEffectData};
use playersync_engine::{MockPlayer, MockPlayerState, SyncConfig, Synchronizer};
use std::collections::BTreeMap;

fn travelling_player() -> MockPlayer {
    let mut state = MockPlayerState::default();
    state.inventory = ItemData::new("b64:ZGlhbW9uZF9zd29yZA==");
    state.ender_chest = ItemData::new("b64:ZW5kZXJfcGVhcmw=");
    state.potion_effects = PotionEffectData::new("b64:c3dpZnRuZXNz");
    state.status.health = 17.0;
    state.status.experience_level = 30;
    state.location.x = 128.5;
    state.location.z = -64.25;

    let mut criteria = BTreeMap::new();
    criteria.insert(
        "minecraft:has_the_recipe".to_string(),
        DateTime::from_timestamp(1_660_000_000, 0).unwrap(),
    );
    state.advancements = vec![AdvancementData::new("minecraft:recipes/root", criteria)];
    state
        .statistics
        .untyped_statistics
        .insert("JUMP".into(), 1234);
    state
        .persistent_data_container
        .persistent_data_map
        .insert("quests:progress".into(), PersistentDataTag::Integer(7));

    MockPlayer::new("Traveller").with_state(state)
}

#[tokio::test]
async fn snapshot_travels_between_servers() {
    let config = SyncConfig::new();
    let synchronizer = Synchronizer::new(config.clone());

    // Server A: capture and encode for storage.
    let source = travelling_player();
    let snapshot = synchronizer.capture(&source).await.expect("capture failed");
    let stored = CompressedAdapter::new().to_bytes(&snapshot).unwrap();

    // Server B: decode and apply to the same player's fresh handle.
    let decoded = CompressedAdapter::new().from_bytes(&stored).unwrap();
    assert_eq!(decoded, snapshot);

    let target = MockPlayer::new("Traveller");
    assert!(Synchronizer::new(config).apply(&target, decoded).await);
    assert_eq!(target.state(), source.state());
}

#[tokio::test]
async fn plain_and_compressed_storage_agree() {
    let synchronizer = Synchronizer::new(SyncConfig::new());
    let source = travelling_player();
    let snapshot = synchronizer.capture(&source).await.expect("capture failed");

    let plain = JsonAdapter::new();
    let compressed = CompressedAdapter::new();
    let via_plain = plain.from_bytes(&plain.to_bytes(&snapshot).unwrap()).unwrap();
    let via_compressed = compressed
        .from_bytes(&compressed.to_bytes(&snapshot).unwrap())
        .unwrap();
    assert_eq!(via_plain, via_compressed);
}

#[tokio::test]
async fn disabled_facets_do_not_travel() {
    let source = travelling_player();
    let snapshot = Synchronizer::new(SyncConfig::new())
        .capture(&source)
        .await
        .expect("capture failed");

    let target = MockPlayer::new("Traveller");
    let config = SyncConfig::new().with_ender_chests(false);
    assert!(Synchronizer::new(config).apply(&target, snapshot).await);

    assert_eq!(target.state().inventory, source.state().inventory);
    // The ender chest keeps whatever the target server had.
    assert_eq!(target.state().ender_chest, ItemData::default());
}
