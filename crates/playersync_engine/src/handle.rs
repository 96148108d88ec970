//! The live player capability interface.

use crate::error::{FacetError, FacetResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use playersync_data::{
    AdvancementData, GameMode, ItemData, LocationData, MinecraftVersion,
    PersistentDataContainerData, PotionEffectData, StatisticsData, StatusData, StatusFields,
    WorldEnvironment,
};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

/// Read/write access to one logged-in player's live state.
///
/// One implementation exists per game-server platform. Every facet accessor
/// is independently asynchronous; the engine fans accessors out and joins on
/// their completion, performing no blocking I/O of its own. A stalled
/// accessor therefore stalls the whole join.
///
/// The engine assumes a single writer per player: callers must not run two
/// apply cycles against the same handle concurrently.
#[async_trait]
pub trait PlayerHandle: Send + Sync {
    /// The player's unique id.
    fn uuid(&self) -> Uuid;

    /// The player's username, used in log messages.
    fn username(&self) -> &str;

    /// True if the player has disconnected from this server.
    fn is_offline(&self) -> bool;

    /// True if the player is currently dead.
    fn is_dead(&self) -> bool;

    /// Game version of the server hosting this player.
    fn minecraft_version(&self) -> MinecraftVersion;

    /// Reads the player's status.
    async fn status(&self) -> FacetResult<StatusData>;

    /// Writes the status sub-fields selected by `fields`.
    async fn set_status(&self, status: &StatusData, fields: StatusFields) -> FacetResult<()>;

    /// Reads the player's main inventory.
    async fn inventory(&self) -> FacetResult<ItemData>;

    /// Replaces the player's main inventory.
    async fn set_inventory(&self, items: &ItemData) -> FacetResult<()>;

    /// Reads the player's ender chest.
    async fn ender_chest(&self) -> FacetResult<ItemData>;

    /// Replaces the player's ender chest.
    async fn set_ender_chest(&self, items: &ItemData) -> FacetResult<()>;

    /// Reads the player's active potion effects.
    async fn potion_effects(&self) -> FacetResult<PotionEffectData>;

    /// Replaces the player's active potion effects.
    async fn set_potion_effects(&self, effects: &PotionEffectData) -> FacetResult<()>;

    /// Reads the player's advancement progress.
    async fn advancements(&self) -> FacetResult<Vec<AdvancementData>>;

    /// Replaces the player's advancement progress.
    async fn set_advancements(&self, advancements: &[AdvancementData]) -> FacetResult<()>;

    /// Reads the player's statistic counters.
    async fn statistics(&self) -> FacetResult<StatisticsData>;

    /// Replaces the player's statistic counters.
    async fn set_statistics(&self, statistics: &StatisticsData) -> FacetResult<()>;

    /// Reads the player's position.
    async fn location(&self) -> FacetResult<LocationData>;

    /// Teleports the player.
    async fn set_location(&self, location: &LocationData) -> FacetResult<()>;

    /// Reads the player's persistent data container.
    async fn persistent_data_container(&self) -> FacetResult<PersistentDataContainerData>;

    /// Replaces the player's persistent data container.
    async fn set_persistent_data_container(
        &self,
        container: &PersistentDataContainerData,
    ) -> FacetResult<()>;
}

/// Live facet values held by a [`MockPlayer`].
#[derive(Debug, Clone, PartialEq)]
pub struct MockPlayerState {
    /// Status facet.
    pub status: StatusData,
    /// Main inventory facet.
    pub inventory: ItemData,
    /// Ender chest facet.
    pub ender_chest: ItemData,
    /// Potion effect facet.
    pub potion_effects: PotionEffectData,
    /// Advancement facet.
    pub advancements: Vec<AdvancementData>,
    /// Statistics facet.
    pub statistics: StatisticsData,
    /// Location facet.
    pub location: LocationData,
    /// Persistent data container facet.
    pub persistent_data_container: PersistentDataContainerData,
}

impl Default for MockPlayerState {
    fn default() -> Self {
        Self {
            status: StatusData {
                health: 20.0,
                max_health: 20.0,
                health_scale: 0.0,
                hunger: 20,
                saturation: 5.0,
                saturation_exhaustion: 5.0,
                selected_item_slot: 1,
                total_experience: 100,
                experience_level: 1,
                experience_progress: 1.0,
                game_mode: GameMode::Survival,
                is_flying: false,
            },
            inventory: ItemData::default(),
            ender_chest: ItemData::default(),
            potion_effects: PotionEffectData::default(),
            advancements: Vec::new(),
            statistics: StatisticsData::default(),
            location: LocationData {
                world_name: "dummy_world".into(),
                world_uuid: Uuid::nil(),
                world_environment: WorldEnvironment::Normal,
                x: 0.0,
                y: 64.0,
                z: 0.0,
                yaw: 90.0,
                pitch: 180.0,
            },
            persistent_data_container: PersistentDataContainerData::default(),
        }
    }
}

/// A scriptable in-memory player for tests.
///
/// Getters return the current [`MockPlayerState`]; setters overwrite it and
/// record which facet they were called for. Any accessor can be made to
/// fail by method name via [`MockPlayer::fail_on`].
pub struct MockPlayer {
    uuid: Uuid,
    username: String,
    version: MinecraftVersion,
    offline: AtomicBool,
    dead: AtomicBool,
    state: Mutex<MockPlayerState>,
    failing: Mutex<BTreeSet<&'static str>>,
    invoked: Mutex<Vec<&'static str>>,
}

impl MockPlayer {
    /// Creates a mock player with dummy live state.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            username: username.into(),
            version: MinecraftVersion::new([1, 19, 2]),
            offline: AtomicBool::new(false),
            dead: AtomicBool::new(false),
            state: Mutex::new(MockPlayerState::default()),
            failing: Mutex::new(BTreeSet::new()),
            invoked: Mutex::new(Vec::new()),
        }
    }

    /// Sets the server version this mock reports.
    pub fn with_version(mut self, version: MinecraftVersion) -> Self {
        self.version = version;
        self
    }

    /// Replaces the mock's live facet values.
    pub fn with_state(self, state: MockPlayerState) -> Self {
        *self.state.lock() = state;
        self
    }

    /// Makes the named accessor fail, e.g. `"inventory"` or `"set_status"`.
    pub fn fail_on(&self, method: &'static str) {
        self.failing.lock().insert(method);
    }

    /// Marks the player as disconnected.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Marks the player as dead.
    pub fn set_dead(&self, dead: bool) {
        self.dead.store(dead, Ordering::SeqCst);
    }

    /// Returns the current live facet values.
    pub fn state(&self) -> MockPlayerState {
        self.state.lock().clone()
    }

    /// Returns the accessor names invoked so far, in call order.
    pub fn invoked(&self) -> Vec<&'static str> {
        self.invoked.lock().clone()
    }

    /// Returns the setter names invoked so far.
    pub fn invoked_setters(&self) -> Vec<&'static str> {
        self.invoked
            .lock()
            .iter()
            .copied()
            .filter(|name| name.starts_with("set_"))
            .collect()
    }

    fn enter(&self, method: &'static str) -> FacetResult<()> {
        self.invoked.lock().push(method);
        if self.failing.lock().contains(method) {
            return Err(FacetError::new(format!("injected {method} failure")));
        }
        Ok(())
    }
}

#[async_trait]
impl PlayerHandle for MockPlayer {
    fn uuid(&self) -> Uuid {
        self.uuid
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    fn is_dead(&self) -> bool {
        self.dead.load(Ordering::SeqCst)
    }

    fn minecraft_version(&self) -> MinecraftVersion {
        self.version.clone()
    }

    async fn status(&self) -> FacetResult<StatusData> {
        self.enter("status")?;
        Ok(self.state.lock().status.clone())
    }

    async fn set_status(&self, status: &StatusData, _fields: StatusFields) -> FacetResult<()> {
        self.enter("set_status")?;
        self.state.lock().status = status.clone();
        Ok(())
    }

    async fn inventory(&self) -> FacetResult<ItemData> {
        self.enter("inventory")?;
        Ok(self.state.lock().inventory.clone())
    }

    async fn set_inventory(&self, items: &ItemData) -> FacetResult<()> {
        self.enter("set_inventory")?;
        self.state.lock().inventory = items.clone();
        Ok(())
    }

    async fn ender_chest(&self) -> FacetResult<ItemData> {
        self.enter("ender_chest")?;
        Ok(self.state.lock().ender_chest.clone())
    }

    async fn set_ender_chest(&self, items: &ItemData) -> FacetResult<()> {
        self.enter("set_ender_chest")?;
        self.state.lock().ender_chest = items.clone();
        Ok(())
    }

    async fn potion_effects(&self) -> FacetResult<PotionEffectData> {
        self.enter("potion_effects")?;
        Ok(self.state.lock().potion_effects.clone())
    }

    async fn set_potion_effects(&self, effects: &PotionEffectData) -> FacetResult<()> {
        self.enter("set_potion_effects")?;
        self.state.lock().potion_effects = effects.clone();
        Ok(())
    }

    async fn advancements(&self) -> FacetResult<Vec<AdvancementData>> {
        self.enter("advancements")?;
        Ok(self.state.lock().advancements.clone())
    }

    async fn set_advancements(&self, advancements: &[AdvancementData]) -> FacetResult<()> {
        self.enter("set_advancements")?;
        self.state.lock().advancements = advancements.to_vec();
        Ok(())
    }

    async fn statistics(&self) -> FacetResult<StatisticsData> {
        self.enter("statistics")?;
        Ok(self.state.lock().statistics.clone())
    }

    async fn set_statistics(&self, statistics: &StatisticsData) -> FacetResult<()> {
        self.enter("set_statistics")?;
        self.state.lock().statistics = statistics.clone();
        Ok(())
    }

    async fn location(&self) -> FacetResult<LocationData> {
        self.enter("location")?;
        Ok(self.state.lock().location.clone())
    }

    async fn set_location(&self, location: &LocationData) -> FacetResult<()> {
        self.enter("set_location")?;
        self.state.lock().location = location.clone();
        Ok(())
    }

    async fn persistent_data_container(&self) -> FacetResult<PersistentDataContainerData> {
        self.enter("persistent_data_container")?;
        Ok(self.state.lock().persistent_data_container.clone())
    }

    async fn set_persistent_data_container(
        &self,
        container: &PersistentDataContainerData,
    ) -> FacetResult<()> {
        self.enter("set_persistent_data_container")?;
        self.state.lock().persistent_data_container = container.clone();
        Ok(())
    }
}
