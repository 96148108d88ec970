//! The pre-sync extension point.

use crate::handle::PlayerHandle;
use async_trait::async_trait;
use parking_lot::Mutex;
use playersync_data::PlayerSnapshot;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Verdict returned by a [`PreSyncHook`].
#[derive(Debug, Clone, PartialEq)]
pub struct PreSyncOutcome {
    /// The snapshot to apply; the hook may have replaced it.
    pub snapshot: PlayerSnapshot,
    /// True if the application should be skipped entirely.
    pub cancelled: bool,
}

impl PreSyncOutcome {
    /// Proceed with the given (possibly rewritten) snapshot.
    pub fn proceed(snapshot: PlayerSnapshot) -> Self {
        Self {
            snapshot,
            cancelled: false,
        }
    }

    /// Skip the application entirely.
    pub fn cancel(snapshot: PlayerSnapshot) -> Self {
        Self {
            snapshot,
            cancelled: true,
        }
    }
}

/// External extension point fired once per apply, before any facet is
/// touched.
///
/// Hooks may rewrite the snapshot (e.g. strip a facet another plugin owns)
/// or cancel the application outright. A cancelled apply is not an error:
/// the engine resolves it successfully with zero facets written.
#[async_trait]
pub trait PreSyncHook: Send + Sync {
    /// Inspects and possibly rewrites or cancels an imminent application.
    async fn fire(&self, player: &dyn PlayerHandle, snapshot: PlayerSnapshot) -> PreSyncOutcome;
}

/// A hook that always proceeds with the snapshot unmodified.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

#[async_trait]
impl PreSyncHook for NoopHook {
    async fn fire(&self, _player: &dyn PlayerHandle, snapshot: PlayerSnapshot) -> PreSyncOutcome {
        PreSyncOutcome::proceed(snapshot)
    }
}

/// A hook scripted to cancel or substitute snapshots, for tests.
#[derive(Default)]
pub struct ScriptedHook {
    cancel: bool,
    replacement: Mutex<Option<PlayerSnapshot>>,
    fired: AtomicUsize,
}

impl ScriptedHook {
    /// Creates a hook that proceeds unmodified.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hook that cancels every application.
    pub fn cancelling() -> Self {
        Self {
            cancel: true,
            ..Self::default()
        }
    }

    /// Makes the hook substitute `snapshot` for whatever it is fired with.
    pub fn replace_with(self, snapshot: PlayerSnapshot) -> Self {
        *self.replacement.lock() = Some(snapshot);
        self
    }

    /// Number of times the hook has fired.
    pub fn fire_count(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PreSyncHook for ScriptedHook {
    async fn fire(&self, _player: &dyn PlayerHandle, snapshot: PlayerSnapshot) -> PreSyncOutcome {
        self.fired.fetch_add(1, Ordering::SeqCst);
        let snapshot = self.replacement.lock().clone().unwrap_or(snapshot);
        if self.cancel {
            PreSyncOutcome::cancel(snapshot)
        } else {
            PreSyncOutcome::proceed(snapshot)
        }
    }
}
