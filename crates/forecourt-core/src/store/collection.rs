// ── Generic reactive resource collection ──
//
// Ordered snapshot storage with push-based change notification via
// `watch` channels. Every mutation publishes a fresh immutable
// snapshot; subscribers never observe intermediate states.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;

use crate::model::ResourceId;

/// Recently deleted ids remembered to suppress late echo updates.
const TOMBSTONE_CAP: usize = 64;

/// Anything stored in a [`Collection`] exposes its identifier.
pub trait Keyed {
    fn key(&self) -> &ResourceId;
}

/// Lifecycle of a collection's backing data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Never loaded.
    #[default]
    Idle,
    /// A refresh is in flight; previous items remain visible.
    Loading,
    /// Last refresh succeeded.
    Loaded,
    /// Last refresh failed and no substitute data was installed.
    Failed,
    /// A refresh failed and built-in fallback data is being shown.
    /// Distinguishable from [`LoadPhase::Loaded`] so callers never
    /// mistake placeholder data for live data.
    ShowingFallback,
}

/// Observable state of one collection: the current snapshot plus the
/// load lifecycle it is in.
#[derive(Debug)]
pub struct CollectionState<T> {
    pub items: Arc<Vec<Arc<T>>>,
    pub phase: LoadPhase,
    /// Most recent failure, kept until the next successful refresh.
    pub error: Option<String>,
}

// Manual impl: `items` only needs the `Arc` cloned, so no `T: Clone`
// bound is required (derive would add one).
impl<T> Clone for CollectionState<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            phase: self.phase,
            error: self.error.clone(),
        }
    }
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
            phase: LoadPhase::Idle,
            error: None,
        }
    }
}

/// Token identifying one refresh attempt. Only the newest outstanding
/// ticket may settle; results arriving under a superseded ticket are
/// discarded, so overlapping refreshes can never interleave stale
/// data over fresh data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a load that never settles leaves the collection in Loading"]
pub struct LoadTicket(u64);

/// A reactive, ordered collection for a single resource type.
pub struct Collection<T> {
    state: watch::Sender<CollectionState<T>>,
    seq: AtomicU64,
    tombstones: Mutex<VecDeque<ResourceId>>,
}

impl<T: Keyed + Send + Sync + 'static> Collection<T> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(CollectionState::default());
        Self {
            state,
            seq: AtomicU64::new(0),
            tombstones: Mutex::new(VecDeque::new()),
        }
    }

    // ── Refresh lifecycle ────────────────────────────────────────────

    /// Start a refresh: moves to `Loading` (existing items stay
    /// visible) and returns the ticket the result must settle under.
    pub fn begin_load(&self) -> LoadTicket {
        let ticket = LoadTicket(self.seq.fetch_add(1, Ordering::SeqCst) + 1);
        self.state.send_modify(|s| {
            s.phase = LoadPhase::Loading;
        });
        ticket
    }

    /// Settle a refresh. Returns `false` when the ticket was
    /// superseded by a newer `begin_load`, in which case nothing
    /// changes. On success the snapshot is replaced wholesale and
    /// tombstones reset; on failure items are kept and the phase
    /// moves to `Failed`.
    pub fn complete_load(&self, ticket: LoadTicket, outcome: Result<Vec<T>, String>) -> bool {
        if ticket.0 != self.seq.load(Ordering::SeqCst) {
            return false;
        }
        match outcome {
            Ok(items) => {
                if let Ok(mut tombs) = self.tombstones.lock() {
                    tombs.clear();
                }
                let items = Arc::new(items.into_iter().map(Arc::new).collect::<Vec<_>>());
                self.state.send_modify(|s| {
                    s.items = items;
                    s.phase = LoadPhase::Loaded;
                    s.error = None;
                });
            }
            Err(message) => {
                self.state.send_modify(|s| {
                    s.phase = LoadPhase::Failed;
                    s.error = Some(message);
                });
            }
        }
        true
    }

    /// Install substitute data after a failed refresh. The phase is
    /// `ShowingFallback`, never `Loaded`, so subscribers can tell the
    /// difference. Stale-ticket rules apply as in [`complete_load`].
    pub fn show_fallback(&self, ticket: LoadTicket, items: Vec<T>, message: String) -> bool {
        if ticket.0 != self.seq.load(Ordering::SeqCst) {
            return false;
        }
        let items = Arc::new(items.into_iter().map(Arc::new).collect::<Vec<_>>());
        self.state.send_modify(|s| {
            s.items = items;
            s.phase = LoadPhase::ShowingFallback;
            s.error = Some(message);
        });
        true
    }

    // ── Incremental mutations ────────────────────────────────────────

    /// Append a newly created item, unless an item with the same id
    /// already exists or that id was recently deleted.
    pub fn apply_created(&self, item: T) {
        let id = item.key().clone();
        if self.is_tombstoned(&id) {
            return;
        }
        self.state.send_modify(|s| {
            if s.items.iter().any(|existing| *existing.key() == id) {
                return;
            }
            let mut items = s.items.as_ref().clone();
            items.push(Arc::new(item));
            s.items = Arc::new(items);
        });
    }

    /// Replace an existing item in place. A no-op when the id is
    /// absent or tombstoned: deletion wins over a late update.
    pub fn apply_updated(&self, item: T) {
        let id = item.key().clone();
        if self.is_tombstoned(&id) {
            return;
        }
        self.state.send_modify(|s| {
            let Some(pos) = s.items.iter().position(|existing| *existing.key() == id) else {
                return;
            };
            let mut items = s.items.as_ref().clone();
            items[pos] = Arc::new(item);
            s.items = Arc::new(items);
        });
    }

    /// Upsert a single freshly fetched item: replace it in place if
    /// present, append otherwise. Tombstoned ids are still dropped.
    pub fn apply_fetched(&self, item: T) {
        let id = item.key().clone();
        if self.is_tombstoned(&id) {
            return;
        }
        self.state.send_modify(|s| {
            let mut items = s.items.as_ref().clone();
            match items.iter().position(|existing| *existing.key() == id) {
                Some(pos) => items[pos] = Arc::new(item),
                None => items.push(Arc::new(item)),
            }
            s.items = Arc::new(items);
        });
    }

    /// Remove an item and remember its id so late echoes of it are
    /// suppressed.
    pub fn apply_removed(&self, id: &ResourceId) {
        if let Ok(mut tombs) = self.tombstones.lock() {
            if !tombs.contains(id) {
                tombs.push_back(id.clone());
                while tombs.len() > TOMBSTONE_CAP {
                    tombs.pop_front();
                }
            }
        }
        self.state.send_modify(|s| {
            let Some(pos) = s.items.iter().position(|existing| existing.key() == id) else {
                return;
            };
            let mut items = s.items.as_ref().clone();
            items.remove(pos);
            s.items = Arc::new(items);
        });
    }

    /// Record a failure from a write operation without disturbing the
    /// snapshot or its load phase.
    pub fn record_error(&self, message: String) {
        self.state.send_modify(|s| s.error = Some(message));
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn get(&self, id: &ResourceId) -> Option<Arc<T>> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|item| item.key() == id)
            .cloned()
    }

    /// Current state (cheap: `Arc` clones only).
    pub fn state(&self) -> CollectionState<T> {
        self.state.borrow().clone()
    }

    pub fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.state.borrow().items.clone()
    }

    pub fn phase(&self) -> LoadPhase {
        self.state.borrow().phase
    }

    /// Subscribe to state changes via a `watch::Receiver`.
    pub fn subscribe(&self) -> watch::Receiver<CollectionState<T>> {
        self.state.subscribe()
    }

    fn is_tombstoned(&self, id: &ResourceId) -> bool {
        self.tombstones
            .lock()
            .map(|tombs| tombs.contains(id))
            .unwrap_or(false)
    }
}

impl<T: Keyed + Send + Sync + 'static> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
