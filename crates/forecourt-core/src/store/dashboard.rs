// ── Dashboard store ──
//
// Holds a single derived value rather than a collection, but follows
// the same lifecycle: sequence-checked refreshes over a `watch`
// channel. When the summary endpoint fails, an equivalent summary is
// recomputed from the cached work-order and asset snapshots so the
// dashboard keeps rendering, tagged `ShowingFallback`.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, warn};

use forecourt_api::ApiClient;

use super::collection::LoadPhase;
use crate::error::Error;
use crate::model::{Asset, DashboardSummary, WorkOrder};
use crate::select;

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub summary: Arc<DashboardSummary>,
    pub phase: LoadPhase,
    pub error: Option<String>,
}

pub struct DashboardStore {
    client: Arc<ApiClient>,
    state: watch::Sender<DashboardState>,
    seq: AtomicU64,
}

impl DashboardStore {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Self {
            client,
            state,
            seq: AtomicU64::new(0),
        }
    }

    /// Refresh the summary. `cached_work_orders` and `cached_assets`
    /// feed the client-side recomputation when the endpoint fails.
    pub async fn refresh(
        &self,
        cached_work_orders: &[Arc<WorkOrder>],
        cached_assets: &[Arc<Asset>],
    ) -> Result<(), Error> {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|s| s.phase = LoadPhase::Loading);

        match self.client.get_dashboard_summary().await {
            Ok(raw) => {
                if ticket != self.seq.load(Ordering::SeqCst) {
                    return Ok(());
                }
                let summary = Arc::new(DashboardSummary::from(raw));
                debug!(total = summary.total_work_orders, "dashboard refreshed");
                self.state.send_modify(|s| {
                    s.summary = summary;
                    s.phase = LoadPhase::Loaded;
                    s.error = None;
                });
                Ok(())
            }
            Err(err) => {
                if ticket != self.seq.load(Ordering::SeqCst) {
                    return Err(err.into());
                }
                warn!(error = %err, "dashboard refresh failed, deriving from cache");
                let derived = Arc::new(select::summarize(cached_work_orders, cached_assets));
                self.state.send_modify(|s| {
                    s.summary = derived;
                    s.phase = LoadPhase::ShowingFallback;
                    s.error = Some(err.to_string());
                });
                Err(err.into())
            }
        }
    }

    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }
}
