// ── Reactive stores ──
//
// One store per backend resource, each wrapping a [`Collection`] (or
// the single-value dashboard state) over a shared [`ApiClient`].

pub mod collection;
pub mod dashboard;
mod defaults;

mod assets;
mod stations;
mod users;
mod work_orders;

use std::sync::Arc;

use tracing::warn;

use forecourt_api::ApiClient;

pub use assets::AssetStore;
pub use collection::{Collection, CollectionState, Keyed, LoadPhase, LoadTicket};
pub use dashboard::{DashboardState, DashboardStore};
pub use stations::{OperationState, StationStore};
pub use users::UserStore;
pub use work_orders::WorkOrderStore;

use crate::error::Error;
use crate::model::{Asset, ResourceId, Station, User, WorkOrder};

impl Keyed for WorkOrder {
    fn key(&self) -> &ResourceId {
        &self.id
    }
}

impl Keyed for Asset {
    fn key(&self) -> &ResourceId {
        &self.id
    }
}

impl Keyed for Station {
    fn key(&self) -> &ResourceId {
        &self.id
    }
}

impl Keyed for User {
    fn key(&self) -> &ResourceId {
        &self.id
    }
}

/// All resource stores over one shared client.
pub struct Stores {
    pub work_orders: WorkOrderStore,
    pub assets: AssetStore,
    pub stations: StationStore,
    pub users: UserStore,
    pub dashboard: DashboardStore,
}

impl Stores {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            work_orders: WorkOrderStore::new(Arc::clone(&client)),
            assets: AssetStore::new(Arc::clone(&client)),
            stations: StationStore::new(Arc::clone(&client)),
            users: UserStore::new(Arc::clone(&client)),
            dashboard: DashboardStore::new(client),
        }
    }

    /// Refresh the dashboard, handing it the cached work-order and
    /// asset snapshots for client-side recomputation on failure.
    pub async fn refresh_dashboard(&self) -> Result<(), Error> {
        let work_orders = self.work_orders.snapshot();
        let assets = self.assets.snapshot();
        self.dashboard.refresh(&work_orders, &assets).await
    }

    /// Best-effort refresh of everything, dashboard last so its
    /// fallback path sees the freshest caches. Individual failures
    /// are recorded per collection rather than aborting the rest.
    pub async fn refresh_all(&self) {
        for outcome in [
            self.work_orders.refresh().await,
            self.assets.refresh().await,
            self.stations.refresh().await,
            self.users.refresh().await,
            self.refresh_dashboard().await,
        ] {
            if let Err(err) = outcome {
                warn!(error = %err, "partial refresh failure");
            }
        }
    }
}
