// ── Work order store ──

use std::sync::Arc;

use tracing::{debug, warn};

use forecourt_api::{ApiClient, WorkOrderFilters};
use forecourt_api::types::WorkOrderCreateUpdate;

use super::collection::{Collection, CollectionState};
use crate::error::Error;
use crate::model::{ResourceId, WorkOrder};
use crate::validate;

pub struct WorkOrderStore {
    client: Arc<ApiClient>,
    collection: Collection<WorkOrder>,
}

impl WorkOrderStore {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            collection: Collection::new(),
        }
    }

    /// Reload the full list. A failure keeps the previous snapshot
    /// and moves the collection to `Failed`.
    pub async fn refresh(&self) -> Result<(), Error> {
        self.refresh_filtered(&WorkOrderFilters::default()).await
    }

    /// Reload with server-side filters applied.
    pub async fn refresh_filtered(&self, filters: &WorkOrderFilters) -> Result<(), Error> {
        let ticket = self.collection.begin_load();
        match self.client.list_work_orders(filters).await {
            Ok(raw) => {
                let items: Vec<WorkOrder> = raw.into_iter().map(WorkOrder::from).collect();
                debug!(count = items.len(), "work orders refreshed");
                self.collection.complete_load(ticket, Ok(items));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "work order refresh failed");
                self.collection.complete_load(ticket, Err(err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Fetch one record and fold it into the cache.
    pub async fn fetch(&self, id: &ResourceId) -> Result<WorkOrder, Error> {
        let raw = self.client.get_work_order(&id.to_string()).await?;
        let item = WorkOrder::from(raw);
        self.collection.apply_fetched(item.clone());
        Ok(item)
    }

    /// Create a record. The server-assigned entity is authoritative
    /// and is what lands in the cache.
    pub async fn create(&self, record: WorkOrderCreateUpdate) -> Result<WorkOrder, Error> {
        validate::work_order(&record)?;
        match self.client.create_work_order(&record).await {
            Ok(raw) => {
                let item = WorkOrder::from(raw);
                self.collection.apply_created(item.clone());
                Ok(item)
            }
            Err(err) => {
                self.collection.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub async fn update(
        &self,
        id: &ResourceId,
        record: WorkOrderCreateUpdate,
    ) -> Result<WorkOrder, Error> {
        validate::work_order(&record)?;
        match self.client.update_work_order(&id.to_string(), &record).await {
            Ok(raw) => {
                let item = WorkOrder::from(raw);
                self.collection.apply_updated(item.clone());
                Ok(item)
            }
            Err(err) => {
                self.collection.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub async fn remove(&self, id: &ResourceId) -> Result<(), Error> {
        match self.client.delete_work_order(&id.to_string()).await {
            Ok(()) => {
                self.collection.apply_removed(id);
                Ok(())
            }
            Err(err) => {
                self.collection.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn get(&self, id: &ResourceId) -> Option<Arc<WorkOrder>> {
        self.collection.get(id)
    }

    pub fn state(&self) -> CollectionState<WorkOrder> {
        self.collection.state()
    }

    pub fn snapshot(&self) -> Arc<Vec<Arc<WorkOrder>>> {
        self.collection.snapshot()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<CollectionState<WorkOrder>> {
        self.collection.subscribe()
    }
}
