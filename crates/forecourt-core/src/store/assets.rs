// ── Asset store ──

use std::sync::Arc;

use tracing::{debug, warn};

use forecourt_api::{ApiClient, AssetFilters};
use forecourt_api::types::AssetCreateUpdate;

use super::collection::{Collection, CollectionState};
use crate::error::Error;
use crate::model::{Asset, ResourceId};
use crate::validate;

pub struct AssetStore {
    client: Arc<ApiClient>,
    collection: Collection<Asset>,
}

impl AssetStore {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            collection: Collection::new(),
        }
    }

    pub async fn refresh(&self) -> Result<(), Error> {
        self.refresh_filtered(&AssetFilters::default()).await
    }

    pub async fn refresh_filtered(&self, filters: &AssetFilters) -> Result<(), Error> {
        let ticket = self.collection.begin_load();
        match self.client.list_assets(filters).await {
            Ok(raw) => {
                let items: Vec<Asset> = raw.into_iter().map(Asset::from).collect();
                debug!(count = items.len(), "assets refreshed");
                self.collection.complete_load(ticket, Ok(items));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "asset refresh failed");
                self.collection.complete_load(ticket, Err(err.to_string()));
                Err(err.into())
            }
        }
    }

    pub async fn fetch(&self, id: &ResourceId) -> Result<Asset, Error> {
        let raw = self.client.get_asset(&id.to_string()).await?;
        let item = Asset::from(raw);
        self.collection.apply_fetched(item.clone());
        Ok(item)
    }

    pub async fn create(&self, record: AssetCreateUpdate) -> Result<Asset, Error> {
        validate::asset(&record)?;
        match self.client.create_asset(&record).await {
            Ok(raw) => {
                let item = Asset::from(raw);
                self.collection.apply_created(item.clone());
                Ok(item)
            }
            Err(err) => {
                self.collection.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub async fn update(&self, id: &ResourceId, record: AssetCreateUpdate) -> Result<Asset, Error> {
        validate::asset(&record)?;
        match self.client.update_asset(&id.to_string(), &record).await {
            Ok(raw) => {
                let item = Asset::from(raw);
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
        match self.client.delete_asset(&id.to_string()).await {
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

    pub fn get(&self, id: &ResourceId) -> Option<Arc<Asset>> {
        self.collection.get(id)
    }

    pub fn state(&self) -> CollectionState<Asset> {
        self.collection.state()
    }

    pub fn snapshot(&self) -> Arc<Vec<Arc<Asset>>> {
        self.collection.snapshot()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<CollectionState<Asset>> {
        self.collection.subscribe()
    }
}
