// ── Station store ──
//
// Stations are the navigation backbone (map view, assignment pickers)
// so a failed first load installs built-in fallback data instead of
// an empty error screen. Photo uploads are screened locally before
// any bytes reach the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use forecourt_api::ApiClient;
use forecourt_api::types::{PhotoUploadResponse, StationCreateUpdate};

use super::collection::{Collection, CollectionState, LoadPhase};
use super::defaults;
use crate::attachments;
use crate::error::Error;
use crate::model::{ResourceId, Station};
use crate::validate;

/// Observable state of one independent station operation (detail
/// fetch, photo upload). The list has its own `CollectionState`.
#[derive(Debug, Clone, Default)]
pub struct OperationState {
    pub in_flight: bool,
    /// Most recent failure, cleared by the next success.
    pub error: Option<String>,
}

pub struct StationStore {
    client: Arc<ApiClient>,
    collection: Collection<Station>,
    detail: watch::Sender<OperationState>,
    upload: watch::Sender<OperationState>,
}

impl StationStore {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        let (detail, _) = watch::channel(OperationState::default());
        let (upload, _) = watch::channel(OperationState::default());
        Self {
            client,
            collection: Collection::new(),
            detail,
            upload,
        }
    }

    pub async fn refresh(&self) -> Result<(), Error> {
        self.refresh_searched("").await
    }

    /// Reload with a server-side search term.
    pub async fn refresh_searched(&self, search: &str) -> Result<(), Error> {
        // Fallback only substitutes for the initial load. Once the
        // server has answered (even with an empty list), failures keep
        // the last live snapshot.
        let fallback_eligible = matches!(
            self.collection.phase(),
            LoadPhase::Idle | LoadPhase::ShowingFallback
        );

        let ticket = self.collection.begin_load();
        match self.client.list_stations(search).await {
            Ok(raw) => {
                let items: Vec<Station> = raw.into_iter().map(Station::from).collect();
                debug!(count = items.len(), "stations refreshed");
                self.collection.complete_load(ticket, Ok(items));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "station refresh failed");
                if fallback_eligible {
                    self.collection
                        .show_fallback(ticket, defaults::stations(), err.to_string());
                } else {
                    self.collection.complete_load(ticket, Err(err.to_string()));
                }
                Err(err.into())
            }
        }
    }

    /// Fetch one station in full detail and fold it into the cache.
    /// Detail and list loads are independent: a detail fetch never
    /// touches the list's load phase, it tracks `detail_state` instead.
    pub async fn fetch(&self, id: &ResourceId) -> Result<Station, Error> {
        self.detail.send_replace(OperationState {
            in_flight: true,
            error: None,
        });
        match self.client.get_station(&id.to_string()).await {
            Ok(raw) => {
                let item = Station::from(raw);
                self.collection.apply_fetched(item.clone());
                self.detail.send_replace(OperationState::default());
                Ok(item)
            }
            Err(err) => {
                self.detail.send_replace(OperationState {
                    in_flight: false,
                    error: Some(err.to_string()),
                });
                Err(err.into())
            }
        }
    }

    pub async fn create(&self, record: StationCreateUpdate) -> Result<Station, Error> {
        validate::station(&record)?;
        match self.client.create_station(&record).await {
            Ok(raw) => {
                let item = Station::from(raw);
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
        record: StationCreateUpdate,
    ) -> Result<Station, Error> {
        validate::station(&record)?;
        match self.client.update_station(&id.to_string(), &record).await {
            Ok(raw) => {
                let item = Station::from(raw);
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
        match self.client.delete_station(&id.to_string()).await {
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

    /// Upload a station photo. Size/type screening happens before any
    /// network traffic; the fresh station detail is re-fetched after a
    /// successful upload so the cache sees the new attachment. Progress
    /// and failures are tracked in `upload_state`.
    pub async fn upload_photo(
        &self,
        id: &ResourceId,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<PhotoUploadResponse, Error> {
        let kind = match attachments::check(file_name, bytes.len() as u64) {
            Ok(kind) => kind,
            Err(err) => {
                self.upload.send_replace(OperationState {
                    in_flight: false,
                    error: Some(err.to_string()),
                });
                return Err(err);
            }
        };
        let content_type = kind.content_type(file_name);

        self.upload.send_replace(OperationState {
            in_flight: true,
            error: None,
        });
        let uploaded = match self
            .client
            .upload_station_photo(&id.to_string(), content_type, bytes)
            .await
        {
            Ok(uploaded) => uploaded,
            Err(err) => {
                self.upload.send_replace(OperationState {
                    in_flight: false,
                    error: Some(err.to_string()),
                });
                return Err(err.into());
            }
        };
        self.upload.send_replace(OperationState::default());
        info!(station = %id, url = %uploaded.url, "station photo uploaded");

        if let Err(err) = self.fetch(id).await {
            // Upload succeeded; a failed re-fetch only delays the
            // cache update until the next refresh.
            warn!(error = %err, "post-upload station fetch failed");
        }
        Ok(uploaded)
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn get(&self, id: &ResourceId) -> Option<Arc<Station>> {
        self.collection.get(id)
    }

    pub fn state(&self) -> CollectionState<Station> {
        self.collection.state()
    }

    pub fn snapshot(&self) -> Arc<Vec<Arc<Station>>> {
        self.collection.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<CollectionState<Station>> {
        self.collection.subscribe()
    }

    pub fn detail_state(&self) -> OperationState {
        self.detail.borrow().clone()
    }

    pub fn upload_state(&self) -> OperationState {
        self.upload.borrow().clone()
    }

    pub fn subscribe_detail(&self) -> watch::Receiver<OperationState> {
        self.detail.subscribe()
    }

    pub fn subscribe_upload(&self) -> watch::Receiver<OperationState> {
        self.upload.subscribe()
    }
}
