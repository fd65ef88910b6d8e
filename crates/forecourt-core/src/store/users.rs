// ── User store ──
//
// Like stations, the staff list falls back to built-in data when its
// very first load fails, so role-based views keep working offline.
// The fallback carries the `ShowingFallback` phase.

use std::sync::Arc;

use tracing::{debug, warn};

use forecourt_api::{ApiClient, UserFilters};
use forecourt_api::types::UserCreateUpdate;

use super::collection::{Collection, CollectionState, LoadPhase};
use super::defaults;
use crate::error::Error;
use crate::model::{ResourceId, User};
use crate::validate;

pub struct UserStore {
    client: Arc<ApiClient>,
    collection: Collection<User>,
}

impl UserStore {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            collection: Collection::new(),
        }
    }

    pub async fn refresh(&self) -> Result<(), Error> {
        self.refresh_filtered(&UserFilters::default()).await
    }

    pub async fn refresh_filtered(&self, filters: &UserFilters) -> Result<(), Error> {
        // Fallback only substitutes for the initial load. Once the
        // server has answered (even with an empty roster), failures
        // keep the last live snapshot.
        let fallback_eligible = matches!(
            self.collection.phase(),
            LoadPhase::Idle | LoadPhase::ShowingFallback
        );

        let ticket = self.collection.begin_load();
        match self.client.list_users(filters).await {
            Ok(raw) => {
                let items: Vec<User> = raw.into_iter().map(User::from).collect();
                debug!(count = items.len(), "users refreshed");
                self.collection.complete_load(ticket, Ok(items));
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "user refresh failed");
                if fallback_eligible {
                    self.collection
                        .show_fallback(ticket, defaults::users(), err.to_string());
                } else {
                    // Keep the live data we already have.
                    self.collection.complete_load(ticket, Err(err.to_string()));
                }
                Err(err.into())
            }
        }
    }

    pub async fn fetch(&self, id: &ResourceId) -> Result<User, Error> {
        let raw = self.client.get_user(&id.to_string()).await?;
        let item = User::from(raw);
        self.collection.apply_fetched(item.clone());
        Ok(item)
    }

    pub async fn create(&self, record: UserCreateUpdate) -> Result<User, Error> {
        validate::user(&record)?;
        match self.client.create_user(&record).await {
            Ok(raw) => {
                let item = User::from(raw);
                self.collection.apply_created(item.clone());
                Ok(item)
            }
            Err(err) => {
                self.collection.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    pub async fn update(&self, id: &ResourceId, record: UserCreateUpdate) -> Result<User, Error> {
        validate::user(&record)?;
        match self.client.update_user(&id.to_string(), &record).await {
            Ok(raw) => {
                let item = User::from(raw);
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
        match self.client.delete_user(&id.to_string()).await {
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

    pub fn get(&self, id: &ResourceId) -> Option<Arc<User>> {
        self.collection.get(id)
    }

    pub fn state(&self) -> CollectionState<User> {
        self.collection.state()
    }

    pub fn snapshot(&self) -> Arc<Vec<Arc<User>>> {
        self.collection.snapshot()
    }

    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<CollectionState<User>> {
        self.collection.subscribe()
    }
}
