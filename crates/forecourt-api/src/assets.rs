// Asset inventory endpoints

use crate::Error;
use crate::client::ApiClient;
use crate::types::{AssetCreateUpdate, AssetResponse};

#[derive(Debug, Clone, Default)]
pub struct AssetFilters {
    pub search: String,
    pub status: String,
    pub category: String,
}

impl ApiClient {
    /// `GET /api/assets`
    pub async fn list_assets(&self, filters: &AssetFilters) -> Result<Vec<AssetResponse>, Error> {
        self.get_with_query(
            "api/assets",
            &[],
            &[
                ("search", filters.search.as_str()),
                ("status", filters.status.as_str()),
                ("category", filters.category.as_str()),
            ],
        )
        .await
    }

    /// `GET /api/assets/:id`
    pub async fn get_asset(&self, id: &str) -> Result<AssetResponse, Error> {
        self.get("api/assets/:id", &[("id", id)]).await
    }

    /// `POST /api/assets`
    pub async fn create_asset(&self, body: &AssetCreateUpdate) -> Result<AssetResponse, Error> {
        self.post("api/assets", &[], body).await
    }

    /// `PUT /api/assets/:id`
    pub async fn update_asset(
        &self,
        id: &str,
        body: &AssetCreateUpdate,
    ) -> Result<AssetResponse, Error> {
        self.put("api/assets/:id", &[("id", id)], body).await
    }

    /// `DELETE /api/assets/:id`
    pub async fn delete_asset(&self, id: &str) -> Result<(), Error> {
        self.delete("api/assets/:id", &[("id", id)]).await
    }
}
