// Work order endpoints
//
// List filtering is server-side: `search`, `status`, and `priority`
// query parameters. Defaults ("all" / empty) are omitted from the query.

use crate::Error;
use crate::client::ApiClient;
use crate::types::{WorkOrderCreateUpdate, WorkOrderResponse};

/// Server-side list filters. Sentinel `"all"` / empty values are omitted
/// from the query string entirely.
#[derive(Debug, Clone, Default)]
pub struct WorkOrderFilters {
    pub search: String,
    pub status: String,
    pub priority: String,
}

impl ApiClient {
    /// `GET /api/work-orders`
    pub async fn list_work_orders(
        &self,
        filters: &WorkOrderFilters,
    ) -> Result<Vec<WorkOrderResponse>, Error> {
        self.get_with_query(
            "api/work-orders",
            &[],
            &[
                ("search", filters.search.as_str()),
                ("status", filters.status.as_str()),
                ("priority", filters.priority.as_str()),
            ],
        )
        .await
    }

    /// `GET /api/work-orders/:id`
    pub async fn get_work_order(&self, id: &str) -> Result<WorkOrderResponse, Error> {
        self.get("api/work-orders/:id", &[("id", id)]).await
    }

    /// `POST /api/work-orders`
    ///
    /// The server assigns the identifier; the returned entity is the
    /// source of truth.
    pub async fn create_work_order(
        &self,
        body: &WorkOrderCreateUpdate,
    ) -> Result<WorkOrderResponse, Error> {
        self.post("api/work-orders", &[], body).await
    }

    /// `PUT /api/work-orders/:id`
    pub async fn update_work_order(
        &self,
        id: &str,
        body: &WorkOrderCreateUpdate,
    ) -> Result<WorkOrderResponse, Error> {
        self.put("api/work-orders/:id", &[("id", id)], body).await
    }

    /// `DELETE /api/work-orders/:id`
    pub async fn delete_work_order(&self, id: &str) -> Result<(), Error> {
        self.delete("api/work-orders/:id", &[("id", id)]).await
    }
}
