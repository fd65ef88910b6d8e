// Dashboard summary endpoint
//
// The summary is computed server-side and fetched as one unit. The core
// crate can also recompute it from cached work orders and assets when
// this endpoint is unavailable.

use crate::Error;
use crate::client::ApiClient;
use crate::types::DashboardResponse;

impl ApiClient {
    /// `GET /api/dashboard`
    pub async fn get_dashboard_summary(&self) -> Result<DashboardResponse, Error> {
        self.get("api/dashboard", &[]).await
    }
}
