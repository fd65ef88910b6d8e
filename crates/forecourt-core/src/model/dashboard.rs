// ── Dashboard summary ──
//
// Derived, never independently persisted: either fetched as one unit
// from the server or recomputed from cached work orders and assets
// (see `select::summarize`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::asset::AssetCategory;
use super::work_order::WorkOrder;

/// Upper bound on the "recent work orders" list, wherever it is built.
pub const RECENT_WORK_ORDER_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_work_orders: u64,
    pub in_progress: u64,
    pub pending: u64,
    pub overdue: u64,

    /// Most recent work orders, newest first, at most
    /// [`RECENT_WORK_ORDER_LIMIT`].
    pub recent_work_orders: Vec<WorkOrder>,

    /// Asset counts per category for the KPI tiles.
    pub asset_totals: HashMap<AssetCategory, u64>,
}
