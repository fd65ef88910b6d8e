// ── Derived views ──
//
// Pure functions over collection snapshots: filtering, counting, and
// the client-side dashboard summary. Nothing here touches the network
// or mutates state, so every view is trivially recomputable whenever
// a snapshot changes.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::model::{
    Asset, AssetCategory, AssetStatus, DashboardSummary, Priority, Role, User, UserStatus,
    WorkOrder, WorkOrderStatus, RECENT_WORK_ORDER_LIMIT,
};

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ── Work orders ────────────────────────────────────────────────────

/// Work-order filter. The default value selects everything, so a
/// freshly constructed query is the identity view.
#[derive(Debug, Clone, Default)]
pub struct WorkOrderQuery {
    /// Case-insensitive substring over title, id, and station name.
    pub search: String,
    pub status: Option<WorkOrderStatus>,
    pub priority: Option<Priority>,
}

#[must_use]
pub fn work_orders(items: &[Arc<WorkOrder>], query: &WorkOrderQuery) -> Vec<Arc<WorkOrder>> {
    let needle = query.search.trim().to_lowercase();
    items
        .iter()
        .filter(|wo| query.status.is_none_or(|s| wo.status == s))
        .filter(|wo| query.priority.is_none_or(|p| wo.priority == p))
        .filter(|wo| {
            needle.is_empty()
                || matches(&wo.title, &needle)
                || matches(&wo.id.to_string(), &needle)
                || wo
                    .station_name
                    .as_deref()
                    .is_some_and(|s| matches(s, &needle))
        })
        .cloned()
        .collect()
}

// ── Assets ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct AssetQuery {
    /// Case-insensitive substring over name, id, and location.
    pub search: String,
    pub category: Option<AssetCategory>,
    pub status: Option<AssetStatus>,
}

#[must_use]
pub fn assets(items: &[Arc<Asset>], query: &AssetQuery) -> Vec<Arc<Asset>> {
    let needle = query.search.trim().to_lowercase();
    items
        .iter()
        .filter(|a| query.category.is_none_or(|c| a.category == c))
        .filter(|a| query.status.is_none_or(|s| a.status == s))
        .filter(|a| {
            needle.is_empty()
                || matches(&a.name, &needle)
                || matches(&a.id.to_string(), &needle)
                || a.location.as_deref().is_some_and(|l| matches(l, &needle))
        })
        .cloned()
        .collect()
}

// ── Users ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    /// Case-insensitive substring over full name, email, and id.
    pub search: String,
    pub role: Option<Role>,
    pub status: Option<UserStatus>,
}

#[must_use]
pub fn users(items: &[Arc<User>], query: &UserQuery) -> Vec<Arc<User>> {
    let needle = query.search.trim().to_lowercase();
    items
        .iter()
        .filter(|u| query.role.is_none_or(|r| u.role == r))
        .filter(|u| query.status.is_none_or(|s| u.status == s))
        .filter(|u| {
            needle.is_empty()
                || matches(&u.full_name(), &needle)
                || matches(&u.email, &needle)
                || matches(&u.id.to_string(), &needle)
        })
        .cloned()
        .collect()
}

/// Work orders assigned to one technician's stations, open first.
#[must_use]
pub fn technician_tasks(items: &[Arc<WorkOrder>], station: &str) -> Vec<Arc<WorkOrder>> {
    let mut tasks: Vec<Arc<WorkOrder>> = items
        .iter()
        .filter(|wo| {
            wo.station_name
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(station))
        })
        .cloned()
        .collect();
    tasks.sort_by_key(|wo| !wo.is_open());
    tasks
}

// ── Aggregation ────────────────────────────────────────────────────

/// Count items into buckets produced by `key`.
#[must_use]
pub fn count_by<T, K, F>(items: &[Arc<T>], key: F) -> HashMap<K, u64>
where
    K: std::hash::Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Percentage of `part` in `whole`, 0.0 when the whole is empty.
#[must_use]
pub fn pct(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    {
        part as f64 / whole as f64 * 100.0
    }
}

fn is_overdue(wo: &WorkOrder, today: NaiveDate) -> bool {
    wo.status == WorkOrderStatus::Overdue
        || (wo.is_open() && wo.due_date.is_some_and(|due| due < today))
}

/// Build the dashboard summary from cached collections. Used when the
/// server's summary endpoint is unavailable, so the dashboard keeps
/// rendering from whatever data is already on hand.
#[must_use]
pub fn summarize(work_orders: &[Arc<WorkOrder>], assets: &[Arc<Asset>]) -> DashboardSummary {
    let today = Utc::now().date_naive();

    let mut recent: Vec<Arc<WorkOrder>> = work_orders.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_WORK_ORDER_LIMIT);

    DashboardSummary {
        total_work_orders: work_orders.len() as u64,
        in_progress: work_orders
            .iter()
            .filter(|wo| wo.status == WorkOrderStatus::InProgress)
            .count() as u64,
        pending: work_orders
            .iter()
            .filter(|wo| wo.status == WorkOrderStatus::Pending)
            .count() as u64,
        overdue: work_orders.iter().filter(|wo| is_overdue(wo, today)).count() as u64,
        recent_work_orders: recent.iter().map(|wo| (**wo).clone()).collect(),
        asset_totals: count_by(assets, |a| a.category),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{AssetCondition, AssetStatus, PerformanceMetrics, ResourceId, Specifications};
    use chrono::TimeZone;

    fn wo(id: u64, title: &str, status: WorkOrderStatus, station: Option<&str>) -> Arc<WorkOrder> {
        Arc::new(WorkOrder {
            id: ResourceId::from(id),
            title: title.to_owned(),
            description: None,
            status,
            priority: Priority::Medium,
            requester: None,
            contact: None,
            equipment_id: None,
            station_name: station.map(str::to_owned),
            due_date: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, id as u32 % 28 + 1, 0, 0, 0).single(),
            photos: Vec::new(),
        })
    }

    fn asset(id: u64, name: &str, category: AssetCategory, location: Option<&str>) -> Arc<Asset> {
        Arc::new(Asset {
            id: ResourceId::from(id),
            name: name.to_owned(),
            category,
            status: AssetStatus::Active,
            condition: AssetCondition::Good,
            location: location.map(str::to_owned),
            manufacturer: None,
            next_maintenance: None,
            specifications: Specifications::default(),
            performance: PerformanceMetrics::default(),
            maintenance_history: Vec::new(),
            photos: Vec::new(),
        })
    }

    #[test]
    fn default_query_is_identity() {
        let items = vec![
            wo(1, "Replace nozzle", WorkOrderStatus::Pending, None),
            wo(2, "Calibrate pump", WorkOrderStatus::Completed, None),
        ];
        let out = work_orders(&items, &WorkOrderQuery::default());
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, items[0].id);
        assert_eq!(out[1].id, items[1].id);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let items = vec![
            wo(1, "Replace nozzle", WorkOrderStatus::Pending, Some("North Station")),
            wo(2, "Calibrate pump", WorkOrderStatus::Pending, Some("South Station")),
        ];

        let by_title = work_orders(
            &items,
            &WorkOrderQuery {
                search: "NOZZLE".into(),
                ..WorkOrderQuery::default()
            },
        );
        assert_eq!(by_title.len(), 1);

        let by_station = work_orders(
            &items,
            &WorkOrderQuery {
                search: "south".into(),
                ..WorkOrderQuery::default()
            },
        );
        assert_eq!(by_station.len(), 1);
        assert_eq!(by_station[0].title, "Calibrate pump");

        let by_id = work_orders(
            &items,
            &WorkOrderQuery {
                search: "2".into(),
                ..WorkOrderQuery::default()
            },
        );
        assert_eq!(by_id.len(), 1);
    }

    #[test]
    fn filters_compose() {
        let items = vec![
            wo(1, "a", WorkOrderStatus::Pending, None),
            wo(2, "b", WorkOrderStatus::InProgress, None),
            wo(3, "c", WorkOrderStatus::Pending, None),
        ];
        let out = work_orders(
            &items,
            &WorkOrderQuery {
                status: Some(WorkOrderStatus::Pending),
                ..WorkOrderQuery::default()
            },
        );
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn asset_search_covers_name_and_location() {
        let items = vec![
            asset(1, "Fuel Pump #1", AssetCategory::FuelDispensing, Some("Forecourt A")),
            asset(2, "Storage Tank #1", AssetCategory::Storage, Some("Underground")),
        ];

        let by_name = assets(
            &items,
            &AssetQuery {
                search: "pump".into(),
                ..AssetQuery::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Fuel Pump #1");

        let by_location = assets(
            &items,
            &AssetQuery {
                search: "underground".into(),
                ..AssetQuery::default()
            },
        );
        assert_eq!(by_location.len(), 1);
        assert_eq!(by_location[0].name, "Storage Tank #1");
    }

    #[test]
    fn pct_guards_division_by_zero() {
        assert_eq!(pct(5, 0), 0.0);
        assert!((pct(1, 4) - 25.0).abs() < f64::EPSILON);
        assert!((pct(7, 7) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn status_counts_partition_the_collection() {
        let items = vec![
            wo(1, "a", WorkOrderStatus::Pending, None),
            wo(2, "b", WorkOrderStatus::InProgress, None),
            wo(3, "c", WorkOrderStatus::Pending, None),
            wo(4, "d", WorkOrderStatus::Completed, None),
        ];
        let counts = count_by(&items, |w| w.status);
        let total: u64 = counts.values().sum();
        assert_eq!(total as usize, items.len());
    }

    #[test]
    fn summarize_counts_and_bounds_recent() {
        let items: Vec<Arc<WorkOrder>> = (1..=8)
            .map(|i| {
                wo(
                    i,
                    "t",
                    if i % 2 == 0 {
                        WorkOrderStatus::Pending
                    } else {
                        WorkOrderStatus::InProgress
                    },
                    None,
                )
            })
            .collect();
        let pumps = vec![
            asset(1, "p", AssetCategory::FuelDispensing, None),
            asset(2, "q", AssetCategory::FuelDispensing, None),
            asset(3, "t", AssetCategory::Storage, None),
        ];

        let summary = summarize(&items, &pumps);
        assert_eq!(summary.total_work_orders, 8);
        assert_eq!(summary.pending, 4);
        assert_eq!(summary.in_progress, 4);
        assert_eq!(summary.recent_work_orders.len(), RECENT_WORK_ORDER_LIMIT);
        assert_eq!(summary.asset_totals[&AssetCategory::FuelDispensing], 2);

        // Newest first.
        let first = summary.recent_work_orders[0].created_at;
        let last = summary.recent_work_orders[RECENT_WORK_ORDER_LIMIT - 1].created_at;
        assert!(first >= last);
    }

    #[test]
    fn overdue_counts_past_due_open_orders() {
        let mut late = (*wo(1, "late", WorkOrderStatus::Pending, None)).clone();
        late.due_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        let mut done = (*wo(2, "done", WorkOrderStatus::Completed, None)).clone();
        done.due_date = NaiveDate::from_ymd_opt(2020, 1, 1);

        let items = vec![Arc::new(late), Arc::new(done)];
        let summary = summarize(&items, &[]);
        assert_eq!(summary.overdue, 1);
    }

    #[test]
    fn technician_tasks_filter_by_station_open_first() {
        let items = vec![
            wo(1, "done", WorkOrderStatus::Completed, Some("North")),
            wo(2, "open", WorkOrderStatus::Pending, Some("North")),
            wo(3, "other", WorkOrderStatus::Pending, Some("South")),
        ];
        let tasks = technician_tasks(&items, "north");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "open");
        assert_eq!(tasks[1].title, "done");
    }
}
