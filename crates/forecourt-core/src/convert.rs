// ── API-to-domain type conversions ──
//
// Bridges raw `forecourt_api` response types into canonical
// `forecourt_core::model` domain types. Each `From` impl normalizes
// enum spellings, parses date strings into strong types, and fills
// sensible defaults for missing optional data. This is the single
// place where wire-shape quirks are allowed to exist.

use chrono::{DateTime, NaiveDate, Utc};

use forecourt_api::types::{
    AssetResponse, DashboardResponse, MaintenanceRecordResponse, PhotoResponse, StationResponse,
    UserResponse, WorkOrderResponse,
};

use crate::model::{
    Asset, AssetCategory, AssetCondition, AssetStatus, Coordinates, DashboardSummary,
    EquipmentGroup, LayoutArea, MaintenanceRecord, PerformanceMetrics, PhotoAttachment, Priority,
    RECENT_WORK_ORDER_LIMIT, ResourceId, Role, SafetyEquipment, Specifications, Station,
    StationContact, User, UserStatus, Utility, WorkOrder, WorkOrderStatus,
};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse a date that may arrive as `YYYY-MM-DD` or a full RFC 3339
/// timestamp, silently dropping unparseable values.
fn parse_date(raw: Option<&String>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

fn parse_datetime(raw: Option<&String>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Collapse the spelling variants of an enum-ish wire string:
/// lowercase, trimmed, separators unified to `-`.
fn canon(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '_'], "-")
}

pub(crate) fn work_order_status(raw: Option<&String>) -> WorkOrderStatus {
    match raw.map(|s| canon(s)).as_deref() {
        Some("pending") => WorkOrderStatus::Pending,
        Some("in-progress") => WorkOrderStatus::InProgress,
        Some("completed") => WorkOrderStatus::Completed,
        Some("cancelled" | "canceled") => WorkOrderStatus::Cancelled,
        Some("overdue") => WorkOrderStatus::Overdue,
        _ => WorkOrderStatus::Unknown,
    }
}

pub(crate) fn priority(raw: Option<&String>) -> Priority {
    match raw.map(|s| canon(s)).as_deref() {
        Some("low") => Priority::Low,
        Some("medium") => Priority::Medium,
        Some("high") => Priority::High,
        Some("critical") => Priority::Critical,
        _ => Priority::Unknown,
    }
}

pub(crate) fn asset_category(raw: Option<&String>) -> AssetCategory {
    match raw.map(|s| canon(s)).as_deref() {
        Some("fuel-dispensing") => AssetCategory::FuelDispensing,
        Some("storage") => AssetCategory::Storage,
        Some("safety") => AssetCategory::Safety,
        Some("utility") => AssetCategory::Utility,
        _ => AssetCategory::Unknown,
    }
}

pub(crate) fn asset_status(raw: Option<&String>) -> AssetStatus {
    match raw.map(|s| canon(s)).as_deref() {
        Some("active") => AssetStatus::Active,
        Some("maintenance-required") => AssetStatus::MaintenanceRequired,
        Some("out-of-service") => AssetStatus::OutOfService,
        Some("inactive") => AssetStatus::Inactive,
        _ => AssetStatus::Unknown,
    }
}

pub(crate) fn asset_condition(raw: Option<&String>) -> AssetCondition {
    match raw.map(|s| canon(s)).as_deref() {
        Some("excellent") => AssetCondition::Excellent,
        Some("good") => AssetCondition::Good,
        Some("fair") => AssetCondition::Fair,
        Some("poor") => AssetCondition::Poor,
        _ => AssetCondition::Unknown,
    }
}

pub(crate) fn role(raw: Option<&String>) -> Role {
    match raw.map(|s| canon(s)).as_deref() {
        Some("admin" | "administrator") => Role::Admin,
        Some("manager") => Role::Manager,
        Some("technician" | "tech") => Role::Technician,
        _ => Role::Unknown,
    }
}

pub(crate) fn user_status(raw: Option<&String>) -> UserStatus {
    match raw.map(|s| canon(s)).as_deref() {
        Some("active") => UserStatus::Active,
        Some("inactive") => UserStatus::Inactive,
        Some("suspended") => UserStatus::Suspended,
        _ => UserStatus::Unknown,
    }
}

// ── Work order ─────────────────────────────────────────────────────

impl From<PhotoResponse> for PhotoAttachment {
    fn from(raw: PhotoResponse) -> Self {
        Self {
            name: raw.name,
            size: raw.size,
            url: raw.url,
        }
    }
}

impl From<WorkOrderResponse> for WorkOrder {
    fn from(raw: WorkOrderResponse) -> Self {
        Self {
            id: ResourceId::from(&raw.id),
            title: raw.title,
            description: raw.description,
            status: work_order_status(raw.status.as_ref()),
            priority: priority(raw.priority.as_ref()),
            requester: raw.requester,
            contact: raw.contact,
            equipment_id: raw.equipment_id,
            station_name: raw.station_name,
            due_date: parse_date(raw.due_date.as_ref()),
            created_at: parse_datetime(raw.created_at.as_ref()),
            photos: raw.photos.into_iter().map(PhotoAttachment::from).collect(),
        }
    }
}

// ── Asset ──────────────────────────────────────────────────────────

impl From<MaintenanceRecordResponse> for MaintenanceRecord {
    fn from(raw: MaintenanceRecordResponse) -> Self {
        Self {
            record_type: raw.record_type,
            technician: raw.technician,
            date: parse_date(raw.date.as_ref()),
            duration: raw.duration,
        }
    }
}

impl From<AssetResponse> for Asset {
    fn from(raw: AssetResponse) -> Self {
        Self {
            id: ResourceId::from(&raw.id),
            name: raw.name,
            category: asset_category(raw.category.as_ref()),
            status: asset_status(raw.status.as_ref()),
            condition: asset_condition(raw.condition.as_ref()),
            location: raw.location,
            manufacturer: raw.manufacturer,
            next_maintenance: parse_date(raw.next_maintenance.as_ref()),
            specifications: raw.specifications.map_or_else(Specifications::default, |s| {
                Specifications {
                    model: s.model,
                    flow_rate: s.flow_rate,
                    accuracy: s.accuracy,
                }
            }),
            performance: raw.performance.map_or_else(PerformanceMetrics::default, |p| {
                PerformanceMetrics {
                    usage_hours: p.usage_hours,
                    anomaly_count: p.anomaly_count,
                    expected_lifespan: p.expected_lifespan,
                }
            }),
            maintenance_history: raw
                .maintenance_history
                .into_iter()
                .map(MaintenanceRecord::from)
                .collect(),
            photos: raw.photos,
        }
    }
}

// ── Station ────────────────────────────────────────────────────────

impl From<StationResponse> for Station {
    fn from(raw: StationResponse) -> Self {
        let coordinates = match (raw.latitude, raw.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };

        Self {
            id: ResourceId::from(&raw.id),
            name: raw.name,
            address: raw.address,
            city: raw.city,
            region: raw.region,
            postal_code: raw.postal_code,
            coordinates,
            license_number: raw.license_number,
            operating_hours: raw.operating_hours,
            contact: raw.contact.map_or_else(StationContact::default, |c| {
                StationContact {
                    phone: c.phone,
                    email: c.email,
                    manager: c.manager,
                }
            }),
            equipment: raw
                .equipment
                .into_iter()
                .map(|g| EquipmentGroup {
                    category: g.category,
                    items: g.items,
                })
                .collect(),
            utilities: raw
                .utilities
                .into_iter()
                .map(|u| Utility {
                    name: u.name,
                    provider: u.provider,
                })
                .collect(),
            safety_equipment: raw
                .safety_equipment
                .into_iter()
                .map(|s| SafetyEquipment {
                    name: s.name,
                    last_inspection: parse_date(s.last_inspection.as_ref()),
                })
                .collect(),
            photos: raw.photos,
            layout_areas: raw
                .layout_areas
                .into_iter()
                .map(|a| LayoutArea {
                    name: a.name,
                    purpose: a.purpose,
                })
                .collect(),
            manager_id: raw.manager_id.as_ref().map(ResourceId::from),
            technician_ids: raw.technician_ids.iter().map(ResourceId::from).collect(),
            asset_ids: raw.asset_ids.iter().map(ResourceId::from).collect(),
        }
    }
}

// ── User ───────────────────────────────────────────────────────────

impl From<UserResponse> for User {
    fn from(raw: UserResponse) -> Self {
        Self {
            id: ResourceId::from(&raw.id),
            first_name: raw.first_name,
            last_name: raw.last_name,
            email: raw.email,
            phone: raw.phone,
            role: role(raw.role.as_ref()),
            status: user_status(raw.status.as_ref()),
            station: raw.station,
            join_date: parse_date(raw.join_date.as_ref()),
            avatar: raw.avatar,
        }
    }
}

// ── Dashboard ──────────────────────────────────────────────────────

impl From<DashboardResponse> for DashboardSummary {
    fn from(raw: DashboardResponse) -> Self {
        let mut recent: Vec<WorkOrder> = raw
            .recent_work_orders
            .into_iter()
            .map(WorkOrder::from)
            .collect();
        recent.truncate(RECENT_WORK_ORDER_LIMIT);

        Self {
            total_work_orders: raw.total_work_orders,
            in_progress: raw.in_progress,
            pending: raw.pending,
            overdue: raw.overdue,
            recent_work_orders: recent,
            asset_totals: raw
                .asset_totals
                .iter()
                .map(|(k, v)| (asset_category(Some(k)), *v))
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_spelling_variants_normalize() {
        for raw in ["in-progress", "In Progress", "IN_PROGRESS", " in progress "] {
            assert_eq!(
                work_order_status(Some(&raw.to_owned())),
                WorkOrderStatus::InProgress,
                "variant {raw:?} should normalize"
            );
        }
    }

    #[test]
    fn unknown_status_maps_to_fallback_not_panic() {
        assert_eq!(
            work_order_status(Some(&"unknown-value".to_owned())),
            WorkOrderStatus::Unknown
        );
        assert_eq!(work_order_status(None), WorkOrderStatus::Unknown);
    }

    #[test]
    fn category_variants_normalize() {
        for raw in ["Fuel Dispensing", "fuel_dispensing", "fuel-dispensing"] {
            assert_eq!(
                asset_category(Some(&raw.to_owned())),
                AssetCategory::FuelDispensing
            );
        }
    }

    #[test]
    fn dates_parse_both_shapes() {
        assert_eq!(
            parse_date(Some(&"2025-03-01".to_owned())),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(
            parse_date(Some(&"2025-03-01T10:30:00Z".to_owned())),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(parse_date(Some(&"next tuesday".to_owned())), None);
    }

    #[test]
    fn dashboard_recent_list_is_bounded() {
        let mk = |i: u64| forecourt_api::types::WorkOrderResponse {
            id: serde_json::json!(i),
            title: format!("wo {i}"),
            description: None,
            status: None,
            priority: None,
            requester: None,
            contact: None,
            equipment_id: None,
            station_name: None,
            due_date: None,
            created_at: None,
            photos: Vec::new(),
        };
        let raw = DashboardResponse {
            total_work_orders: 10,
            in_progress: 2,
            pending: 3,
            overdue: 1,
            recent_work_orders: (0..10).map(mk).collect(),
            asset_totals: std::collections::HashMap::new(),
        };

        let summary = DashboardSummary::from(raw);
        assert_eq!(summary.recent_work_orders.len(), RECENT_WORK_ORDER_LIMIT);
    }
}
