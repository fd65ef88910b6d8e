// Wire types for the Forecourt CMMS backend.
//
// The backend grew organically and serves the same logical field under
// several spellings (camelCase, snake_case, abbreviated). Each struct
// here is the single canonical shape; `serde(alias)` collapses the
// variants at the deserialization boundary so nothing downstream ever
// branches on field names.

use serde::{Deserialize, Serialize};

// ── Work orders ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct WorkOrderResponse {
    #[serde(alias = "_id")]
    pub id: serde_json::Value,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, alias = "requesterName", alias = "requested_by")]
    pub requester: Option<String>,
    #[serde(default, alias = "contactInfo", alias = "contact_info")]
    pub contact: Option<String>,
    #[serde(default, alias = "equipmentId", alias = "equipment")]
    pub equipment_id: Option<String>,
    #[serde(default, alias = "stationName", alias = "station")]
    pub station_name: Option<String>,
    #[serde(default, alias = "dueDate")]
    pub due_date: Option<String>,
    #[serde(default, alias = "createdAt", alias = "creation_date")]
    pub created_at: Option<String>,
    #[serde(default, alias = "attachments")]
    pub photos: Vec<PhotoResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoResponse {
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
    pub url: String,
}

/// Create/update payload. The server assigns identifiers; the client
/// never sends one on create.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderCreateUpdate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

// ── Assets ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct AssetResponse {
    #[serde(alias = "_id")]
    pub id: serde_json::Value,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default, alias = "nextMaintenance", alias = "next_maintenance_date")]
    pub next_maintenance: Option<String>,
    #[serde(default, alias = "specs")]
    pub specifications: Option<SpecificationsResponse>,
    #[serde(default, alias = "performanceMetrics")]
    pub performance: Option<PerformanceResponse>,
    #[serde(default, alias = "maintenanceHistory")]
    pub maintenance_history: Vec<MaintenanceRecordResponse>,
    #[serde(default)]
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpecificationsResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, alias = "flowRate")]
    pub flow_rate: Option<String>,
    #[serde(default)]
    pub accuracy: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceResponse {
    #[serde(default, alias = "usageHours")]
    pub usage_hours: Option<u64>,
    #[serde(default, alias = "anomalyCount", alias = "anomalies")]
    pub anomaly_count: Option<u32>,
    #[serde(default, alias = "expectedLifespan")]
    pub expected_lifespan: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceRecordResponse {
    #[serde(rename = "type", alias = "maintenanceType")]
    pub record_type: String,
    #[serde(default)]
    pub technician: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCreateUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_maintenance: Option<String>,
}

// ── Stations ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct StationResponse {
    #[serde(alias = "_id")]
    pub id: serde_json::Value,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, alias = "postalCode", alias = "zip")]
    pub postal_code: Option<String>,
    #[serde(default, alias = "lat")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "lng", alias = "lon")]
    pub longitude: Option<f64>,
    #[serde(default, alias = "licenseNumber")]
    pub license_number: Option<String>,
    #[serde(default, alias = "operatingHours")]
    pub operating_hours: Option<String>,
    #[serde(default)]
    pub contact: Option<StationContactResponse>,
    #[serde(default)]
    pub equipment: Vec<EquipmentGroupResponse>,
    #[serde(default)]
    pub utilities: Vec<UtilityResponse>,
    #[serde(default, alias = "safetyEquipment")]
    pub safety_equipment: Vec<SafetyEquipmentResponse>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default, alias = "layoutAreas")]
    pub layout_areas: Vec<LayoutAreaResponse>,
    #[serde(default, alias = "managerId")]
    pub manager_id: Option<serde_json::Value>,
    #[serde(default, alias = "technicianIds")]
    pub technician_ids: Vec<serde_json::Value>,
    #[serde(default, alias = "assetIds")]
    pub asset_ids: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationContactResponse {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub manager: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentGroupResponse {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UtilityResponse {
    pub name: String,
    #[serde(default)]
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SafetyEquipmentResponse {
    pub name: String,
    #[serde(default, alias = "lastInspection")]
    pub last_inspection: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutAreaResponse {
    pub name: String,
    #[serde(default)]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationCreateUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<String>,
}

/// Response to a station photo upload: the stored attachment reference.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUploadResponse {
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

// ── Users ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    #[serde(alias = "_id")]
    pub id: serde_json::Value,
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "assignedStation", alias = "station_name")]
    pub station: Option<String>,
    #[serde(default, alias = "joinDate")]
    pub join_date: Option<String>,
    #[serde(default, alias = "avatarUrl")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
}

// ── Dashboard ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardResponse {
    #[serde(default, alias = "totalWorkOrders")]
    pub total_work_orders: u64,
    #[serde(default, alias = "inProgress")]
    pub in_progress: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub overdue: u64,
    #[serde(default, alias = "recentWorkOrders")]
    pub recent_work_orders: Vec<WorkOrderResponse>,
    #[serde(default, alias = "assetsByCategory", alias = "assetTotals")]
    pub asset_totals: std::collections::HashMap<String, u64>,
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}
