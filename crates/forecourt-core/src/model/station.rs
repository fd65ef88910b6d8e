// ── Station domain types ──
//
// A station is a physical site aggregating assets, utilities, and
// staff. Manager/technician/asset assignments are relationships by
// identifier reference, never embedded ownership.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity_id::ResourceId;

/// GPS position of the site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Site contact block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationContact {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub manager: Option<String>,
}

/// Equipment grouped by category ("Dispensers", "Tanks", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utility {
    pub name: String,
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyEquipment {
    pub name: String,
    pub last_inspection: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutArea {
    pub name: String,
    pub purpose: Option<String>,
}

/// The canonical station type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub id: ResourceId,
    pub name: String,

    // Address
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub coordinates: Option<Coordinates>,

    // Operations
    pub license_number: Option<String>,
    pub operating_hours: Option<String>,
    pub contact: StationContact,

    // Nested inventories
    pub equipment: Vec<EquipmentGroup>,
    pub utilities: Vec<Utility>,
    pub safety_equipment: Vec<SafetyEquipment>,
    pub photos: Vec<String>,
    pub layout_areas: Vec<LayoutArea>,

    // Assignments (by reference): exactly one manager, zero-or-more
    // technicians and assets.
    pub manager_id: Option<ResourceId>,
    pub technician_ids: Vec<ResourceId>,
    pub asset_ids: Vec<ResourceId>,
}
