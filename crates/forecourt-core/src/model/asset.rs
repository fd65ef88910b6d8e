// ── Asset domain types ──
//
// An asset is a piece of station equipment tracked for maintenance and
// lifecycle: dispensers, tanks, safety gear, utility plant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::entity_id::ResourceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[non_exhaustive]
pub enum AssetCategory {
    #[serde(rename = "Fuel Dispensing")]
    #[strum(serialize = "Fuel Dispensing")]
    FuelDispensing,
    Storage,
    Safety,
    Utility,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[non_exhaustive]
pub enum AssetStatus {
    Active,
    #[serde(rename = "Maintenance Required")]
    #[strum(serialize = "Maintenance Required")]
    MaintenanceRequired,
    #[serde(rename = "Out of Service")]
    #[strum(serialize = "Out of Service")]
    OutOfService,
    Inactive,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[non_exhaustive]
pub enum AssetCondition {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(other)]
    Unknown,
}

/// Manufacturer specifications, as recorded on the asset sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Specifications {
    pub model: Option<String>,
    pub flow_rate: Option<String>,
    pub accuracy: Option<String>,
}

/// Usage and anomaly metrics accumulated over the asset's life.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub usage_hours: Option<u64>,
    pub anomaly_count: Option<u32>,
    pub expected_lifespan: Option<String>,
}

/// One entry in the asset's maintenance history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub record_type: String,
    pub technician: Option<String>,
    pub date: Option<NaiveDate>,
    pub duration: Option<String>,
}

/// The canonical asset type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: ResourceId,
    pub name: String,
    pub category: AssetCategory,
    pub status: AssetStatus,
    pub condition: AssetCondition,
    pub location: Option<String>,
    pub manufacturer: Option<String>,
    pub next_maintenance: Option<NaiveDate>,

    pub specifications: Specifications,
    pub performance: PerformanceMetrics,
    pub maintenance_history: Vec<MaintenanceRecord>,
    pub photos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels() {
        assert_eq!(AssetCategory::FuelDispensing.to_string(), "Fuel Dispensing");
        assert_eq!(AssetStatus::MaintenanceRequired.to_string(), "Maintenance Required");
        assert_eq!(AssetStatus::OutOfService.to_string(), "Out of Service");
    }
}
