// ── Work order domain types ──

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::entity_id::ResourceId;

/// Work order lifecycle status.
///
/// `Unknown` absorbs any server value outside the enumeration so a bad
/// record renders as "Unknown" instead of failing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum WorkOrderStatus {
    Pending,
    #[strum(serialize = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
    Overdue,
    #[serde(other)]
    Unknown,
}

/// Work order priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

/// A photo or document attached to a work order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttachment {
    pub name: String,
    pub size: Option<u64>,
    pub url: String,
}

/// The canonical work order: a maintenance task tracked from request to
/// completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: ResourceId,
    pub title: String,
    pub description: Option<String>,
    pub status: WorkOrderStatus,
    pub priority: Priority,

    // Requester
    pub requester: Option<String>,
    pub contact: Option<String>,

    // Associations (by reference, not ownership)
    pub equipment_id: Option<String>,
    pub station_name: Option<String>,

    // Dates
    pub due_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,

    pub photos: Vec<PhotoAttachment>,
}

impl WorkOrder {
    /// Whether the order counts as open for dashboard purposes.
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            WorkOrderStatus::Pending | WorkOrderStatus::InProgress | WorkOrderStatus::Overdue
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(WorkOrderStatus::InProgress.to_string(), "In Progress");
        assert_eq!(WorkOrderStatus::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn unknown_status_value_deserializes_to_fallback() {
        let status: WorkOrderStatus =
            serde_json::from_value(serde_json::json!("unknown-value")).unwrap();
        assert_eq!(status, WorkOrderStatus::Unknown);
    }
}
