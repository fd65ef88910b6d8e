// ── Domain model ──

pub mod asset;
pub mod dashboard;
pub mod entity_id;
pub mod station;
pub mod user;
pub mod work_order;

pub use asset::{
    Asset, AssetCategory, AssetCondition, AssetStatus, MaintenanceRecord, PerformanceMetrics,
    Specifications,
};
pub use dashboard::{DashboardSummary, RECENT_WORK_ORDER_LIMIT};
pub use entity_id::ResourceId;
pub use station::{
    Coordinates, EquipmentGroup, LayoutArea, SafetyEquipment, Station, StationContact, Utility,
};
pub use user::{Role, User, UserStatus};
pub use work_order::{PhotoAttachment, Priority, WorkOrder, WorkOrderStatus};
