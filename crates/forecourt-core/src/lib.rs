//! Reactive data layer between `forecourt-api` and UI consumers.
//!
//! This crate owns the domain model, caching, and session logic for
//! the forecourt maintenance workspace:
//!
//! - **[`Stores`]** — One reactive store per backend resource (work
//!   orders, assets, stations, users, dashboard) over a shared
//!   [`forecourt_api::ApiClient`]. Each wraps a
//!   [`store::Collection`] (`tokio::sync::watch` snapshots) with
//!   sequence-checked refreshes: overlapping reloads can never settle
//!   stale data over fresh data.
//!
//! - **[`Session`]** — Single owner of the signed-in identity (bearer
//!   token + profile), restored from a pluggable [`SessionStore`] and
//!   published over a `watch` channel.
//!
//! - **Derived views** ([`select`]) — Pure filter/aggregate functions
//!   over snapshots, including the client-side dashboard summary used
//!   when the server endpoint is unavailable.
//!
//! - **Domain model** ([`model`]) — Canonical types with
//!   [`ResourceId`] supporting both numeric and string identifiers,
//!   and closed enums whose unrecognized wire spellings collapse to
//!   `Unknown` instead of failing deserialization.

pub mod attachments;
pub mod convert;
pub mod error;
pub mod model;
pub mod select;
pub mod session;
pub mod store;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::Error;
pub use session::{LandingView, MemorySessionStore, Session, SessionData, SessionStore};
pub use store::{
    AssetStore, CollectionState, DashboardState, DashboardStore, LoadPhase, OperationState,
    StationStore, Stores, UserStore, WorkOrderStore,
};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Asset,
    AssetCategory,
    AssetCondition,
    AssetStatus,
    DashboardSummary,
    Priority,
    ResourceId,
    Role,
    Station,
    User,
    UserStatus,
    WorkOrder,
    WorkOrderStatus,
};
