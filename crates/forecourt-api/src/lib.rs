//! Async client for the Forecourt CMMS REST API.
//!
//! A thin typed layer over `reqwest`: path templating with
//! percent-encoding, bearer-token auth, query-filter handling (the
//! `"all"` / empty sentinels are never sent), and uniform error
//! mapping. Wire-shape types live in [`types`]; conversion into
//! domain types is `forecourt-core`'s job.

pub mod assets;
pub mod auth;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod stations;
pub mod transport;
pub mod types;
pub mod users;
pub mod work_orders;

pub use assets::AssetFilters;
pub use client::ApiClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
pub use users::UserFilters;
pub use work_orders::WorkOrderFilters;
