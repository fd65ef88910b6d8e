//! Store behavior against a mock HTTP server: load lifecycle,
//! fallback installation, and cache maintenance after writes.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use forecourt_api::ApiClient;
use forecourt_api::types::{AssetCreateUpdate, WorkOrderCreateUpdate};
use forecourt_core::store::LoadPhase;
use forecourt_core::{ResourceId, Stores, WorkOrderStatus};

fn stores_for(server: &MockServer) -> Stores {
    let client = ApiClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    Stores::new(Arc::new(client))
}

fn create_body(title: &str) -> WorkOrderCreateUpdate {
    WorkOrderCreateUpdate {
        title: title.to_owned(),
        description: None,
        status: None,
        priority: None,
        requester: None,
        contact: None,
        equipment_id: None,
        station_name: None,
        due_date: None,
    }
}

#[tokio::test]
async fn successful_refresh_reaches_loaded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/work-orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "Replace nozzle", "status": "pending" },
            { "id": 2, "title": "Calibrate pump", "status": "In Progress" },
        ])))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    stores.work_orders.refresh().await.unwrap();

    let state = stores.work_orders.state();
    assert_eq!(state.phase, LoadPhase::Loaded);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].status, WorkOrderStatus::InProgress);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn failed_refresh_keeps_previous_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/work-orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "Replace nozzle" },
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/work-orders"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "db unavailable" })),
        )
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    stores.work_orders.refresh().await.unwrap();
    assert!(stores.work_orders.refresh().await.is_err());

    let state = stores.work_orders.state();
    assert_eq!(state.phase, LoadPhase::Failed);
    assert_eq!(state.items.len(), 1, "old data must survive the failure");
    assert!(state.error.as_deref().unwrap_or_default().contains("db unavailable"));
}

#[tokio::test]
async fn first_station_failure_installs_tagged_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stations"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    assert!(stores.stations.refresh().await.is_err());

    let state = stores.stations.state();
    assert_eq!(state.phase, LoadPhase::ShowingFallback);
    assert!(!state.items.is_empty(), "fallback stations must be present");
    assert!(state.error.is_some());
}

#[tokio::test]
async fn station_failure_after_live_data_does_not_regress_to_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 77, "name": "Live Station" },
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stations"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    stores.stations.refresh().await.unwrap();
    assert!(stores.stations.refresh().await.is_err());

    let state = stores.stations.state();
    assert_eq!(state.phase, LoadPhase::Failed);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Live Station");
}

#[tokio::test]
async fn empty_roster_then_failure_does_not_install_fallback() {
    // An empty server response is still live data: a later failure
    // keeps the empty roster instead of substituting built-in users.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    stores.users.refresh().await.unwrap();
    assert!(stores.users.refresh().await.is_err());

    let state = stores.users.state();
    assert_eq!(state.phase, LoadPhase::Failed);
    assert!(state.items.is_empty(), "fallback must not replace live data");
}

#[tokio::test]
async fn first_user_failure_installs_fallback_roster() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    assert!(stores.users.refresh().await.is_err());

    let state = stores.users.state();
    assert_eq!(state.phase, LoadPhase::ShowingFallback);
    assert!(!state.items.is_empty());
}

#[tokio::test]
async fn create_appends_server_assigned_entity_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/work-orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/work-orders"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42, "title": "Inspect canopy lights", "status": "pending",
        })))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    stores.work_orders.refresh().await.unwrap();
    let created = stores
        .work_orders
        .create(create_body("Inspect canopy lights"))
        .await
        .unwrap();

    assert_eq!(created.id, ResourceId::from(42u64));
    let snap = stores.work_orders.snapshot();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap[0].title, "Inspect canopy lights");
}

#[tokio::test]
async fn blank_title_fails_locally_without_traffic() {
    let server = MockServer::start().await;
    // No POST mock mounted: any request would 404 and fail differently.
    let stores = stores_for(&server);

    let err = stores.work_orders.create(create_body("  ")).await.unwrap_err();
    assert!(matches!(
        err,
        forecourt_core::Error::Validation { field, .. } if field == "title"
    ));
}

#[tokio::test]
async fn blank_asset_name_fails_locally_without_traffic() {
    let server = MockServer::start().await;
    let stores = stores_for(&server);

    let record = AssetCreateUpdate {
        name: " ".to_owned(),
        category: None,
        status: None,
        condition: None,
        location: None,
        manufacturer: None,
        next_maintenance: None,
    };
    let err = stores.assets.create(record).await.unwrap_err();
    assert!(matches!(
        err,
        forecourt_core::Error::Validation { field, .. } if field == "name"
    ));
}

#[tokio::test]
async fn station_detail_failure_is_recorded_without_touching_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Hilltop Fuel & Go" },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stations/9"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    stores.stations.refresh().await.unwrap();
    assert!(stores.stations.fetch(&ResourceId::from(9u64)).await.is_err());

    let list = stores.stations.state();
    assert_eq!(list.phase, LoadPhase::Loaded);
    assert_eq!(list.items.len(), 1);
    assert!(list.error.is_none());

    let detail = stores.stations.detail_state();
    assert!(!detail.in_flight);
    assert!(detail.error.as_deref().unwrap_or_default().contains("boom"));
}

#[tokio::test]
async fn oversized_photo_is_rejected_and_recorded() {
    // No upload mock mounted: the size check must stop the request
    // before any traffic.
    let server = MockServer::start().await;
    let stores = stores_for(&server);

    let too_big = vec![0_u8; 5 * 1024 * 1024 + 1];
    let err = stores
        .stations
        .upload_photo(&ResourceId::from(1u64), "pump.jpg", too_big)
        .await
        .unwrap_err();

    assert!(matches!(err, forecourt_core::Error::Attachment(_)));
    let upload = stores.stations.upload_state();
    assert!(!upload.in_flight);
    assert!(upload.error.is_some());
}

#[tokio::test]
async fn delete_tombstones_the_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/work-orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 7, "title": "doomed" },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/work-orders/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/work-orders/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "title": "late echo",
        })))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    stores.work_orders.refresh().await.unwrap();
    stores
        .work_orders
        .remove(&ResourceId::from(7u64))
        .await
        .unwrap();

    // A detail fetch that raced the delete settles afterwards; the
    // deleted id must not reappear.
    let _ = stores.work_orders.fetch(&ResourceId::from(7u64)).await;
    assert!(stores.work_orders.snapshot().is_empty());
}

#[tokio::test]
async fn failed_write_records_error_without_phase_change() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/work-orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "keep me" },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/work-orders/1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "nope" })))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    stores.work_orders.refresh().await.unwrap();
    assert!(stores
        .work_orders
        .remove(&ResourceId::from(1u64))
        .await
        .is_err());

    let state = stores.work_orders.state();
    assert_eq!(state.phase, LoadPhase::Loaded);
    assert_eq!(state.items.len(), 1);
    assert!(state.error.is_some());
}

#[tokio::test]
async fn dashboard_endpoint_failure_derives_from_caches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/work-orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "a", "status": "pending" },
            { "id": 2, "title": "b", "status": "In Progress" },
            { "id": 3, "title": "c", "status": "pending" },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/assets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Pump 1", "category": "Fuel Dispensing" },
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    stores.work_orders.refresh().await.unwrap();
    stores.assets.refresh().await.unwrap();
    assert!(stores.refresh_dashboard().await.is_err());

    let dash = stores.dashboard.state();
    assert_eq!(dash.phase, LoadPhase::ShowingFallback);
    assert_eq!(dash.summary.total_work_orders, 3);
    assert_eq!(dash.summary.pending, 2);
    assert_eq!(dash.summary.in_progress, 1);
}

#[tokio::test]
async fn dashboard_endpoint_success_is_authoritative() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalWorkOrders": 12,
            "inProgress": 4,
            "pending": 5,
            "overdue": 3,
            "recentWorkOrders": [],
            "assetsByCategory": { "Fuel Dispensing": 6 },
        })))
        .mount(&server)
        .await;

    let stores = stores_for(&server);
    stores.refresh_dashboard().await.unwrap();

    let dash = stores.dashboard.state();
    assert_eq!(dash.phase, LoadPhase::Loaded);
    assert_eq!(dash.summary.total_work_orders, 12);
    assert_eq!(
        dash.summary.asset_totals[&forecourt_core::AssetCategory::FuelDispensing],
        6
    );
}
