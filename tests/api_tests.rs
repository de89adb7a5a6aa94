//! API integration tests
//!
//! These run against a live server with a fresh database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create a piece of equipment and return its JSON
async fn create_equipment(client: &Client, name: &str, serial: &str) -> Value {
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": name,
            "category": 3,
            "serial_number": serial,
            "maintenance_interval_days": 30
        }))
        .send()
        .await
        .expect("Failed to send create equipment request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse equipment response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_equipment_without_history_is_unknown() {
    let client = Client::new();
    let equipment = create_equipment(&client, "Press #T1", "SN-T1").await;

    assert_eq!(equipment["maintenance_status"], 3);
    assert!(equipment["next_maintenance_due"].is_null());
    assert!(equipment["last_maintenance_date"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_duplicate_serial_number_conflicts() {
    let client = Client::new();
    create_equipment(&client, "Pump #T2", "SN-T2").await;

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": "Pump #T2 copy",
            "serial_number": "SN-T2"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_create_equipment_missing_name_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": "",
            "serial_number": "SN-T3"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_record_maintenance_updates_next_due() {
    let client = Client::new();
    let equipment = create_equipment(&client, "Lathe #T4", "SN-T4").await;
    let equipment_id = equipment["id"].as_str().expect("No equipment id");

    let response = client
        .post(format!("{}/maintenance", BASE_URL))
        .json(&json!({
            "equipment_id": equipment_id,
            "performed_by": "J. Doe",
            "date": "2025-01-15",
            "notes": "Oil change",
            "parts_used": [{"part_name": "Oil filter", "quantity": 1, "cost": 12.5}]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let updated: Value = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to fetch equipment")
        .json()
        .await
        .expect("Failed to parse equipment");

    // interval is 30 days, so the next due date trails the log date by 30
    assert_eq!(updated["last_maintenance_date"], "2025-01-15");
    assert_eq!(updated["next_maintenance_due"], "2025-02-14");
}

#[tokio::test]
#[ignore]
async fn test_record_maintenance_unknown_equipment_404() {
    let client = Client::new();

    let response = client
        .post(format!("{}/maintenance", BASE_URL))
        .json(&json!({
            "equipment_id": "00000000-0000-0000-0000-000000000000",
            "performed_by": "J. Doe",
            "date": "2025-01-15",
            "notes": "Oil change"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_alert_scan_is_idempotent() {
    let client = Client::new();

    // Equipment whose last maintenance puts it well past due
    let response = client
        .post(format!("{}/equipment", BASE_URL))
        .json(&json!({
            "name": "Conveyor #T5",
            "serial_number": "SN-T5",
            "maintenance_interval_days": 30,
            "last_maintenance_date": "2020-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let first: Vec<Value> = client
        .get(format!("{}/alerts/unresolved", BASE_URL))
        .send()
        .await
        .expect("Failed to list alerts")
        .json()
        .await
        .expect("Failed to parse alerts");

    let second: Vec<Value> = client
        .get(format!("{}/alerts/unresolved", BASE_URL))
        .send()
        .await
        .expect("Failed to list alerts")
        .json()
        .await
        .expect("Failed to parse alerts");

    // the second read must not have created duplicate alerts
    assert_eq!(first.len(), second.len());
}

#[tokio::test]
#[ignore]
async fn test_resolve_alert() {
    let client = Client::new();
    let equipment = create_equipment(&client, "Motor #T6", "SN-T6").await;
    let equipment_id = equipment["id"].as_str().expect("No equipment id");

    let alert: Value = client
        .post(format!("{}/alerts", BASE_URL))
        .json(&json!({
            "equipment_id": equipment_id,
            "alert_type": 3,
            "message": "Manual inspection requested"
        }))
        .send()
        .await
        .expect("Failed to create alert")
        .json()
        .await
        .expect("Failed to parse alert");

    let resolved: Value = client
        .put(format!("{}/alerts/{}/resolve", BASE_URL, alert["id"].as_str().unwrap()))
        .json(&json!({"resolved_by": "Supervisor"}))
        .send()
        .await
        .expect("Failed to resolve alert")
        .json()
        .await
        .expect("Failed to parse alert");

    assert_eq!(resolved["is_resolved"], true);
    assert_eq!(resolved["resolved_by"], "Supervisor");
}

#[tokio::test]
#[ignore]
async fn test_delete_equipment_cascades_logs() {
    let client = Client::new();
    let equipment = create_equipment(&client, "Robot #T7", "SN-T7").await;
    let equipment_id = equipment["id"].as_str().expect("No equipment id");

    let response = client
        .post(format!("{}/maintenance", BASE_URL))
        .json(&json!({
            "equipment_id": equipment_id,
            "performed_by": "J. Doe",
            "date": "2025-01-10",
            "notes": "Calibration"
        }))
        .send()
        .await
        .expect("Failed to record maintenance");
    assert_eq!(response.status(), 201);

    let response = client
        .delete(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to delete equipment");
    assert_eq!(response.status(), 204);

    let logs: Vec<Value> = client
        .get(format!("{}/maintenance?equipment_id={}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to list logs")
        .json()
        .await
        .expect("Failed to parse logs");
    assert!(logs.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_equipment_summary_counts() {
    let client = Client::new();

    let summary: Value = client
        .get(format!("{}/equipment/summary", BASE_URL))
        .send()
        .await
        .expect("Failed to fetch summary")
        .json()
        .await
        .expect("Failed to parse summary");

    let total = summary["total"].as_i64().expect("No total");
    let sum = summary["ok"].as_i64().unwrap()
        + summary["due_soon"].as_i64().unwrap()
        + summary["overdue"].as_i64().unwrap()
        + summary["unknown"].as_i64().unwrap();
    assert_eq!(total, sum);
}

#[tokio::test]
#[ignore]
async fn test_pdf_report_download() {
    let client = Client::new();

    let response = client
        .get(format!("{}/reports/pdf", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["content-type"],
        "application/pdf"
    );

    let bytes = response.bytes().await.expect("Failed to read body");
    assert!(bytes.starts_with(b"%PDF"));
}
