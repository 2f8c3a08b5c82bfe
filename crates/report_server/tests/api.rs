use std::path::Path;

use maintenance_report::ReportBuilder;
use report_server::error::ErrorBody;
use serde_json::{json, Value};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        report_server::serve(listener, ReportBuilder::new())
            .await
            .expect("serve");
    });
    format!("http://{addr}")
}

fn record(id: &str) -> Value {
    json!({
        "recordID": id,
        "car": "Ford F-150",
        "license": "TRK-4410",
        "serviceDate": "2024-06-30",
        "mileage": "61250",
        "serviceType": "Transmission flush",
        "provider": "Valley Service Center"
    })
}

fn payload(folder: &Path, filename: &str, records: Vec<Value>) -> Value {
    json!({
        "folder": folder.to_string_lossy(),
        "filename": filename,
        "records": records
    })
}

#[tokio::test]
async fn health_check_greets() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "Hello": "World" }));
}

#[tokio::test]
async fn generate_saves_report_and_returns_path() {
    let base = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("reports");
    let mut with_notes = record("2");
    with_notes["notes"] = json!("Customer waited");

    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&payload(&folder, "fleet.pdf", vec![record("1"), with_notes]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let expected = folder.join("fleet.pdf");
    assert_eq!(body["status"], "success");
    assert_eq!(body["path"], expected.display().to_string());
    assert!(expected.is_file());
}

#[tokio::test]
async fn generate_accepts_empty_record_list() {
    let base = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();

    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&payload(dir.path(), "empty.pdf", Vec::new()))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert!(dir.path().join("empty.pdf").is_file());
}

#[tokio::test]
async fn repeated_generate_overwrites() {
    let base = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let client = reqwest::Client::new();
    let body = payload(dir.path(), "again.pdf", vec![record("1")]);

    for _ in 0..2 {
        let response = client
            .post(format!("{base}/generate"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 200);
    }
    assert!(dir.path().join("again.pdf").is_file());
}

#[tokio::test]
async fn missing_field_is_rejected_before_rendering() {
    let base = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("never-created");
    let mut incomplete = record("1");
    incomplete.as_object_mut().unwrap().remove("provider");

    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&payload(&folder, "bad.pdf", vec![incomplete]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
    let body: ErrorBody = response.json().await.unwrap();
    assert!(body.detail.contains("provider"), "{}", body.detail);
    assert!(!folder.exists());
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let base = spawn_server().await;

    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .header("content-type", "application/json")
        .body("{\"folder\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
    let body: ErrorBody = response.json().await.unwrap();
    assert!(!body.detail.is_empty());
}

#[tokio::test]
async fn render_failure_is_a_server_error() {
    let base = spawn_server().await;
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, b"file, not folder").unwrap();

    let response = reqwest::Client::new()
        .post(format!("{base}/generate"))
        .json(&payload(&blocker, "report.pdf", vec![record("1")]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: ErrorBody = response.json().await.unwrap();
    assert!(body.detail.contains("occupied"), "{}", body.detail);
}
