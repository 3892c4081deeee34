mod common;

use benchdb::BenchmarkStore;
use rocket::http::{ContentType, Status};
use serde_json::{Value, json};
use tempfile::TempDir;

use common::{
    SAMPLE_CSV, client, client_with_store, create_benchmark, error_message,
    sample_config, upload,
};

#[test]
fn test_manual_create_and_get() {
    let client = client();
    let response = client
        .post("/api/v1/benchmarks")
        .json(&json!({
            "config": sample_config("Qwen3-32B"),
            "metrics": [{
                "inputLength": 100,
                "outputLength": 50,
                "concurrency": 1,
                "ttft": 20.0,
                "tpot": 2.0,
                "tokensPerSecond": 10.0,
            }],
        }))
        .dispatch();
    assert_eq!(response.status(), Status::Created);
    let created: Value = response.into_json().unwrap();
    let id = created["id"].as_str().unwrap();

    let response = client.get(format!("/api/v1/benchmarks/{id}")).dispatch();
    assert_eq!(response.status(), Status::Ok);
    let fetched: Value = response.into_json().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched["metrics"][0]["tokensPerSecond"], 10.0);

    let listed: Value =
        client.get("/api/v1/benchmarks").dispatch().into_json().unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[test]
fn test_manual_create_rejects_invalid_input() {
    let client = client();

    let mut config = sample_config("Qwen3-32B");
    config["modelName"] = json!("  ");
    let response = client
        .post("/api/v1/benchmarks")
        .json(&json!({ "config": config, "metrics": [] }))
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert!(
        error_message(response).starts_with("Invalid config: \"modelName\"")
    );

    let response = client
        .post("/api/v1/benchmarks")
        .json(&json!({
            "config": sample_config("Qwen3-32B"),
            "metrics": [{
                "inputLength": 100,
                "outputLength": 50,
                "concurrency": 0,
                "ttft": 20.0,
                "tpot": 2.0,
                "tokensPerSecond": 10.0,
            }],
        }))
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert!(error_message(response).starts_with("Invalid metric entry"));

    let response = client
        .post("/api/v1/benchmarks")
        .header(ContentType::JSON)
        .body("{")
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert!(error_message(response).starts_with("Invalid request body"));
}

#[test]
fn test_manual_create_requires_metrics() {
    let client = client();
    let response = client
        .post("/api/v1/benchmarks")
        .json(&json!({ "config": sample_config("Qwen3-32B") }))
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    let message = error_message(response);
    assert!(message.starts_with("Invalid request body"));
    assert!(message.contains("metrics"));

    let listed: Value =
        client.get("/api/v1/benchmarks").dispatch().into_json().unwrap();
    assert!(listed.as_array().unwrap().is_empty());
}

#[test]
fn test_changes_reach_snapshot_file() {
    let directory = TempDir::new().expect("temp dir");
    let path = directory.path().join("benchmarks.json");
    let client =
        client_with_store(BenchmarkStore::open(Some(path.as_path())).unwrap());

    let a = create_benchmark(&client, "Qwen3-32B");
    let b = create_benchmark(&client, "DeepSeek-R1");
    let response = client
        .post("/api/v1/reports")
        .json(&json!({
            "benchmarkId1": a["id"],
            "benchmarkId2": b["id"],
            "modelName1": "Qwen3-32B",
            "modelName2": "DeepSeek-R1",
            "summary": "Qwen3 has lower TTFT",
        }))
        .dispatch();
    assert_eq!(response.status(), Status::Created);

    let reopened = BenchmarkStore::open(Some(path.as_path())).unwrap();
    let stored = reopened.get_benchmark(a["id"].as_str().unwrap()).unwrap();
    assert_eq!(stored.metrics.len(), 3);
    assert_eq!(reopened.list_reports().len(), 1);

    let id = b["id"].as_str().unwrap();
    let response = client.delete(format!("/api/v1/benchmarks/{id}")).dispatch();
    assert_eq!(response.status(), Status::NoContent);

    let reopened = BenchmarkStore::open(Some(path.as_path())).unwrap();
    assert!(reopened.get_benchmark(id).is_none());
    assert!(reopened.list_reports().is_empty());
}

#[test]
fn test_get_unknown_benchmark() {
    let client = client();
    let response = client.get("/api/v1/benchmarks/missing").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(error_message(response), "Benchmark not found");
}

#[test]
fn test_upload_csv() {
    let client = client();
    let benchmark = create_benchmark(&client, "Qwen3-32B");

    let metrics = benchmark["metrics"].as_array().unwrap();
    assert_eq!(metrics.len(), 3);
    assert_eq!(metrics[0]["tokensPerSecond"], 42.75);
    assert_eq!(metrics[1]["tpot"], 1.2305);
    assert_eq!(metrics[2]["tpot"], 0.0);
    assert_eq!(benchmark["config"]["modelName"], "Qwen3-32B");
}

#[test]
fn test_upload_rejects_bad_cell_and_stores_nothing() {
    let client = client();
    let csv = "Process Num,Input Length,Output Length,TTFT (ms),TPS (with prefill)\n1,100,50,20,10\n2,notANumber,50,20,10\n";

    let response = upload(&client, Some(csv), Some(&sample_config("Qwen3")));
    assert_eq!(response.status(), Status::BadRequest);
    assert!(error_message(response).contains("CSV"));

    let listed: Value =
        client.get("/api/v1/benchmarks").dispatch().into_json().unwrap();
    assert!(listed.as_array().unwrap().is_empty());
}

#[test]
fn test_upload_reports_missing_parts() {
    let client = client();

    let response = upload(&client, None, Some(&sample_config("Qwen3")));
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(error_message(response), "No CSV file uploaded");

    let response = upload(&client, Some(SAMPLE_CSV), None);
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(error_message(response), "No config provided");

    let not_an_object = json!("not an object");
    let response = upload(&client, Some(SAMPLE_CSV), Some(&not_an_object));
    assert_eq!(response.status(), Status::BadRequest);
    assert!(error_message(response).starts_with("Invalid config"));
}

#[test]
fn test_upload_reports_missing_columns() {
    let client = client();
    let csv = "Process Num,Input Length,Output Length,TPS (with prefill)\n1,100,50,10\n";

    let response = upload(&client, Some(csv), Some(&sample_config("Qwen3")));
    assert_eq!(response.status(), Status::BadRequest);
    let message = error_message(response);
    assert!(message.contains("CSV"));
    assert!(message.contains("TTFT"));
}

#[test]
fn test_preview_does_not_store() {
    let client = client();
    let response = client
        .post("/api/v1/benchmarks/preview")
        .header(common::multipart_content_type())
        .body(common::multipart_body(Some(SAMPLE_CSV), None))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let preview: Value = response.into_json().unwrap();
    assert_eq!(preview["metrics"].as_array().unwrap().len(), 3);
    assert_eq!(preview["mapping"]["ttft"]["sourceColumn"], "TTFT (ms)");
    assert_eq!(preview["mapping"]["ttft"]["conversionFactor"], 1.0);

    let listed: Value =
        client.get("/api/v1/benchmarks").dispatch().into_json().unwrap();
    assert!(listed.as_array().unwrap().is_empty());
}

#[test]
fn test_list_filters() {
    let client = client();
    create_benchmark(&client, "Qwen3-32B");
    create_benchmark(&client, "DeepSeek-R1");

    let listed: Value = client
        .get("/api/v1/benchmarks?modelName=deepseek")
        .dispatch()
        .into_json()
        .unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["config"]["modelName"], "DeepSeek-R1");

    let listed: Value = client
        .get("/api/v1/benchmarks?startDate=2025-07-01")
        .dispatch()
        .into_json()
        .unwrap();
    assert!(listed.as_array().unwrap().is_empty());

    let response =
        client.get("/api/v1/benchmarks?startDate=yesterday").dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(error_message(response), "Invalid startDate: yesterday");
}

#[test]
fn test_reports_and_cascade_delete() {
    let client = client();
    let a = create_benchmark(&client, "Qwen3-32B");
    let b = create_benchmark(&client, "DeepSeek-R1");

    let response = client
        .post("/api/v1/reports")
        .json(&json!({
            "benchmarkId1": a["id"],
            "benchmarkId2": b["id"],
            "modelName1": "Qwen3-32B",
            "modelName2": "DeepSeek-R1",
            "summary": "Qwen3 has lower TTFT",
        }))
        .dispatch();
    assert_eq!(response.status(), Status::Created);

    let reports: Value =
        client.get("/api/v1/reports").dispatch().into_json().unwrap();
    assert_eq!(reports.as_array().unwrap().len(), 1);

    let id = a["id"].as_str().unwrap();
    let response = client.delete(format!("/api/v1/benchmarks/{id}")).dispatch();
    assert_eq!(response.status(), Status::NoContent);
    let response = client.delete(format!("/api/v1/benchmarks/{id}")).dispatch();
    assert_eq!(response.status(), Status::NoContent);

    let reports: Value =
        client.get("/api/v1/reports").dispatch().into_json().unwrap();
    assert!(reports.as_array().unwrap().is_empty());
}

#[test]
fn test_report_requires_known_benchmarks() {
    let client = client();
    let a = create_benchmark(&client, "Qwen3-32B");

    let response = client
        .post("/api/v1/reports")
        .json(&json!({
            "benchmarkId1": a["id"],
            "benchmarkId2": "ghost",
            "modelName1": "Qwen3-32B",
            "modelName2": "Ghost",
            "summary": "n/a",
        }))
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(error_message(response), "Benchmark not found: ghost");
}

#[test]
fn test_compare() {
    let client = client();
    let a = create_benchmark(&client, "Qwen3-32B");
    let b = create_benchmark(&client, "DeepSeek-R1");

    let uri = format!(
        "/api/v1/compare?a={}&b={}",
        a["id"].as_str().unwrap(),
        b["id"].as_str().unwrap()
    );
    let response = client.get(uri).dispatch();
    assert_eq!(response.status(), Status::Ok);

    let comparison: Value = response.into_json().unwrap();
    assert_eq!(comparison["config"][0]["baseline"], "Qwen3-32B");
    assert_eq!(comparison["config"][0]["candidate"], "DeepSeek-R1");
    assert_eq!(comparison["matchedRows"].as_array().unwrap().len(), 3);
    assert!(
        comparison["summary"]
            .as_array()
            .unwrap()
            .iter()
            .all(|row| row["isEqual"] == true)
    );

    let response = client.get("/api/v1/compare?a=missing&b=other").dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn test_legacy_redirects() {
    let client = client();

    let response = client.get("/api/benchmarks?modelName=qwen").dispatch();
    assert_eq!(response.status(), Status::MovedPermanently);
    assert_eq!(
        response.headers().get_one("Location"),
        Some("/api/v1/benchmarks?modelName=qwen")
    );

    let response = client.post("/api/benchmarks").dispatch();
    assert_eq!(response.status(), Status::TemporaryRedirect);
    assert_eq!(
        response.headers().get_one("Location"),
        Some("/api/v1/benchmarks")
    );
}

#[test]
fn test_unknown_route_is_json() {
    let client = client();
    let response = client.get("/api/v1/nothing").dispatch();
    assert_eq!(response.status(), Status::NotFound);
    assert!(error_message(response).starts_with("Not found"));
}
