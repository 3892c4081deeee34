use benchdb::BenchmarkStore;
use cli::server::{ServerState, build_rocket};
use rocket::{
    Config,
    config::LogLevel,
    http::{ContentType, Status},
    local::blocking::{Client, LocalResponse},
};
use serde_json::{Value, json};

pub const SAMPLE_CSV: &str = "\
Process Num,Input Length,Output Length,TTFT (ms),TPS (with prefill),Total Time (ms)
1,128,128,20.5,42.75,300
2,512,256,25,80.1,340
4,1024,512,31.25,150.5,
";

const BOUNDARY: &str = "benchdb-test-boundary";

pub fn client() -> Client {
    client_with_store(BenchmarkStore::in_memory())
}

pub fn client_with_store(store: BenchmarkStore) -> Client {
    let config = Config {
        log_level: LogLevel::Off,
        ..Config::debug_default()
    };
    let state = ServerState::new(store);
    Client::tracked(build_rocket(state, config)).expect("valid rocket")
}

pub fn sample_config(model_name: &str) -> Value {
    json!({
        "modelName": model_name,
        "serverName": "Ascend-Server-A",
        "shardingConfig": "TP4",
        "chipName": "910B",
        "framework": "MindIE",
        "frameworkVersion": "1.0.0",
        "frameworkParams": "",
        "testDate": "2025-06-01",
    })
}

pub fn multipart_content_type() -> ContentType {
    ContentType::new("multipart", "form-data")
        .with_params(("boundary", BOUNDARY))
}

/// Multipart body with an optional CSV file part and an optional config part.
pub fn multipart_body(
    csv: Option<&str>,
    config: Option<&Value>,
) -> String {
    let mut body = String::new();
    if let Some(csv) = csv {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"bench.csv\"\r\nContent-Type: text/csv\r\n\r\n{csv}\r\n"
        ));
    }
    if let Some(config) = config {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"config\"\r\n\r\n{config}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

pub fn upload<'c>(
    client: &'c Client,
    csv: Option<&str>,
    config: Option<&Value>,
) -> LocalResponse<'c> {
    client
        .post("/api/v1/benchmarks/upload")
        .header(multipart_content_type())
        .body(multipart_body(csv, config))
        .dispatch()
}

pub fn create_benchmark(
    client: &Client,
    model_name: &str,
) -> Value {
    let config = sample_config(model_name);
    let response = upload(client, Some(SAMPLE_CSV), Some(&config));
    assert_eq!(response.status(), Status::Created);
    response.into_json().expect("benchmark body")
}

pub fn error_message(response: LocalResponse<'_>) -> String {
    let body: Value = response.into_json().expect("error body");
    body["error"].as_str().expect("error field").to_string()
}
