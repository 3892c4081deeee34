use benchdb::{
    Benchmark, BenchmarkConfig, BenchmarkDraft, CsvImport, import_csv,
    search::BenchmarkFilter,
    validation::{parse_test_date, validate_config, validate_metrics},
};
use chrono::NaiveDate;
use rocket::{
    FromForm, State, delete,
    form::Form,
    get, post,
    response::status::{Created, NoContent},
    serde::json::{self, Json},
};

use crate::server::{ApiError, CsvUpload, ServerState};

/// Query string of the benchmark listing.
#[derive(Debug, Default, FromForm)]
pub struct BenchmarkQuery {
    pub query: Option<String>,
    pub submitter: Option<String>,
    #[field(name = "modelName")]
    pub model_name: Option<String>,
    #[field(name = "serverName")]
    pub server_name: Option<String>,
    #[field(name = "shardingConfig")]
    pub sharding_config: Option<String>,
    #[field(name = "chipName")]
    pub chip_name: Option<String>,
    pub framework: Option<String>,
    #[field(name = "frameworkVersion")]
    pub framework_version: Option<String>,
    #[field(name = "operatorAcceleration")]
    pub operator_acceleration: Option<String>,
    pub notes: Option<String>,
    #[field(name = "frameworkParams")]
    pub framework_params: Option<String>,
    #[field(name = "startDate")]
    pub start_date: Option<String>,
    #[field(name = "endDate")]
    pub end_date: Option<String>,
}

impl BenchmarkQuery {
    pub fn into_filter(self) -> Result<BenchmarkFilter, ApiError> {
        Ok(BenchmarkFilter {
            start_date: query_date("startDate", self.start_date.as_deref())?,
            end_date: query_date("endDate", self.end_date.as_deref())?,
            query: self.query,
            submitter: self.submitter,
            model_name: self.model_name,
            server_name: self.server_name,
            sharding_config: self.sharding_config,
            chip_name: self.chip_name,
            framework: self.framework,
            framework_version: self.framework_version,
            operator_acceleration: self.operator_acceleration,
            notes: self.notes,
            framework_params: self.framework_params,
        })
    }
}

fn query_date(
    name: &str,
    value: Option<&str>,
) -> Result<Option<NaiveDate>, ApiError> {
    match value.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => parse_test_date(value).map(Some).ok_or_else(|| {
            ApiError::bad_request(format!("Invalid {name}: {value}"))
        }),
    }
}

fn created(benchmark: Benchmark) -> Created<Json<Benchmark>> {
    Created::new(format!("/api/v1/benchmarks/{}", benchmark.id))
        .body(Json(benchmark))
}

#[get("/api/v1/benchmarks?<query..>")]
pub fn list_benchmarks(
    query: BenchmarkQuery,
    state: &State<ServerState>,
) -> Result<Json<Vec<Benchmark>>, ApiError> {
    let filter = query.into_filter()?;
    Ok(Json(state.store.list_benchmarks(&filter)))
}

#[get("/api/v1/benchmarks/<id>")]
pub fn get_benchmark(
    id: &str,
    state: &State<ServerState>,
) -> Result<Json<Benchmark>, ApiError> {
    state
        .store
        .get_benchmark(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Benchmark not found"))
}

/// Stores a manually entered benchmark, replacing one with the same id.
#[post("/api/v1/benchmarks", data = "<draft>")]
pub async fn create_benchmark(
    draft: Result<Json<BenchmarkDraft>, json::Error<'_>>,
    state: &State<ServerState>,
) -> Result<Created<Json<Benchmark>>, ApiError> {
    let draft = draft
        .map_err(|error| {
            ApiError::bad_request(format!("Invalid request body: {error}"))
        })?
        .into_inner();
    validate_config(&draft.config)?;
    validate_metrics(&draft.metrics)?;

    let benchmark =
        state.mutate(move |store| store.save_benchmark(draft)).await?;
    Ok(created(benchmark))
}

/// Imports a CSV file together with its configuration as one benchmark.
/// Nothing is stored unless every row is accepted.
#[post("/api/v1/benchmarks/upload", data = "<upload>")]
pub async fn upload_benchmark(
    upload: Form<CsvUpload<'_>>,
    state: &State<ServerState>,
) -> Result<Created<Json<Benchmark>>, ApiError> {
    let text = upload.read_csv().await?;
    let config = upload
        .config
        .as_deref()
        .filter(|config| !config.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("No config provided"))?;
    let config: BenchmarkConfig =
        serde_json::from_str(config).map_err(|error| {
            ApiError::bad_request(format!("Invalid config: {error}"))
        })?;
    validate_config(&config)?;

    let import = import_csv(&text)?;
    tracing::info!(
        model = %config.model_name,
        rows = import.metrics.len(),
        "importing uploaded CSV"
    );
    let draft = BenchmarkDraft {
        config,
        metrics: import.metrics,
        ..Default::default()
    };
    let benchmark =
        state.mutate(move |store| store.save_benchmark(draft)).await?;
    Ok(created(benchmark))
}

/// Shows how a CSV file would be read, without storing anything.
#[post("/api/v1/benchmarks/preview", data = "<upload>")]
pub async fn preview_benchmark(
    upload: Form<CsvUpload<'_>>,
) -> Result<Json<CsvImport>, ApiError> {
    let text = upload.read_csv().await?;
    Ok(Json(import_csv(&text)?))
}

#[delete("/api/v1/benchmarks/<id>")]
pub async fn delete_benchmark(
    id: &str,
    state: &State<ServerState>,
) -> Result<NoContent, ApiError> {
    let id = id.to_string();
    state.mutate(move |store| store.delete_benchmark(&id)).await?;
    Ok(NoContent)
}
