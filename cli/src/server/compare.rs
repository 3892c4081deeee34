use benchdb::comparison::{BenchmarkComparison, compare};
use rocket::{State, get, serde::json::Json};

use crate::server::{ApiError, ServerState};

/// Compares benchmark `b` against baseline `a`.
#[get("/api/v1/compare?<a>&<b>")]
pub fn compare_benchmarks(
    a: &str,
    b: &str,
    state: &State<ServerState>,
) -> Result<Json<BenchmarkComparison>, ApiError> {
    let lookup = |id: &str| {
        state.store.get_benchmark(id).ok_or_else(|| {
            ApiError::not_found(format!("Benchmark not found: {id}"))
        })
    };
    let baseline = lookup(a)?;
    let candidate = lookup(b)?;
    Ok(Json(compare(&baseline, &candidate)))
}
