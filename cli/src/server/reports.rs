use benchdb::{ComparisonReport, ReportDraft, validation::validate_report};
use rocket::{
    State, delete, get, post,
    response::status::{Created, NoContent},
    serde::json::{self, Json},
};

use crate::server::{ApiError, ServerState};

#[get("/api/v1/reports")]
pub fn list_reports(
    state: &State<ServerState>,
) -> Json<Vec<ComparisonReport>> {
    Json(state.store.list_reports())
}

/// Saves a comparison report. Both benchmarks must still exist.
#[post("/api/v1/reports", data = "<draft>")]
pub async fn create_report(
    draft: Result<Json<ReportDraft>, json::Error<'_>>,
    state: &State<ServerState>,
) -> Result<Created<Json<ComparisonReport>>, ApiError> {
    let draft = draft
        .map_err(|error| {
            ApiError::bad_request(format!("Invalid request body: {error}"))
        })?
        .into_inner();
    validate_report(&draft)?;

    let report = state.mutate(move |store| store.save_report(draft)).await?;
    Ok(Created::new(format!("/api/v1/reports/{}", report.id))
        .body(Json(report)))
}

#[delete("/api/v1/reports/<id>")]
pub async fn delete_report(
    id: &str,
    state: &State<ServerState>,
) -> Result<NoContent, ApiError> {
    let id = id.to_string();
    state.mutate(move |store| store.delete_report(&id)).await?;
    Ok(NoContent)
}
