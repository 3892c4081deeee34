use rocket::{get, http::uri::Origin, post, response::Redirect};

const BENCHMARKS: &str = "/api/v1/benchmarks";

fn versioned(origin: &Origin<'_>) -> String {
    match origin.query() {
        Some(query) => format!("{BENCHMARKS}?{query}"),
        None => BENCHMARKS.to_string(),
    }
}

#[get("/api/benchmarks")]
pub fn legacy_list_benchmarks(origin: &Origin<'_>) -> Redirect {
    Redirect::moved(versioned(origin))
}

/// 307 keeps the method and body of the original request.
#[post("/api/benchmarks")]
pub fn legacy_create_benchmark(origin: &Origin<'_>) -> Redirect {
    Redirect::temporary(versioned(origin))
}
