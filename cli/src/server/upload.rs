use rocket::{FromForm, fs::TempFile};
use tokio::io::AsyncReadExt;

use crate::server::ApiError;

/// Multipart body of the CSV upload and preview endpoints.
#[derive(FromForm)]
pub struct CsvUpload<'r> {
    pub file: Option<TempFile<'r>>,
    /// Benchmark configuration as JSON text.
    pub config: Option<String>,
}

impl CsvUpload<'_> {
    pub async fn read_csv(&self) -> Result<String, ApiError> {
        let file = self
            .file
            .as_ref()
            .ok_or_else(|| ApiError::bad_request("No CSV file uploaded"))?;

        let mut text = String::new();
        let reader = file.open().await.map_err(unreadable)?;
        Box::pin(reader)
            .read_to_string(&mut text)
            .await
            .map_err(unreadable)?;
        Ok(text)
    }
}

fn unreadable(error: std::io::Error) -> ApiError {
    tracing::warn!(%error, "failed to read uploaded CSV");
    ApiError::bad_request(format!(
        "Uploaded CSV file could not be read: {error}"
    ))
}
