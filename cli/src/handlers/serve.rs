use tokio::runtime::Runtime;

use crate::server::{ServerSettings, run_server};

pub fn handle_serve(
    settings: ServerSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = Runtime::new()?;
    runtime.block_on(run_server(settings))
}
