use std::{
    net::{IpAddr, Ipv4Addr},
    path::PathBuf,
};

use benchdb::BenchmarkStore;
use rocket::{
    Build, Config, Rocket, catchers,
    config::LogLevel,
    data::{Limits, ToByteUnit},
    routes,
};

use crate::server::{
    ServerState, benchmarks, catchers::default_catcher, compare, legacy,
    reports,
};

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub address: IpAddr,
    pub port: u16,
    pub workers: usize,
    /// Snapshot file; `None` or `:memory:` keeps data in memory only.
    pub db_path: Option<PathBuf>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3001,
            workers: 4,
            db_path: None,
        }
    }
}

pub fn rocket_config(settings: &ServerSettings) -> Config {
    let limits = Limits::default()
        .limit("file", 32.mebibytes())
        .limit("data-form", 32.mebibytes())
        .limit("json", 8.mebibytes());
    Config {
        address: settings.address,
        port: settings.port,
        workers: settings.workers,
        limits,
        log_level: LogLevel::Off,
        ..Config::default()
    }
}

pub fn build_rocket(
    state: ServerState,
    config: Config,
) -> Rocket<Build> {
    rocket::custom(config)
        .manage(state)
        .mount("/", routes![
            benchmarks::list_benchmarks,
            benchmarks::get_benchmark,
            benchmarks::create_benchmark,
            benchmarks::upload_benchmark,
            benchmarks::preview_benchmark,
            benchmarks::delete_benchmark,
            reports::list_reports,
            reports::create_report,
            reports::delete_report,
            compare::compare_benchmarks,
            legacy::legacy_list_benchmarks,
            legacy::legacy_create_benchmark,
        ])
        .register("/", catchers![default_catcher])
}

pub async fn run_server(
    settings: ServerSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = BenchmarkStore::open(settings.db_path.as_deref())?;
    let config = rocket_config(&settings);

    tracing::info!(
        address = %settings.address,
        port = settings.port,
        snapshot = ?store.snapshot_path(),
        "starting benchmark server"
    );
    println!(
        "Server available at: http://{}:{}/api/v1/benchmarks",
        settings.address, settings.port
    );

    build_rocket(ServerState::new(store), config).launch().await?;
    Ok(())
}
