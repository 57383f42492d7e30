use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::application::CsvTable;
use crate::domain::csv::OutputFormat;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::{ConfigService, HttpConfig};
use crate::interfaces::http::start_server;

pub fn run() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = try_run() {
        error!(error = %err, "csvtable failed");
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn try_run() -> Result<()> {
    if let Ok(path) = dotenvy::dotenv() {
        info!(env_file = %path.display(), "loaded .env");
    }

    let config = ConfigService::new().load()?;
    let table = CsvTable::load(config.source.clone())?;

    match config.http {
        Some(http) => serve(table, http, config.output),
        None => {
            println!("{}", table.render(config.output)?);
            Ok(())
        }
    }
}

fn serve(table: CsvTable, http: HttpConfig, output: OutputFormat) -> Result<()> {
    let table = Arc::new(table);

    actix_web::rt::System::new().block_on(async move {
        start_server(table, output, &http.host, http.port)
            .map_err(|e| {
                AppError::IoError(format!("Failed to bind {}:{}: {}", http.host, http.port, e))
            })?
            .await
            .map_err(AppError::from)
    })
}
