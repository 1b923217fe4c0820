use crate::config::Config;
use crate::db::connection::{init_db, seed_db, Database};
use crate::responses::error_to_response;
use crate::router::{handle, App};
use anyhow::Context;
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod db;
mod domain;
mod errors;
mod query;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    if let Err(e) = run() {
        tracing::error!("fatal: {e:#}");
        eprintln!("❌ {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Create the database handle and apply the schema
    let db = Database::new(&config.database_path);
    init_db(&db).context("database initialization failed")?;

    if let Some(seed) = &config.seed_path {
        seed_db(&db, seed).with_context(|| format!("seeding from {seed} failed"))?;
    }

    // 2️⃣ Start the server
    let addr = config.bind_addr;
    let max_workers = config.max_workers;
    tracing::info!(%addr, max_workers, image_pick = ?config.image_pick, "starting server");

    let app = App::new(db, config);
    let server = Server::bind(&addr).max_workers(max_workers);

    // 3️⃣ Serve requests; every error becomes an HTML page
    server
        .serve(move |req, _info| match handle(req, &app) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        })
        .context("server ended with error")?;

    tracing::info!("server shut down cleanly");
    Ok(())
}
