#[macro_use]
extern crate log;

use anyhow::Result;
use clap::Parser as _;

use spotmap_gateways::{notify::LogNotifyGateway, s3::S3Storage, token_cache::InMemoryTokenCache};

mod cli;
mod config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = cli::Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite, cfg.db.conn_pool_size
    );
    let connections =
        spotmap_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;

    spotmap_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    info!("Presigning photo uploads for bucket '{}'", cfg.storage.bucket);
    let storage = S3Storage::from_env(cfg.storage.bucket, cfg.storage.endpoint.as_deref()).await;

    let web_cfg = spotmap_webserver::Cfg {
        jwt_secret: cfg.webserver.jwt_secret,
        secure_cookies: cfg.webserver.secure_cookies,
    };
    let enable_cors = args.enable_cors || cfg.webserver.enable_cors;

    spotmap_webserver::run(
        connections,
        enable_cors,
        web_cfg,
        Box::new(storage),
        Box::new(LogNotifyGateway),
        Box::new(InMemoryTokenCache::default()),
    )
    .await;

    Ok(())
}
