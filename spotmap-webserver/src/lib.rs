#[macro_use]
extern crate log;

use spotmap_core::gateways::{
    notify::NotificationGateway, object_storage::ObjectStorageGateway, token_cache::TokenCache,
};
use spotmap_db_sqlite::Connections;

mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    enable_cors: bool,
    cfg: Cfg,
    storage_gw: Box<dyn ObjectStorageGateway + Send + Sync>,
    notify_gw: Box<dyn NotificationGateway + Send + Sync>,
    token_cache: Box<dyn TokenCache + Send + Sync>,
) {
    web::run(
        connections.into(),
        enable_cors,
        cfg,
        storage_gw,
        notify_gw,
        token_cache,
    )
    .await;
}
