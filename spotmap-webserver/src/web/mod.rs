use rocket::{config::Config as RocketCfg, Rocket, Route};

use spotmap_core::gateways::{
    notify::NotificationGateway, object_storage::ObjectStorageGateway, token_cache::TokenCache,
};

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    /// Secret for signing session tokens. A random secret is
    /// generated if none is configured, which invalidates all
    /// sessions on restart.
    pub jwt_secret: Option<String>,
    pub secure_cookies: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) struct Gateways {
    storage: Box<dyn ObjectStorageGateway + Send + Sync>,
    notify: Box<dyn NotificationGateway + Send + Sync>,
    token_cache: Box<dyn TokenCache + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;
    let Gateways {
        storage,
        notify,
        token_cache,
    } = gateways;

    let jwt_state = match &cfg.jwt_secret {
        Some(secret) => jwt::JwtState::with_secret(secret),
        None => jwt::JwtState::new(),
    };

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let storage_gw = guards::Storage(storage);
    let notify_gw = guards::Notify(notify);
    let token_cache = guards::TokenCacheState(token_cache);

    let mut instance = r
        .manage(db)
        .manage(jwt_state)
        .manage(storage_gw)
        .manage(notify_gw)
        .manage(token_cache)
        .manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    enable_cors: bool,
    cfg: Cfg,
    storage: Box<dyn ObjectStorageGateway + Send + Sync>,
    notify: Box<dyn NotificationGateway + Send + Sync>,
    token_cache: Box<dyn TokenCache + Send + Sync>,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let gateways = Gateways {
        storage,
        notify,
        token_cache,
    };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
