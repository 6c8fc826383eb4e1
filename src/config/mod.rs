use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "spotmap.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_JWT_SECRET: &str = "JWT_SECRET";
const ENV_NAME_S3_BUCKET: &str = "S3_BUCKET";
const ENV_NAME_S3_ENDPOINT: &str = "S3_ENDPOINT";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub storage: Storage,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        if let Ok(secret) = env::var(ENV_NAME_JWT_SECRET) {
            cfg.webserver.jwt_secret = Some(secret);
        }
        if let Ok(bucket) = env::var(ENV_NAME_S3_BUCKET) {
            cfg.storage.bucket = bucket;
        }
        if let Ok(endpoint) = env::var(ENV_NAME_S3_ENDPOINT) {
            cfg.storage.endpoint = Some(endpoint);
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub struct WebServer {
    pub enable_cors: bool,
    pub secure_cookies: bool,
    pub jwt_secret: Option<String>,
}

pub struct Storage {
    /// S3 bucket for photo uploads.
    pub bucket: String,
    /// Custom endpoint for S3-compatible services.
    pub endpoint: Option<String>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            storage,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            secure_cookies,
            jwt_secret,
        } = webserver.unwrap_or_default();

        let webserver = WebServer {
            enable_cors: cors,
            secure_cookies,
            jwt_secret,
        };

        let raw::Storage { bucket, endpoint } = storage.unwrap_or_default();

        if bucket.trim().is_empty() {
            return Err(anyhow!("No storage bucket defined"));
        }
        let storage = Storage { bucket, endpoint };

        Ok(Self {
            db,
            webserver,
            storage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let file: Option<&Path> = None;
        let _: Config = Config::try_load_from_file_or_default(file).unwrap();
    }
}
