use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path};
use travelog_core::usecases::FeedLimits;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "travelog.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub feed: FeedLimits,
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
                        "{} not found => load default configuration.",
                        file_path.display()
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
    pub jwt_secret: Option<String>,
    pub token_ttl: time::Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            feed,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer {
            cors,
            jwt_secret,
            token_ttl,
        } = webserver.unwrap_or_default();

        let token_ttl = token_ttl
            .or_else(|| raw::WebServer::default().token_ttl)
            .ok_or_else(|| anyhow!("Missing token TTL"))?;
        let token_ttl = time::Duration::try_from(token_ttl)?;
        if jwt_secret.is_none() {
            log::warn!("No JWT secret configured: sessions will not survive a restart");
        }
        let webserver = WebServer {
            enable_cors: cors,
            jwt_secret: jwt_secret.filter(|s| !s.trim().is_empty()),
            token_ttl,
        };

        let defaults = FeedLimits::default();
        let raw::Feed {
            default_limit,
            max_limit,
        } = feed.unwrap_or_default();
        let feed = FeedLimits {
            default_limit: default_limit.unwrap_or(defaults.default_limit),
            max_limit: max_limit.unwrap_or(defaults.max_limit),
        };
        if feed.default_limit == 0 || feed.default_limit > feed.max_limit {
            return Err(anyhow!(
                "Invalid feed limits: default {} / max {}",
                feed.default_limit,
                feed.max_limit
            ));
        }

        Ok(Self { db, webserver, feed })
    }
}
