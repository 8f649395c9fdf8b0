use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use travelog_db_sqlite::Connections;

use crate::config::Config;

/// Travel journal backend with editorial review.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create an administrator account
    CreateAdmin {
        #[arg(long)]
        username: String,
        #[arg(long, env = "TRAVELOG_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

pub async fn run() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite, cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    travelog_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command {
        Some(Command::CreateAdmin { username, password }) => {
            let admin =
                travelog_application::prelude::create_admin(&connections, &username, &password)
                    .map_err(|err| anyhow!("Could not create administrator '{username}': {err}"))?;
            info!("Created administrator '{}'", admin.username);
        }
        None => {
            let web_cfg = travelog_webserver::Cfg {
                feed: cfg.feed,
                jwt_secret: cfg.webserver.jwt_secret,
                token_ttl: cfg.webserver.token_ttl,
            };
            let enable_cors = args.enable_cors || cfg.webserver.enable_cors;
            travelog_webserver::run(connections, enable_cors, web_cfg).await;
        }
    }
    Ok(())
}
