use rocket::{config::Config as RocketCfg, Rocket, Route};
use time::Duration;

use crate::core::usecases::FeedLimits;
use travelog_application::prelude::InboxNotifier;

pub mod api;
mod guards;
pub mod jwt;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub feed: FeedLimits,
    /// A random secret is generated if missing
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            feed: FeedLimits::default(),
            jwt_secret: None,
            token_ttl: Duration::days(7),
        }
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(options: InstanceOptions, db: sqlite::Connections) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    let jwt_state = jwt::JwtState::new(cfg.jwt_secret.as_deref(), cfg.token_ttl);
    let notify = guards::Notify(Box::new(InboxNotifier::new((*db).clone())));

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(jwt_state).manage(notify).manage(cfg);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(db: sqlite::Connections, enable_cors: bool, cfg: Cfg) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
