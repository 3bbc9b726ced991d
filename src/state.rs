//! Shared application state: constructor-injected services, no process-wide
//! singletons.

use crate::config::Config;
use crate::service::{EngineService, VanService};
use crate::store::{EngineStore, VanStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engines: EngineService,
    pub vans: VanService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: PgPool, config: Config) -> Self {
        AppState {
            engines: EngineService::new(EngineStore::new(pool.clone())),
            vans: VanService::new(VanStore::new(pool)),
            config: Arc::new(config),
        }
    }
}
