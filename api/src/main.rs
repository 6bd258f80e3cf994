use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};

use hub_api::app::create_app;
use hub_api::routes::auth::AppState;
use hub_core::repositories::AccountRepository;
use hub_core::services::{
    AuthService, AuthServiceConfig, Clock, InMemorySessionStore, KeySetCache, KeySetFetcher,
    SessionStore, SystemClock,
};
use hub_infra::cache::{RedisClient, RedisSessionStore};
use hub_infra::database::{DatabasePool, MySqlAccountRepository};
use hub_infra::HttpKeySetFetcher;
use hub_shared::{AppConfig, SessionBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!("Starting Halo Hub API Server ({})", config.environment);

    if config.auth.entra.client_id().is_none() {
        warn!("ENTRA_CLIENT_ID is not set; identity token exchange will fail");
    }

    let fetcher = HttpKeySetFetcher::from_config(&config.auth.entra)
        .context("failed to build key discovery client")?;
    let key_cache = Arc::new(KeySetCache::new(fetcher));

    let database = DatabasePool::new_lazy(&config.database)
        .context("failed to configure account database pool")?;
    let accounts = Arc::new(MySqlAccountRepository::new(database.get_pool().clone()));

    match config.auth.session.backend {
        SessionBackend::Memory => {
            info!("Sessions are kept in process memory");
            run(config, key_cache, accounts, InMemorySessionStore::new()).await
        }
        SessionBackend::Redis => {
            let client = RedisClient::new(&config.cache)
                .await
                .context("failed to connect to Redis session store")?;
            let store = RedisSessionStore::new(client, config.auth.session.key_prefix.clone());
            info!("Sessions are kept in Redis");
            run(config, key_cache, accounts, store).await
        }
    }
}

async fn run<F, A, S>(
    config: AppConfig,
    key_cache: Arc<KeySetCache<F>>,
    accounts: Arc<A>,
    sessions: S,
) -> anyhow::Result<()>
where
    F: KeySetFetcher + 'static,
    A: AccountRepository + 'static,
    S: SessionStore + 'static,
{
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let auth_service = Arc::new(AuthService::new(
        key_cache,
        accounts,
        sessions,
        AuthServiceConfig::from(&config.auth),
        clock,
    ));

    let state = web::Data::new(AppState::new(auth_service));
    let environment = config.environment;
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(state.clone(), environment))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server terminated with an error")
}
