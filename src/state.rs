use std::sync::Arc;
use std::time::Duration;

use crate::clients::cheapshark::CheapSharkClient;
use crate::config::{CheapSharkConfig, Config};
use crate::db::Store;
use crate::services::{
    CatalogService, CredentialService, SeaOrmCatalogService, SeaOrmCredentialService,
};

/// Build a shared HTTP client for upstream API calls.
/// Reused across services so connections are pooled.
fn build_shared_http_client(timeout_seconds: u64, user_agent: &str) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

/// The cheapshark client used by both the web server and the CLI.
pub fn build_cheapshark_client(config: &CheapSharkConfig) -> anyhow::Result<CheapSharkClient> {
    let http_client =
        build_shared_http_client(config.request_timeout_seconds, &config.user_agent)?;

    Ok(CheapSharkClient::with_shared_client(
        http_client,
        &config.base_url,
        config.max_search_results,
    ))
}

/// Process-wide handles, constructed once at startup and injected everywhere.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub cheapshark: Arc<CheapSharkClient>,

    pub credential_service: Arc<dyn CredentialService>,

    pub catalog_service: Arc<dyn CatalogService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let cheapshark = Arc::new(build_cheapshark_client(&config.cheapshark)?);

        Ok(Self::from_parts(config, store, cheapshark))
    }

    #[must_use]
    pub fn from_parts(config: Config, store: Store, cheapshark: Arc<CheapSharkClient>) -> Self {
        let credential_service: Arc<dyn CredentialService> =
            Arc::new(SeaOrmCredentialService::new(store.clone()));
        let catalog_service: Arc<dyn CatalogService> =
            Arc::new(SeaOrmCatalogService::new(store.clone()));

        Self {
            config: Arc::new(config),
            store,
            cheapshark,
            credential_service,
            catalog_service,
        }
    }
}
