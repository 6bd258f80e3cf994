//! Live key discovery test against the Microsoft endpoint
//!
//! Run with: cargo test -p hub_infra --test key_discovery_integration -- --ignored

use std::sync::Arc;

use hub_core::services::token::KeySetCache;
use hub_core::KeySetFetcher;
use hub_infra::HttpKeySetFetcher;
use hub_shared::config::EntraConfig;

#[tokio::test]
#[ignore] // Requires network access
async fn test_published_keys_are_cached_by_kid() {
    let fetcher = Arc::new(HttpKeySetFetcher::from_config(&EntraConfig::default()).unwrap());
    let keys = fetcher.fetch_keys().await.unwrap();
    let kid = keys
        .iter()
        .find_map(|key| key.common.key_id.clone())
        .expect("published set has a kid");

    let cache = KeySetCache::new(fetcher);
    assert!(cache.get_key(&kid).await.is_some());
    assert!(!cache.is_empty().await);
}
