//! Location Resolution Module
//!
//! This module resolves free-text place names into [`Location`]s through a
//! [`GeocodeClient`], memoizing outcomes in a bounded LRU cache keyed by the
//! exact input string.

use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use moka::policy::EvictionPolicy;
use tracing::{debug, warn};

use crate::error::WeatherDashError;
use crate::models::Location;

/// Default number of distinct place names remembered
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// Place-name lookup service
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    /// Best match for `city`, or `None` when the service knows no such place
    async fn geocode(&self, city: &str) -> Result<Option<Location>, WeatherDashError>;
}

/// Service for resolving place names, with memoization
pub struct LocationResolver {
    client: Arc<dyn GeocodeClient>,
    cache: Cache<String, Option<Location>>,
}

impl LocationResolver {
    #[must_use]
    pub fn new(client: Arc<dyn GeocodeClient>, capacity: usize) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity.max(1) as u64)
            .eviction_policy(EvictionPolicy::lru())
            .build();

        Self { client, cache }
    }

    /// Resolve `city`. Found and not-found outcomes are both cached;
    /// upstream failures are not, so the next call retries.
    pub async fn resolve(&self, city: &str) -> Result<Option<Location>, WeatherDashError> {
        let key = city.to_string();

        if let Some(cached) = self.cache.get(&key).await {
            debug!(city, "Geocoding cache hit");
            return Ok(cached);
        }

        debug!(city, "Geocoding cache miss");
        let resolved = self.client.geocode(city).await?;

        match &resolved {
            Some(location) => debug!(
                city,
                name = ?location.name,
                coordinates = %location.format_coordinates(),
                "Resolved location"
            ),
            None => warn!(city, "No geocoding results"),
        }

        self.cache.insert(key, resolved.clone()).await;
        Ok(resolved)
    }

    /// Drop every memoized lookup
    pub fn clear_cache(&self) {
        self.cache.invalidate_all();
    }

    /// Number of memoized lookups once pending evictions have been applied
    pub async fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

impl std::fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationResolver")
            .field("client", &"<GeocodeClient>")
            .field("cache_capacity", &self.cache.policy().max_capacity())
            .finish()
    }
}
