//! Caching layer for MapQuest route responses.
//!
//! A trip's route geometry is stable over the span of a drive, and the
//! directions call is the only provider call the service makes, so caching
//! it directly removes almost all provider traffic for repeated queries.
//!
//! Keys are the normalized (from, to) pair: lowercased with whitespace runs
//! collapsed, so trivially different spellings of the same trip share an
//! entry.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{LocationQuery, Route, normalized};
use crate::mapquest::{MapquestClient, MapquestError};

/// Cache key for routes: normalized (from, to) queries.
type RouteKey = (String, String);

/// Configuration for the route cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            // Road networks don't change within the hour
            ttl: Duration::from_secs(60 * 60),
            max_capacity: 1000,
        }
    }
}

/// Cache for converted route responses.
pub struct RouteCache {
    routes: MokaCache<RouteKey, Arc<Route>>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Compute the cache key for a trip.
    fn key(from: &LocationQuery, to: &LocationQuery) -> RouteKey {
        (normalized(from.as_str()), normalized(to.as_str()))
    }

    /// Get a cached route.
    pub async fn get(&self, from: &LocationQuery, to: &LocationQuery) -> Option<Arc<Route>> {
        self.routes.get(&Self::key(from, to)).await
    }

    /// Insert a route into the cache.
    pub async fn insert(&self, from: &LocationQuery, to: &LocationQuery, route: Arc<Route>) {
        self.routes.insert(Self::key(from, to), route).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// MapQuest client with caching.
///
/// Wraps a [`MapquestClient`] and caches converted directions responses.
pub struct CachedMapquestClient {
    client: MapquestClient,
    cache: RouteCache,
}

impl CachedMapquestClient {
    /// Create a new cached client.
    pub fn new(client: MapquestClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: RouteCache::new(cache_config),
        }
    }

    /// Get the route for a trip, using the cache if possible.
    ///
    /// A cache hit never touches the provider.
    pub async fn route(
        &self,
        from: &LocationQuery,
        to: &LocationQuery,
    ) -> Result<Arc<Route>, MapquestError> {
        if let Some(cached) = self.cache.get(from, to).await {
            debug!(from = %from, to = %to, "route cache hit");
            return Ok(cached);
        }

        let route = Arc::new(self.client.route(from, to).await?);

        self.cache.insert(from, to, route.clone()).await;

        Ok(route)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &MapquestClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_normalizes_case_and_whitespace() {
        let a = LocationQuery::parse("New York, NY").unwrap();
        let b = LocationQuery::parse("new  YORK,   ny").unwrap();
        let to = LocationQuery::parse("Chicago, IL").unwrap();

        assert_eq!(RouteCache::key(&a, &to), RouteCache::key(&b, &to));
    }

    #[test]
    fn key_is_direction_sensitive() {
        let a = LocationQuery::parse("New York, NY").unwrap();
        let b = LocationQuery::parse("Chicago, IL").unwrap();

        // A→B and B→A are different trips with different routes
        assert_ne!(RouteCache::key(&a, &b), RouteCache::key(&b, &a));
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(3600));
        assert_eq!(config.max_capacity, 1000);
    }

    #[test]
    fn cache_creation() {
        let config = CacheConfig::default();
        let cache = RouteCache::new(&config);
        assert_eq!(cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn insert_then_get() {
        use crate::domain::GeoPoint;

        let cache = RouteCache::new(&CacheConfig::default());
        let from = LocationQuery::parse("New York, NY").unwrap();
        let to = LocationQuery::parse("Chicago, IL").unwrap();

        assert!(cache.get(&from, &to).await.is_none());

        let route = Arc::new(
            Route::new(
                vec![GeoPoint::new(40.71, -74.0), GeoPoint::new(41.88, -87.63)],
                789.5,
                GeoPoint::new(40.71, -74.0),
                GeoPoint::new(41.88, -87.63),
            )
            .unwrap(),
        );
        cache.insert(&from, &to, route.clone()).await;

        let hit = cache.get(&from, &to).await.unwrap();
        assert_eq!(hit.distance_miles, 789.5);

        // Different spelling of the same trip hits the same entry
        let from_alt = LocationQuery::parse("NEW YORK,  ny").unwrap();
        assert!(cache.get(&from_alt, &to).await.is_some());
    }
}
