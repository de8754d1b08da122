//! Name-plus-hints geocoding with memoization.
//!
//! Each distinct cache key produces at most one completed network lookup for
//! the lifetime of the cache. Concurrent callers for a key that has not yet
//! resolved are not coalesced; each issues its own request and the first
//! write wins.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::cache::GeocodeCache;
use crate::client::NominatimClient;
use crate::error::GeocodeError;
use crate::throttle::Throttle;
use crate::types::{Coordinates, Resolution};

pub const DEFAULT_REGION_SUFFIX: &str = "Melbourne, Australia";

const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(1);

/// One entry of a batch passed to [`Geocoder::resolve_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeRequest {
    /// Caller-side identifier, returned untouched.
    pub id: String,
    pub name: String,
    pub hints: Vec<String>,
}

/// Resolves restaurant names to coordinates through a [`NominatimClient`],
/// memoizing completed lookups in a shared [`GeocodeCache`].
///
/// Cloning is cheap; clones share the client, cache, and request throttle.
#[derive(Clone)]
pub struct Geocoder {
    client: Arc<NominatimClient>,
    cache: Arc<GeocodeCache>,
    throttle: Arc<Throttle>,
    region_suffix: String,
}

impl Geocoder {
    #[must_use]
    pub fn new(client: NominatimClient, cache: Arc<GeocodeCache>) -> Self {
        Self {
            client: Arc::new(client),
            cache,
            throttle: Arc::new(Throttle::new(DEFAULT_MIN_INTERVAL)),
            region_suffix: DEFAULT_REGION_SUFFIX.to_owned(),
        }
    }

    /// Replaces the regional suffix appended to every query. Empty disables it.
    #[must_use]
    pub fn with_region_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.region_suffix = suffix.into();
        self
    }

    /// Sets the minimum spacing between outbound requests.
    #[must_use]
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.throttle = Arc::new(Throttle::new(min_interval));
        self
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<GeocodeCache> {
        &self.cache
    }

    /// `name + "-" + hints joined by ","`. Hints are used in the given order.
    #[must_use]
    pub fn cache_key(name: &str, hints: &[String]) -> String {
        format!("{name}-{}", hints.join(","))
    }

    /// `"<name>, <hint>, <hint>, <region suffix>"`.
    #[must_use]
    pub fn build_query(&self, name: &str, hints: &[String]) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(hints.len() + 2);
        parts.push(name);
        parts.extend(hints.iter().map(String::as_str));
        if !self.region_suffix.is_empty() {
            parts.push(&self.region_suffix);
        }
        parts.join(", ")
    }

    /// Looks up coordinates, keeping failures distinct from "not found".
    ///
    /// Cached results return without network access. A response with no
    /// candidates is cached as [`Resolution::NotFound`]; only the first
    /// candidate of a non-empty response is used.
    ///
    /// # Errors
    ///
    /// Any [`GeocodeError`] from the transport or from coordinate parsing.
    /// Errors are not cached, so the next call for the same key retries.
    pub async fn lookup(&self, name: &str, hints: &[String]) -> Result<Resolution, GeocodeError> {
        let key = Self::cache_key(name, hints);
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(key = %key, "geocode cache hit");
            return Ok(cached);
        }

        let query = self.build_query(name, hints);
        self.throttle.acquire().await;
        tracing::debug!(query = %query, "geocoding");

        let candidates = self.client.search(&query).await?;
        let resolution = match candidates.first() {
            Some(candidate) => Resolution::Found(candidate.coordinates()?),
            None => Resolution::NotFound,
        };

        match resolution {
            Resolution::Found(c) => {
                tracing::info!(name, lat = c.lat, lng = c.lng, "found coordinates");
            }
            Resolution::NotFound => tracing::info!(name, "no coordinates found"),
        }

        Ok(self.cache.insert(key, resolution))
    }

    /// Looks up coordinates, collapsing failures into `None` after logging.
    pub async fn resolve(&self, name: &str, hints: &[String]) -> Option<Coordinates> {
        match self.lookup(name, hints).await {
            Ok(resolution) => resolution.coordinates(),
            Err(e) => {
                tracing::warn!(name, error = %e, "geocoding failed");
                None
            }
        }
    }

    /// Looks up a batch with at most `concurrency` requests in flight.
    ///
    /// Results come back in input order. A failure for one request never
    /// affects the others.
    pub async fn resolve_all(
        &self,
        requests: Vec<GeocodeRequest>,
        concurrency: usize,
    ) -> Vec<(GeocodeRequest, Result<Resolution, GeocodeError>)> {
        stream::iter(requests)
            .map(|request| async move {
                let result = self.lookup(&request.name, &request.hints).await;
                (request, result)
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}
