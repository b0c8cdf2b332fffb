use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use barista_core::TokenError;
use jsonwebtoken::{DecodingKey, jwk::JwkSet};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeySetError {
    #[error("Failed to fetch key set: {0}")]
    Fetch(String),
    #[error("No key with id {0}")]
    KeyNotFound(String),
    #[error("Key {kid} is unusable: {reason}")]
    InvalidKey { kid: String, reason: String },
}

impl From<KeySetError> for TokenError {
    fn from(error: KeySetError) -> Self {
        match error {
            KeySetError::KeyNotFound(kid) => TokenError::KeyNotFound(kid),
            KeySetError::Fetch(_) | KeySetError::InvalidKey { .. } => {
                TokenError::KeySetUnavailable(error.to_string())
            }
        }
    }
}

/// Source of the signing authority's published keys.
#[async_trait]
pub trait KeySetProvider: Send + Sync + 'static {
    async fn fetch(&self) -> Result<JwkSet, KeySetError>;
}

/// Key set fetched over HTTP from a JWKS endpoint.
pub struct RemoteJwkSet {
    url: String,
    http_client: reqwest::Client,
}

impl RemoteJwkSet {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, KeySetError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| KeySetError::Fetch(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            http_client,
        })
    }

    pub fn with_http_client(url: impl Into<String>, http_client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }
}

#[async_trait]
impl KeySetProvider for RemoteJwkSet {
    #[tracing::instrument(name = "Fetching JWKS", skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<JwkSet, KeySetError> {
        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| KeySetError::Fetch(e.to_string()))?;

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| KeySetError::Fetch(e.to_string()))
    }
}

/// Key set held in process, for tests and offline setups.
pub struct StaticJwkSet(JwkSet);

impl StaticJwkSet {
    pub fn new(keys: JwkSet) -> Self {
        Self(keys)
    }
}

#[async_trait]
impl KeySetProvider for StaticJwkSet {
    async fn fetch(&self) -> Result<JwkSet, KeySetError> {
        Ok(self.0.clone())
    }
}

/// Shortest gap between two refreshes forced by an unknown `kid`.
pub const DEFAULT_REFRESH_COOLDOWN: Duration = Duration::from_secs(30);

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

struct CacheInner<P> {
    provider: P,
    ttl: Duration,
    refresh_cooldown: Duration,
    cached: ArcSwapOption<CachedKeys>,
    // Guards fetches; holds the time of the last refresh forced by an unknown kid
    refresh_lock: Mutex<Option<Instant>>,
}

/// Read-through cache in front of a [`KeySetProvider`].
///
/// Lookups are lock-free while the cached set is younger than the TTL. A stale
/// set triggers a refresh. A `kid` the cached set does not contain triggers a
/// refresh too, but at most once per cooldown; inside it, and when that
/// refresh fails, the `kid` is reported as unknown. Only one refresh runs at a
/// time and waiters reuse its result.
pub struct CachedJwkSet<P> {
    inner: Arc<CacheInner<P>>,
}

impl<P> Clone for CachedJwkSet<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: KeySetProvider> CachedJwkSet<P> {
    pub fn new(provider: P, ttl: Duration) -> Self {
        Self::with_refresh_cooldown(provider, ttl, DEFAULT_REFRESH_COOLDOWN)
    }

    pub fn with_refresh_cooldown(provider: P, ttl: Duration, refresh_cooldown: Duration) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                provider,
                ttl,
                refresh_cooldown,
                cached: ArcSwapOption::empty(),
                refresh_lock: Mutex::new(None),
            }),
        }
    }

    /// The decoding key for `kid`, refetching the set if `kid` is unknown and
    /// no such refetch ran within the cooldown.
    pub async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, KeySetError> {
        let current = self.current().await?;
        if let Some(key) = find_key(&current.keys, kid)? {
            return Ok(key);
        }

        let refreshed = match self.refresh_for_unknown_kid(&current).await {
            Ok(Some(refreshed)) => refreshed,
            Ok(None) => {
                tracing::debug!(kid, "Unknown key id within refresh cooldown");
                return Err(KeySetError::KeyNotFound(kid.to_owned()));
            }
            Err(e) => {
                tracing::warn!(kid, error = %e, "Refresh for unknown key id failed");
                return Err(KeySetError::KeyNotFound(kid.to_owned()));
            }
        };

        find_key(&refreshed.keys, kid)?.ok_or_else(|| KeySetError::KeyNotFound(kid.to_owned()))
    }

    async fn current(&self) -> Result<Arc<CachedKeys>, KeySetError> {
        match self.inner.cached.load_full() {
            Some(cached) if self.is_fresh(&cached) => Ok(cached),
            _ => self.refresh_stale().await,
        }
    }

    async fn refresh_stale(&self) -> Result<Arc<CachedKeys>, KeySetError> {
        let _guard = self.inner.refresh_lock.lock().await;

        // Another task may have refreshed while this one waited for the lock
        if let Some(cached) = self.inner.cached.load_full() {
            if self.is_fresh(&cached) {
                return Ok(cached);
            }
        }

        self.fetch_and_store().await
    }

    /// `None` when a forced refresh already ran within the cooldown.
    async fn refresh_for_unknown_kid(
        &self,
        seen: &Arc<CachedKeys>,
    ) -> Result<Option<Arc<CachedKeys>>, KeySetError> {
        let mut last_forced = self.inner.refresh_lock.lock().await;

        if let Some(cached) = self.inner.cached.load_full() {
            if !Arc::ptr_eq(seen, &cached) && self.is_fresh(&cached) {
                return Ok(Some(cached));
            }
        }

        if last_forced.is_some_and(|at| at.elapsed() < self.inner.refresh_cooldown) {
            return Ok(None);
        }
        *last_forced = Some(Instant::now());

        tracing::info!("Unknown key id, refreshing key set");
        self.fetch_and_store().await.map(Some)
    }

    async fn fetch_and_store(&self) -> Result<Arc<CachedKeys>, KeySetError> {
        let keys = self.inner.provider.fetch().await?;
        let cached = Arc::new(CachedKeys {
            keys,
            fetched_at: Instant::now(),
        });
        self.inner.cached.store(Some(Arc::clone(&cached)));

        Ok(cached)
    }

    fn is_fresh(&self, cached: &CachedKeys) -> bool {
        cached.fetched_at.elapsed() < self.inner.ttl
    }
}

fn find_key(keys: &JwkSet, kid: &str) -> Result<Option<DecodingKey>, KeySetError> {
    keys.find(kid)
        .map(|jwk| {
            DecodingKey::from_jwk(jwk).map_err(|e| KeySetError::InvalidKey {
                kid: kid.to_owned(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
