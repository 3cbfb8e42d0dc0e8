//! Cached JWKS (JSON Web Key Set) fetching.
//!
//! The key authority is remote and slow relative to request handling, so
//! the key set is cached for five minutes. Refresh is lazy and
//! single-flight: the refetch happens under the write guard, and readers
//! that queued behind it re-check freshness instead of fetching again.

use std::time::{Duration, Instant};

use jsonwebtoken::jwk::JwkSet;
use tokio::sync::RwLock;

use snipdrop_types::error::AuthError;

/// How long a fetched key set stays valid.
const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    keys: JwkSet,
    fetched_at: Instant,
}

impl CacheEntry {
    fn is_fresh(&self) -> bool {
        self.fetched_at.elapsed() < CACHE_TTL
    }
}

/// Remote key set with a process-wide five-minute cache.
pub struct JwksCache {
    url: String,
    client: reqwest::Client,
    entry: RwLock<Option<CacheEntry>>,
}

impl JwksCache {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
            entry: RwLock::new(None),
        }
    }

    /// Current key set, refetching when the cached copy has expired.
    pub async fn get(&self) -> Result<JwkSet, AuthError> {
        {
            let entry = self.entry.read().await;
            if let Some(cached) = entry.as_ref() {
                if cached.is_fresh() {
                    return Ok(cached.keys.clone());
                }
            }
        }

        let mut entry = self.entry.write().await;
        // Re-check after acquiring the write guard: another task may have
        // refreshed the cache while this one waited.
        if let Some(cached) = entry.as_ref() {
            if cached.is_fresh() {
                return Ok(cached.keys.clone());
            }
        }

        let keys = self.fetch().await?;
        *entry = Some(CacheEntry {
            keys: keys.clone(),
            fetched_at: Instant::now(),
        });

        Ok(keys)
    }

    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::debug!(url = %self.url, error = %e, "jwks fetch failed");
                AuthError::InvalidToken
            })?;

        let keys: JwkSet = response.json().await.map_err(|e| {
            tracing::debug!(url = %self.url, error = %e, "jwks response failed to parse");
            AuthError::InvalidToken
        })?;

        tracing::debug!(count = keys.keys.len(), "fetched jwks");
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_entry_freshness() {
        let fresh = CacheEntry {
            keys: JwkSet { keys: vec![] },
            fetched_at: Instant::now(),
        };
        assert!(fresh.is_fresh());

        // checked_sub: the monotonic clock may not reach back a full TTL
        // right after boot.
        if let Some(fetched_at) = Instant::now().checked_sub(CACHE_TTL) {
            let stale = CacheEntry {
                keys: JwkSet { keys: vec![] },
                fetched_at,
            };
            assert!(!stale.is_fresh());
        }
    }
}
