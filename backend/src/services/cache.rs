//! TTL cache gateway for search results and playlists.
//!
//! The cache is an optimization, never a correctness dependency: a missing or
//! unreachable store behaves as a cache that never hits, and any read or
//! deserialization error is a miss.

use log::{debug, info, warn};
use redis::aio::MultiplexedConnection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

const KEY_PREFIX: &str = "yt_search:";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

pub struct CacheService {
    store: Store,
    ttl: Duration,
}

enum Store {
    Redis(MultiplexedConnection),
    Memory(Mutex<HashMap<String, (Instant, String)>>),
    Disabled,
}

impl CacheService {
    /// Connect to redis; on any failure the service runs in pass-through
    /// mode so requests keep working without a cache.
    pub async fn connect_redis(url: &str, ttl: Duration) -> Self {
        let connected = async {
            let client = redis::Client::open(url)?;
            client.get_multiplexed_async_connection().await
        };
        match tokio::time::timeout(CONNECT_TIMEOUT, connected).await {
            Ok(Ok(conn)) => {
                info!("Redis cache connected at {url}");
                CacheService {
                    store: Store::Redis(conn),
                    ttl,
                }
            }
            Ok(Err(e)) => {
                warn!("Redis connection failed, running without cache: {e}");
                CacheService::disabled()
            }
            Err(_) => {
                warn!("Redis connection timed out, running without cache");
                CacheService::disabled()
            }
        }
    }

    /// In-process store for deployments without redis.
    pub fn memory(ttl: Duration) -> Self {
        CacheService {
            store: Store::Memory(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn disabled() -> Self {
        CacheService {
            store: Store::Disabled,
            ttl: Duration::ZERO,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let store_key = store_key(key);
        let payload = match &self.store {
            Store::Redis(conn) => {
                let mut conn = conn.clone();
                match redis::cmd("GET")
                    .arg(&store_key)
                    .query_async::<Option<String>>(&mut conn)
                    .await
                {
                    Ok(payload) => payload?,
                    Err(e) => {
                        warn!("Cache read failed for {key}: {e}");
                        return None;
                    }
                }
            }
            Store::Memory(map) => {
                let mut map = map.lock().ok()?;
                match map.get(&store_key).cloned() {
                    Some((expiry, payload)) if Instant::now() < expiry => payload,
                    Some(_) => {
                        map.remove(&store_key);
                        return None;
                    }
                    None => return None,
                }
            }
            Store::Disabled => return None,
        };

        match serde_json::from_str(&payload) {
            Ok(value) => {
                debug!("Cache hit for {key}");
                Some(value)
            }
            Err(e) => {
                // A stale or incompatible entry reads as a miss.
                warn!("Cache entry for {key} failed to deserialize: {e}");
                None
            }
        }
    }

    pub async fn set<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Cache serialization failed for {key}: {e}");
                return;
            }
        };

        let store_key = store_key(key);
        match &self.store {
            Store::Redis(conn) => {
                let mut conn = conn.clone();
                let result = redis::cmd("SET")
                    .arg(&store_key)
                    .arg(payload)
                    .arg("EX")
                    .arg(self.ttl.as_secs().max(1))
                    .query_async::<()>(&mut conn)
                    .await;
                if let Err(e) = result {
                    warn!("Cache write failed for {key}: {e}");
                } else {
                    debug!("Cached {key} for {}s", self.ttl.as_secs());
                }
            }
            Store::Memory(map) => {
                if let Ok(mut map) = map.lock() {
                    map.insert(store_key, (Instant::now() + self.ttl, payload));
                }
            }
            Store::Disabled => {}
        }
    }
}

/// Store keys are fixed-length content hashes of the logical key, so raw
/// keywords never leak into the store and key length stays bounded.
fn store_key(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    format!("{KEY_PREFIX}{digest:x}")
}
