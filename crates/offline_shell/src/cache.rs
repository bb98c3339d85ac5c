use std::collections::HashMap;
use std::sync::Arc;

use common::models::Asset;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct AssetCache {
    name: String,
    entries: RwLock<HashMap<String, Asset>>,
}

impl AssetCache {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn get(&self, path: &str) -> Option<Asset> {
        self.entries.read().await.get(path).cloned()
    }

    pub async fn put_all(&self, assets: Vec<Asset>) {
        let mut entries = self.entries.write().await;
        for asset in assets {
            entries.insert(asset.path.clone(), asset);
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Named caches, searched in creation order on lookup.
#[derive(Debug, Default)]
pub struct CacheStorage {
    caches: RwLock<Vec<Arc<AssetCache>>>,
}

impl CacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self, name: &str) -> Arc<AssetCache> {
        let mut caches = self.caches.write().await;
        if let Some(cache) = caches.iter().find(|c| c.name() == name) {
            return cache.clone();
        }

        let cache = Arc::new(AssetCache::new(name));
        caches.push(cache.clone());
        cache
    }

    pub async fn delete(&self, name: &str) -> bool {
        let mut caches = self.caches.write().await;
        let before = caches.len();
        caches.retain(|c| c.name() != name);
        caches.len() != before
    }

    pub async fn keys(&self) -> Vec<String> {
        self.caches
            .read()
            .await
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    pub async fn lookup(&self, path: &str) -> Option<Asset> {
        let caches = self.caches.read().await.clone();
        for cache in caches {
            if let Some(asset) = cache.get(path).await {
                return Some(asset);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(path: &str, body: &str) -> Asset {
        Asset {
            path: path.to_string(),
            status: 200,
            content_type: Some("text/plain".to_string()),
            body: body.as_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn open_returns_the_same_cache_for_a_name() {
        let storage = CacheStorage::new();
        let first = storage.open("trading-cache").await;
        first.put_all(vec![asset("/", "index")]).await;

        let again = storage.open("trading-cache").await;
        assert_eq!(again.len().await, 1);
        assert_eq!(storage.keys().await, ["trading-cache"]);
    }

    #[tokio::test]
    async fn lookup_searches_caches_in_creation_order() {
        let storage = CacheStorage::new();
        storage.open("v1").await.put_all(vec![asset("/static/js/app.js", "old")]).await;
        storage.open("v2").await.put_all(vec![asset("/static/js/app.js", "new")]).await;

        let hit = storage.lookup("/static/js/app.js").await.unwrap();
        assert_eq!(hit.body, b"old");

        assert!(storage.delete("v1").await);
        let hit = storage.lookup("/static/js/app.js").await.unwrap();
        assert_eq!(hit.body, b"new");

        assert!(!storage.delete("v1").await);
        assert!(storage.lookup("/missing").await.is_none());
    }
}
