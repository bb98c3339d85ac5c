use std::sync::Arc;

use common::capabilities::AssetFetcher;
use common::error::FetchError;
use common::models::Asset;
use futures_util::future::try_join_all;
use thiserror::Error;
use tracing::{debug, info};

use crate::cache::CacheStorage;

pub const STATIC_MANIFEST: [&str; 4] = [
    "/",
    "/static/css/styles.css",
    "/static/js/app.js",
    "/static/manifest.json",
];

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("install of cache {cache} failed on {path}: {reason}")]
    Install {
        cache: String,
        path: String,
        reason: String,
    },
    #[error(transparent)]
    Network(#[from] FetchError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Network,
}

#[derive(Debug, Clone)]
pub struct FetchedAsset {
    pub asset: Asset,
    pub source: Source,
}

pub struct OfflineShell {
    storage: Arc<CacheStorage>,
    network: Arc<dyn AssetFetcher>,
    cache_name: String,
    manifest: Vec<String>,
}

impl OfflineShell {
    pub fn new(
        storage: Arc<CacheStorage>,
        network: Arc<dyn AssetFetcher>,
        cache_name: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            network,
            cache_name: cache_name.into(),
            manifest: STATIC_MANIFEST.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn with_manifest<I, S>(mut self, manifest: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manifest = manifest.into_iter().map(Into::into).collect();
        self
    }

    pub fn manifest(&self) -> &[String] {
        &self.manifest
    }

    /// Nothing is stored unless every asset came back with a success status.
    pub async fn install(&self) -> Result<(), ShellError> {
        info!("Installing offline cache {} ({} assets)", self.cache_name, self.manifest.len());

        let fetches = self.manifest.iter().map(|path| self.fetch_for_install(path));
        let assets = try_join_all(fetches).await?;

        let cache = self.storage.open(&self.cache_name).await;
        cache.put_all(assets).await;

        info!("Offline cache {} installed", self.cache_name);
        Ok(())
    }

    pub async fn fetch(&self, path: &str) -> Result<FetchedAsset, ShellError> {
        if let Some(asset) = self.storage.lookup(path).await {
            debug!("Serving {} from cache", path);
            return Ok(FetchedAsset {
                asset,
                source: Source::Cache,
            });
        }

        debug!("Cache miss for {}, going to network", path);
        let asset = self.network.fetch(path).await?;
        Ok(FetchedAsset {
            asset,
            source: Source::Network,
        })
    }

    async fn fetch_for_install(&self, path: &str) -> Result<Asset, ShellError> {
        let install_error = |reason: String| ShellError::Install {
            cache: self.cache_name.clone(),
            path: path.to_string(),
            reason,
        };

        let asset = self
            .network
            .fetch(path)
            .await
            .map_err(|e| install_error(e.to_string()))?;

        if !asset.is_ok() {
            return Err(install_error(format!("HTTP {}", asset.status)));
        }

        Ok(asset)
    }
}
