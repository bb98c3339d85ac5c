pub mod cache;
pub mod remote;
pub mod shell;

pub use cache::{AssetCache, CacheStorage};
pub use remote::HttpAssetFetcher;
pub use shell::{FetchedAsset, OfflineShell, STATIC_MANIFEST, ShellError, Source};
