//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdClock, StdEnvResolver};
use common::api::{create_source, CatalogSource, Endpoints, SourceKind};
use common::cache::SnapshotCache;
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, Log};

use crate::cli::Config;
use crate::usecase::MapperUseCase;

/// 組み立て済みアプリケーション
pub struct App {
    pub use_case: MapperUseCase,
    pub log: Arc<dyn Log>,
}

/// 配線: Config と環境変数から MapperUseCase を組み立てる
///
/// 優先順位はフラグ → 環境変数 → デフォルト。
pub fn wire_mapper(config: &Config) -> Result<App, Error> {
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);

    let kind = match config.source.as_deref() {
        Some(s) => SourceKind::parse(s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown source: '{}'. Available: {}",
                s,
                SourceKind::available().join(", ")
            ))
        })?,
        None => SourceKind::Http,
    };

    let endpoints = Endpoints {
        products_url: config
            .products_url
            .clone()
            .unwrap_or_else(|| env.products_url()),
        branches_url: config
            .branches_url
            .clone()
            .unwrap_or_else(|| env.branches_url()),
    };

    let source: Arc<dyn CatalogSource> = Arc::new(create_source(kind, endpoints));
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let ttl_ms = config
        .ttl_secs
        .map(|secs| secs * 1000)
        .unwrap_or_else(|| env.cache_ttl_ms());
    let cache = Arc::new(SnapshotCache::new(source, clock, ttl_ms));

    let log: Arc<dyn Log> = match env.resolve_log_path() {
        Some(path) => Arc::new(FileJsonLog::new(path)),
        None => Arc::new(NoopLog),
    };

    Ok(App {
        use_case: MapperUseCase::new(cache, Arc::clone(&log)),
        log,
    })
}
