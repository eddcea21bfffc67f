//! 標準環境変数解決実装（std::env を委譲）

use crate::api::endpoints::{DEFAULT_BRANCHES_URL, DEFAULT_PRODUCTS_URL};
use crate::cache::DEFAULT_TTL_MS;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// JSONL ログのファイル名（state ディレクトリ直下）
const LOG_FILE_NAME: &str = "bpmap.log.jsonl";

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn products_url(&self) -> String {
        non_empty_var("BPMAP_PRODUCTS_URL").unwrap_or_else(|| DEFAULT_PRODUCTS_URL.to_string())
    }

    fn branches_url(&self) -> String {
        non_empty_var("BPMAP_BRANCHES_URL").unwrap_or_else(|| DEFAULT_BRANCHES_URL.to_string())
    }

    fn cache_ttl_ms(&self) -> u64 {
        non_empty_var("BPMAP_CACHE_TTL_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(|secs| secs * 1000)
            .unwrap_or(DEFAULT_TTL_MS)
    }

    fn resolve_log_path(&self) -> Option<PathBuf> {
        let state_dir = non_empty_var("BPMAP_STATE_DIR")
            .map(PathBuf::from)
            .or_else(|| {
                non_empty_var("XDG_STATE_HOME").map(|s| PathBuf::from(s).join("bpmap"))
            })
            .or_else(|| {
                non_empty_var("HOME")
                    .map(|h| PathBuf::from(h).join(".local").join("state").join("bpmap"))
            })?;
        Some(state_dir.join(LOG_FILE_NAME))
    }
}
