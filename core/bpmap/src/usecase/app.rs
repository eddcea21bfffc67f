//! 検索ユースケース
//!
//! キャッシュからスナップショットを取り、検索エンジンを呼び、
//! 表示用テキストに描画して返す。フェッチ失敗と「データが読めて
//! いない」状態はここで 1 つのエラーに集約し、呼び出し側はそれ以上
//! 処理を進めない。

use crate::adapter::console;
use crate::domain::{SearchMode, SearchTerm};
use common::cache::SnapshotCache;
use common::error::Error;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use common::query;
use std::collections::BTreeMap;
use std::sync::Arc;

/// bpmap のユースケース（キャッシュ経由でのみデータに触れる）
pub struct MapperUseCase {
    pub cache: Arc<SnapshotCache>,
    pub log: Arc<dyn Log>,
}

impl MapperUseCase {
    pub fn new(cache: Arc<SnapshotCache>, log: Arc<dyn Log>) -> Self {
        Self { cache, log }
    }

    /// 1 回の検索インタラクションを実行し、表示用テキストを返す
    pub fn run_search(&self, mode: SearchMode, term: &SearchTerm) -> Result<String, Error> {
        let snapshot = self
            .cache
            .snapshot()
            .map_err(|e| Error::system(format!("Error fetching data: {}", e)))?;

        // フェッチ失敗が窓内にキャッシュされていると空のスナップショットが
        // 返る。その場合は検索せずにブロッキングエラーとする。
        if !snapshot.has_data() {
            return Err(Error::system("Could not load data from one or both APIs."));
        }

        let (output, hit_count) = match mode {
            SearchMode::ProductToBranch => {
                let hits = query::search_by_product(&snapshot, term.as_ref());
                (console::render_product_hits(&hits), hits.len())
            }
            SearchMode::BranchToProduct => {
                let hits = query::search_by_branch(&snapshot, term.as_ref());
                (console::render_branch_hits(&hits), hits.len())
            }
        };

        let _ = self.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "search executed".to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("query".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                m.insert("mode".to_string(), serde_json::json!(mode.as_str()));
                m.insert("term".to_string(), serde_json::json!(term.as_ref()));
                m.insert("hits".to_string(), serde_json::json!(hit_count));
                m.insert(
                    "products".to_string(),
                    serde_json::json!(snapshot.products.len()),
                );
                m.insert(
                    "branches".to_string(),
                    serde_json::json!(snapshot.branches.len()),
                );
                Some(m)
            },
        });

        Ok(output)
    }
}
