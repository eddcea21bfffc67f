//! TTL 付きスナップショットキャッシュ
//!
//! プロセス内でスナップショットを 1 つだけメモ化する。窓内の読み取りは
//! 同じスナップショットを返し、期限切れ後の最初の読み取りがフェッチ＋
//! 正規化をやり直す。部分更新・並行リフレッシュの重複排除は無い
//! （利用側はインタラクションごとに単一スレッド）。
//!
//! フェッチ失敗時はその呼び出しに Error を返しつつ、空のスナップ
//! ショットを窓いっぱいキャッシュする。以後の読み取りは空のまま成功し、
//! 呼び出し側は `Snapshot::has_data` で読み込み失敗状態を判定する。

use crate::api::CatalogSource;
use crate::domain::Snapshot;
use crate::error::Error;
use crate::normalize::normalize;
use crate::ports::outbound::Clock;
use std::sync::{Arc, Mutex};

/// デフォルトの TTL（1 時間）
pub const DEFAULT_TTL_MS: u64 = 60 * 60 * 1000;

struct CacheState {
    snapshot: Arc<Snapshot>,
    fetched_at_ms: u64,
}

/// プロセス内スナップショットキャッシュ
///
/// グローバルシングルトンにはせず、クエリ層へ明示的に渡す。
pub struct SnapshotCache {
    source: Arc<dyn CatalogSource>,
    clock: Arc<dyn Clock>,
    ttl_ms: u64,
    state: Mutex<Option<CacheState>>,
}

impl SnapshotCache {
    pub fn new(source: Arc<dyn CatalogSource>, clock: Arc<dyn Clock>, ttl_ms: u64) -> Self {
        Self {
            source,
            clock,
            ttl_ms,
            state: Mutex::new(None),
        }
    }

    /// 現在のスナップショットを返す
    ///
    /// 窓内ならキャッシュ済みの Arc をそのまま返す。期限切れなら
    /// 製品→店舗の順に逐次フェッチして正規化し、差し替える。
    pub fn snapshot(&self) -> Result<Arc<Snapshot>, Error> {
        let now = self.clock.now_ms();
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(cached) = state.as_ref() {
            if now.saturating_sub(cached.fetched_at_ms) < self.ttl_ms {
                return Ok(Arc::clone(&cached.snapshot));
            }
        }

        match self.refresh() {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                *state = Some(CacheState {
                    snapshot: Arc::clone(&snapshot),
                    fetched_at_ms: now,
                });
                Ok(snapshot)
            }
            Err(e) => {
                // 失敗も窓いっぱいメモ化する（空コレクションとして）
                *state = Some(CacheState {
                    snapshot: Arc::new(Snapshot::default()),
                    fetched_at_ms: now,
                });
                Err(e)
            }
        }
    }

    /// 2 つの上流を逐次フェッチして正規化する。リトライ無しの all-or-nothing。
    fn refresh(&self) -> Result<Snapshot, Error> {
        let products_raw = self.source.fetch_products()?;
        let branches_raw = self.source.fetch_branches()?;
        normalize(&products_raw, &branches_raw)
    }
}
