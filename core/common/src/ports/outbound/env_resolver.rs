//! 環境変数解決 Outbound ポート
//!
//! エンドポイント・キャッシュ TTL・ログ出力先を環境変数から解決する。
//! usecase・wiring はこの trait 経由でのみ環境変数にアクセスする。

use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 製品一覧 API の URL
    ///
    /// BPMAP_PRODUCTS_URL が設定されていればそれ、なければデフォルト。
    fn products_url(&self) -> String;

    /// 店舗一覧 API の URL
    ///
    /// BPMAP_BRANCHES_URL が設定されていればそれ、なければデフォルト。
    fn branches_url(&self) -> String;

    /// キャッシュ TTL をミリ秒で返す
    ///
    /// BPMAP_CACHE_TTL_SECS（秒）が設定されていればそれ、なければ 1 時間。
    fn cache_ttl_ms(&self) -> u64;

    /// JSONL ログファイルのパス
    ///
    /// 優先順位:
    /// 1. $BPMAP_STATE_DIR
    /// 2. $XDG_STATE_HOME/bpmap
    /// 3. $HOME/.local/state/bpmap
    /// どれも解決できなければ None（ログ無効）。
    fn resolve_log_path(&self) -> Option<PathBuf>;
}
