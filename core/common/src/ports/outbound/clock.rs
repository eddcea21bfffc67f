//! 時刻取得の Outbound ポート
//!
//! キャッシュは「前回フェッチからの経過時間」をこの trait 経由で測る。
//! テストでは固定時刻の実装を注入して TTL の境界を直接駆動する。

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在時刻をミリ秒（Unix epoch）で返す
    fn now_ms(&self) -> u64;
}
