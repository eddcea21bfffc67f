//! 上流 API ソースのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// 上流カタログ API の抽象
///
/// 各ソース（HTTP・フィクスチャ）はこのトレイトを実装する。
/// どちらのフェッチも生の JSON（untyped なレコード列）を返し、
/// 形状の正規化は `common::normalize` に委ねる。
pub trait CatalogSource: Send + Sync {
    /// ソース名を返す
    fn name(&self) -> &str;

    /// 製品一覧の生 JSON を取得する
    ///
    /// # Returns
    /// * `Ok(Value)` - レコード列（通常は JSON 配列）
    /// * `Err(Error)` - ネットワークエラーまたは JSON 解析失敗
    fn fetch_products(&self) -> Result<Value, Error>;

    /// 店舗一覧の生 JSON を取得する
    ///
    /// # Returns
    /// * `Ok(Value)` - レコード列（通常は JSON 配列）
    /// * `Err(Error)` - ネットワークエラーまたは JSON 解析失敗
    fn fetch_branches(&self) -> Result<Value, Error>;
}
