//! 店舗のドメイン型

use crate::domain::hours::OpeningHours;
use serde_json::Value;

/// 店舗（物理的な拠点）
///
/// 上流の `name` / `manager` / `postalAddress` / `openingTimes` /
/// `productCodes` をリネームしたもの。`product_codes` は常に
/// （空かもしれない）文字列のリストに正規化済み。住所は上流が
/// 構造化オブジェクトと文字列の両方を返すため生の JSON のまま持ち、
/// 表示はプレゼンテーション層に委ねる。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Branch {
    pub name: Option<String>,
    pub manager: Option<String>,
    pub address: Value,
    pub opening_hours: OpeningHours,
    pub product_codes: Vec<String>,
}

impl Branch {
    /// この店舗が指定の製品コードを扱っているか（完全一致のメンバーシップ）
    pub fn has_code(&self, code: &str) -> bool {
        self.product_codes.iter().any(|c| c == code)
    }
}
