//! フィクスチャソースの実装
//!
//! このソースはネットワークを呼ばず、組み込みのサンプルデータを返します。
//! デモやテスト用で、上流 API が返しうる形状のばらつき
//! （配列のコードリスト・カンマ区切り文字列・欠損、文字列の営業時間・
//! 日別エントリ・欠損）を一通り含みます。

use crate::api::source::CatalogSource;
use crate::error::Error;
use serde_json::{json, Value};

/// 組み込みサンプルデータを返すソース
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalogSource;

impl FixtureCatalogSource {
    /// 新しいフィクスチャソースを作成
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for FixtureCatalogSource {
    fn name(&self) -> &str {
        "fixture"
    }

    fn fetch_products(&self) -> Result<Value, Error> {
        Ok(json!([
            { "code": "PC001", "detail": "Motor Insurance" },
            { "code": "PC002", "detail": "Home Insurance" },
            { "code": "PC003", "detail": "Travel Insurance" },
            { "code": "PC004", "detail": "Pet Insurance" },
            { "code": "PC005", "detail": "Caravan Insurance" }
        ]))
    }

    fn fetch_branches(&self) -> Result<Value, Error> {
        Ok(json!([
            {
                "name": "Leeds",
                "manager": "Sarah Whitfield",
                "postalAddress": {
                    "address1": "12 Albion Street",
                    "town": "Leeds",
                    "postcode": "LS1 5AA"
                },
                "openingTimes": [
                    { "day": "Mon", "openingHour": 9, "closingHour": 17, "closingMinute": 30 },
                    { "day": "Tue", "openingHour": 9, "closingHour": 17, "closingMinute": 30 },
                    { "day": "Sat", "openingHour": 9, "openingMinute": 30, "closingHour": 12 }
                ],
                "productCodes": ["PC001", "PC002", "PC004"]
            },
            {
                "name": "York",
                "manager": "James Holt",
                "postalAddress": "4 Micklegate, York, YO1 6JH",
                "openingTimes": "Mon-Fri 09:00-17:00",
                "productCodes": "PC001, PC003"
            },
            {
                "name": "Harrogate",
                "manager": "Priya Nair",
                "postalAddress": {
                    "address1": "22 Parliament Street",
                    "town": "Harrogate",
                    "postcode": "HG1 2QU"
                },
                "openingTimes": null,
                "productCodes": null
            },
            {
                "name": "Sheffield",
                "manager": null,
                "postalAddress": null,
                "openingTimes": [
                    // closingHour が無いエントリは表示時にスキップされる
                    { "day": "Mon", "openingHour": 9 }
                ],
                "productCodes": ["PC002", "PC005"]
            }
        ]))
    }
}
