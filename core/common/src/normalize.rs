//! 生レコード列の正規化
//!
//! 上流 2 API の生 JSON を一貫した内部スキーマ（Snapshot）へ変形する。
//! フィールドのリネームは固定のマッピング:
//! - 製品: `code` → product.code, `detail` → product.name
//! - 店舗: `name` / `manager` / `postalAddress` / `openingTimes` /
//!   `productCodes` → Branch の各フィールド
//!
//! レコード単位・フィールド単位の異常は安全なデフォルトへ落とす。
//! Error になるのはペイロードが表形式（JSON 配列）ですらない場合のみ。

use crate::domain::{normalize_codes, Branch, OpeningHours, Product, Snapshot};
use crate::error::Error;
use serde_json::Value;

/// スカラーを文字列フィールドとして取り出す
///
/// 文字列はそのまま、数値・真偽値は文字列化して検索可能にする。
/// null・欠損・それ以外の形状は None（検索でマッチしない扱い）。
fn str_field(record: &Value, key: &str) -> Option<String> {
    match record.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

fn normalize_product(record: &Value) -> Product {
    Product {
        code: str_field(record, "code"),
        name: str_field(record, "detail"),
    }
}

fn normalize_branch(record: &Value) -> Branch {
    Branch {
        name: str_field(record, "name"),
        manager: str_field(record, "manager"),
        address: record.get("postalAddress").cloned().unwrap_or(Value::Null),
        opening_hours: OpeningHours::from_value(record.get("openingTimes")),
        product_codes: normalize_codes(record.get("productCodes")),
    }
}

/// 生の両ペイロードからスナップショットを組み立てる
///
/// どちらかが JSON 配列でなければ Error（表形式のレコードにできない）。
/// 配列中のオブジェクトでない行はスキップする。
pub fn normalize(products_raw: &Value, branches_raw: &Value) -> Result<Snapshot, Error> {
    let product_rows = products_raw
        .as_array()
        .ok_or_else(|| Error::json("product payload is not a JSON array"))?;
    let branch_rows = branches_raw
        .as_array()
        .ok_or_else(|| Error::json("branch payload is not a JSON array"))?;

    let products = product_rows
        .iter()
        .filter(|row| row.is_object())
        .map(normalize_product)
        .collect();
    let branches = branch_rows
        .iter()
        .filter(|row| row.is_object())
        .map(normalize_branch)
        .collect();

    Ok(Snapshot { products, branches })
}
