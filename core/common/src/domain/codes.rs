//! 製品コードリストの正規化
//!
//! 上流 API は `productCodes` を配列・カンマ区切り文字列・null・欠損と
//! いった複数の形状で返す。ここでは認識できる形状を明示的なバリアントに
//! 分類してから正規化する。どの形状でもエラーにはならない。

use serde_json::Value;

/// 上流が返しうるコードリストの形状
#[derive(Debug, Clone, PartialEq)]
pub enum CodeList {
    /// JSON 配列（順序を保ったまま使う）
    Listed(Vec<Value>),
    /// カンマ区切りの文字列
    Delimited(String),
    /// null または欠損
    Absent,
    /// それ以外（オブジェクト・数値など）
    Other(Value),
}

impl CodeList {
    /// 生の値を形状で分類する
    pub fn classify(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::Array(items)) => Self::Listed(items.clone()),
            Some(Value::String(s)) => Self::Delimited(s.clone()),
            Some(other) => Self::Other(other.clone()),
        }
    }

    /// 形状ごとの正規化。常に（空かもしれない）文字列のリストを返す。
    pub fn normalize(self) -> Vec<String> {
        match self {
            // 文字列要素のみ残す。文字列以外の要素はどの製品コードとも
            // 一致し得ないため落とす。
            Self::Listed(items) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            // カンマで分割し、前後の空白を除去、空要素は捨てる
            Self::Delimited(s) => s
                .split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect(),
            Self::Absent => Vec::new(),
            // オブジェクトはキー列へ（汎用的なシーケンス化）。
            // それ以外のスカラーは空リスト。
            Self::Other(Value::Object(map)) => map.into_iter().map(|(k, _)| k).collect(),
            Self::Other(_) => Vec::new(),
        }
    }
}

/// 生の `productCodes` 値を文字列リストに正規化する（決して失敗しない）
pub fn normalize_codes(value: Option<&Value>) -> Vec<String> {
    CodeList::classify(value).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_preserves_order() {
        let raw = json!(["PC003", "PC001", "PC002"]);
        assert_eq!(
            normalize_codes(Some(&raw)),
            vec!["PC003", "PC001", "PC002"]
        );
    }

    #[test]
    fn test_array_drops_non_string_elements() {
        let raw = json!(["PC001", 42, null, "PC002"]);
        assert_eq!(normalize_codes(Some(&raw)), vec!["PC001", "PC002"]);
    }

    #[test]
    fn test_delimited_string_splits_trims_drops_empty() {
        let raw = json!("A, B ,,C");
        assert_eq!(normalize_codes(Some(&raw)), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_single_code_string() {
        let raw = json!("PC001");
        assert_eq!(normalize_codes(Some(&raw)), vec!["PC001"]);
    }

    #[test]
    fn test_null_and_absent_are_empty() {
        assert!(normalize_codes(Some(&Value::Null)).is_empty());
        assert!(normalize_codes(None).is_empty());
    }

    #[test]
    fn test_object_yields_keys() {
        let raw = json!({"PC001": true, "PC002": true});
        let codes = normalize_codes(Some(&raw));
        assert_eq!(codes.len(), 2);
        assert!(codes.contains(&"PC001".to_string()));
        assert!(codes.contains(&"PC002".to_string()));
    }

    #[test]
    fn test_exotic_scalars_are_empty() {
        assert!(normalize_codes(Some(&json!(42))).is_empty());
        assert!(normalize_codes(Some(&json!(true))).is_empty());
    }
}
