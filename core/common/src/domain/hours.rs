//! 営業時間の正規化と表示
//!
//! 上流の `openingTimes` は文字列・日別エントリの配列・null の
//! いずれでも返りうる。認識できる形状をバリアントに分類し、表示は
//! `display()` に集約する。不正なエントリは黙ってスキップし、
//! この経路は決して panic しない。

use serde_json::Value;

/// 上流が返しうる営業時間の形状
#[derive(Debug, Clone, PartialEq)]
pub enum OpeningHours {
    /// null・欠損・空（表示は "N/A"）
    Unknown,
    /// すでに人間可読の文字列（そのまま表示）
    Text(String),
    /// 日別エントリの配列
    Week(Vec<DayHours>),
    /// それ以外（JSON 表現にフォールバック）
    Other(Value),
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self::Unknown
    }
}

/// 1 日分の営業時間エントリ
///
/// 時・分は欠損しうる。開店時または閉店時が無いエントリは表示時に
/// スキップされる。分は「あるが null」の場合 0 として扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHours {
    pub day: Option<String>,
    pub opening_hour: Option<i64>,
    pub opening_minute: Option<i64>,
    pub closing_hour: Option<i64>,
    pub closing_minute: Option<i64>,
}

/// 数値・数値文字列を整数の時刻成分として解釈する
fn int_of(value: Option<&Value>) -> Option<i64> {
    let v = value?;
    v.as_i64()
        .or_else(|| v.as_f64().map(|f| f as i64))
        .or_else(|| v.as_str().and_then(|s| s.trim().parse::<i64>().ok()))
}

impl DayHours {
    /// 日別エントリの生 JSON から組み立てる。オブジェクト以外は None。
    fn from_entry(entry: &Value) -> Option<Self> {
        let obj = entry.as_object()?;
        Some(Self {
            day: obj.get("day").and_then(|v| v.as_str()).map(str::to_string),
            opening_hour: int_of(obj.get("openingHour")),
            opening_minute: int_of(obj.get("openingMinute")),
            closing_hour: int_of(obj.get("closingHour")),
            closing_minute: int_of(obj.get("closingMinute")),
        })
    }

    /// `HH:MM–HH:MM`（必要なら曜日プレフィクス付き）に描画する。
    /// 開店時か閉店時が欠けていれば None（スキップ）。
    fn render(&self) -> Option<String> {
        let open_h = self.opening_hour?;
        let close_h = self.closing_hour?;
        let open_m = self.opening_minute.unwrap_or(0);
        let close_m = self.closing_minute.unwrap_or(0);
        let times = format!("{:02}:{:02}–{:02}:{:02}", open_h, open_m, close_h, close_m);
        match self.day.as_deref() {
            Some(day) if !day.is_empty() => Some(format!("{}: {}", day, times)),
            _ => Some(times),
        }
    }
}

impl OpeningHours {
    /// 生の `openingTimes` 値を分類する
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Unknown,
            Some(Value::String(s)) if s.is_empty() => Self::Unknown,
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(Value::Array(entries)) if entries.is_empty() => Self::Unknown,
            Some(Value::Array(entries)) => Self::Week(
                entries
                    .iter()
                    .filter_map(DayHours::from_entry)
                    .collect(),
            ),
            // 0 や false は「値なし」と同じ扱い
            Some(Value::Bool(false)) => Self::Unknown,
            Some(Value::Number(n)) if n.as_i64() == Some(0) => Self::Unknown,
            Some(other) => Self::Other(other.clone()),
        }
    }

    /// 表示用文字列に変換する（決して失敗しない）
    pub fn display(&self) -> String {
        match self {
            Self::Unknown => "N/A".to_string(),
            Self::Text(s) => s.clone(),
            Self::Week(days) => {
                let rendered: Vec<String> = days.iter().filter_map(DayHours::render).collect();
                if rendered.is_empty() {
                    "N/A".to_string()
                } else {
                    rendered.join(", ")
                }
            }
            Self::Other(v) => v.to_string(),
        }
    }
}
