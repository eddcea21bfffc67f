//! ソースファクトリー
//!
//! ソース種別に基づいて適切なソースを作成します。

use crate::api::endpoints::Endpoints;
use crate::api::fixture::FixtureCatalogSource;
use crate::api::http::HttpCatalogSource;
use crate::api::source::CatalogSource;
use crate::error::Error;
use serde_json::Value;

/// ソース種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// 本番 API を HTTP で叩く
    Http,
    /// 組み込みサンプルデータ（ネットワーク不要）
    Fixture,
}

impl SourceKind {
    /// 文字列からソース種別を解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "http" => Some(Self::Http),
            "fixture" => Some(Self::Fixture),
            _ => None,
        }
    }

    /// ソース種別を文字列に変換
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Fixture => "fixture",
        }
    }

    /// 利用可能なソース種別名
    pub fn available() -> &'static [&'static str] {
        &["http", "fixture"]
    }
}

/// ソースの enum ラッパー
///
/// 異なるソース種別を型安全に扱うために使用します。
pub enum AnySource {
    Http(HttpCatalogSource),
    Fixture(FixtureCatalogSource),
}

impl CatalogSource for AnySource {
    fn name(&self) -> &str {
        match self {
            Self::Http(s) => s.name(),
            Self::Fixture(s) => s.name(),
        }
    }

    fn fetch_products(&self) -> Result<Value, Error> {
        match self {
            Self::Http(s) => s.fetch_products(),
            Self::Fixture(s) => s.fetch_products(),
        }
    }

    fn fetch_branches(&self) -> Result<Value, Error> {
        match self {
            Self::Http(s) => s.fetch_branches(),
            Self::Fixture(s) => s.fetch_branches(),
        }
    }
}

/// ソース種別とエンドポイントからソースを作成
pub fn create_source(kind: SourceKind, endpoints: Endpoints) -> AnySource {
    match kind {
        SourceKind::Http => AnySource::Http(HttpCatalogSource::new(endpoints)),
        SourceKind::Fixture => AnySource::Fixture(FixtureCatalogSource::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(SourceKind::parse("http"), Some(SourceKind::Http));
        assert_eq!(SourceKind::parse("FIXTURE"), Some(SourceKind::Fixture));
        assert_eq!(SourceKind::parse("ftp"), None);
    }

    #[test]
    fn test_create_source_names() {
        let http = create_source(SourceKind::Http, Endpoints::default());
        assert_eq!(http.name(), "http");
        let fixture = create_source(SourceKind::Fixture, Endpoints::default());
        assert_eq!(fixture.name(), "fixture");
    }
}
