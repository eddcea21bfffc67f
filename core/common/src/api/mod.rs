//! 上流 API ソース
//!
//! 製品一覧・店舗一覧を返す 2 つの読み取り専用エンドポイントを抽象化する。
//! 実装は HTTP（本番）とフィクスチャ（デモ・テスト用）の 2 種類。

pub mod endpoints;
pub mod factory;
pub mod fixture;
pub mod http;
pub mod source;

pub use endpoints::Endpoints;
pub use factory::{create_source, AnySource, SourceKind};
pub use fixture::FixtureCatalogSource;
pub use http::HttpCatalogSource;
pub use source::CatalogSource;
