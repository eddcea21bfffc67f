//! bpmap 共通ライブラリ
//!
//! CLI（bpmap）から使われるコア機能を提供します。
//! 上流 API の取得・正規化・検索・スナップショットキャッシュが中心です。

/// エラーハンドリング
pub mod error;

/// Outbound ポート（時刻・環境変数・ログ）
pub mod ports;

/// ポートの標準実装
pub mod adapter;

/// 上流 API ソース（HTTP / フィクスチャ）
pub mod api;

/// ドメイン型（製品・店舗・スナップショット）
pub mod domain;

/// 生レコード列の正規化
pub mod normalize;

/// 検索エンジン（製品→店舗 / 店舗→製品）
pub mod query;

/// TTL 付きスナップショットキャッシュ
pub mod cache;
