//! ポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース

pub mod inbound;
