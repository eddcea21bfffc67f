//! エラーハンドリング
//!
//! メッセージと終了コード（sysexits 準拠）を一体で扱う。
//! フィールド単位の形状異常はここまで上がらず、各正規化関数が安全な
//! デフォルトに落とす。Error になるのはフェッチ失敗・引数不正など
//! 「そのインタラクションを中断すべき」場合のみ。

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数・使い方の誤り（終了コード 64）
    #[error("{0}")]
    InvalidArgument(String),
    /// I/O エラー（終了コード 74）
    #[error("{0}")]
    Io(String),
    /// JSON の解析失敗（終了コード 74）
    #[error("{0}")]
    Json(String),
    /// HTTP リクエスト失敗（終了コード 74）
    #[error("{0}")]
    Http(String),
    /// 環境変数の不備（終了コード 70）
    #[error("{0}")]
    Env(String),
    /// その他の内部エラー（終了コード 70）
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// 使い方の誤りなら true（main が usage を表示するかどうかの判定用）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// sysexits 風の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Io(_) | Self::Json(_) | Self::Http(_) => 74,
            Self::Env(_) | Self::System(_) => 70,
        }
    }
}
