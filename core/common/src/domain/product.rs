//! 製品のドメイン型

/// 製品（コードで一意に識別される）
///
/// 上流の `code` / `detail` をリネームしたもの。欠損フィールドは None の
/// まま保持し、検索時に「マッチしない」扱いにする（エラーにはしない）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Product {
    pub code: Option<String>,
    pub name: Option<String>,
}

impl Product {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            name: Some(name.into()),
        }
    }
}
