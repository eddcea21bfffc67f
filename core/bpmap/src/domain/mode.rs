//! 検索方向のドメイン型

/// 検索方向（製品→店舗 / 店舗→製品）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// 製品名・製品コードから、扱っている店舗を探す
    ProductToBranch,
    /// 店舗名から、扱っている製品を探す
    BranchToProduct,
}

impl SearchMode {
    /// 文字列から検索方向を解析
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "product" | "products" | "p" => Some(Self::ProductToBranch),
            "branch" | "branches" | "b" => Some(Self::BranchToProduct),
            _ => None,
        }
    }

    /// ログ・表示用の名前
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProductToBranch => "product-to-branch",
            Self::BranchToProduct => "branch-to-product",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(SearchMode::parse("product"), Some(SearchMode::ProductToBranch));
        assert_eq!(SearchMode::parse("P"), Some(SearchMode::ProductToBranch));
        assert_eq!(SearchMode::parse("branches"), Some(SearchMode::BranchToProduct));
        assert_eq!(SearchMode::parse("b"), Some(SearchMode::BranchToProduct));
        assert_eq!(SearchMode::parse("shop"), None);
    }
}
