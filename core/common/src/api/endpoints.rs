//! 上流 API のエンドポイント

/// 製品一覧 API のデフォルト URL
pub const DEFAULT_PRODUCTS_URL: &str = "https://api.aplan.co.uk/api/producttypecodeitems";

/// 店舗一覧 API のデフォルト URL
///
/// 非ローカル・非営業店舗も含めて全件取得する。
pub const DEFAULT_BRANCHES_URL: &str =
    "https://api.aplan.co.uk/api/branches?includeNonLocalBranches=true&includeNonTradingBranches=true";

/// フェッチ先の URL ペア
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub products_url: String,
    pub branches_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            branches_url: DEFAULT_BRANCHES_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let ep = Endpoints::default();
        assert_eq!(ep.products_url, DEFAULT_PRODUCTS_URL);
        assert!(ep.branches_url.contains("includeNonTradingBranches=true"));
    }
}
