//! 検索エンジン
//!
//! スナップショットに対する 2 方向の読み取り専用検索。
//! どちらも大文字小文字を無視した部分一致で、スナップショットの
//! 挿入順を保って返す（決定的）。副作用なし・純関数。
//!
//! 「0 件」のシグナルは構造で表す:
//! - 外側の Vec が空 = 検索語にマッチする製品／店舗がない
//! - 内側の Vec が空 = その製品を扱う店舗がない／その店舗の製品がない

use crate::domain::{Branch, Product, Snapshot};

/// 製品→店舗検索の 1 件分の結果
#[derive(Debug, Clone, PartialEq)]
pub struct ProductHit {
    pub product: Product,
    /// この製品コードを扱う店舗（スナップショット順）
    pub branches: Vec<Branch>,
}

/// 店舗→製品検索の 1 件分の結果
#[derive(Debug, Clone, PartialEq)]
pub struct BranchHit {
    pub branch: Branch,
    /// この店舗のコードリストに含まれる製品（スナップショット順）
    pub products: Vec<Product>,
}

/// 欠損フィールドはマッチしない扱いの、大文字小文字を無視した部分一致
fn contains_ci(field: Option<&str>, needle_lower: &str) -> bool {
    field
        .map(|s| s.to_lowercase().contains(needle_lower))
        .unwrap_or(false)
}

/// 製品→店舗検索
///
/// 製品名または製品コードに検索語が含まれる製品を抽出し、各製品に
/// ついてそのコードを扱う店舗を（完全一致のメンバーシップで）集める。
pub fn search_by_product(snapshot: &Snapshot, term: &str) -> Vec<ProductHit> {
    let needle = term.to_lowercase();
    snapshot
        .products
        .iter()
        .filter(|p| contains_ci(p.name.as_deref(), &needle) || contains_ci(p.code.as_deref(), &needle))
        .map(|p| {
            let branches = match p.code.as_deref() {
                Some(code) => snapshot
                    .branches
                    .iter()
                    .filter(|b| b.has_code(code))
                    .cloned()
                    .collect(),
                // コードの無い製品はどの店舗のリストにも現れない
                None => Vec::new(),
            };
            ProductHit {
                product: p.clone(),
                branches,
            }
        })
        .collect()
}

/// 店舗→製品検索
///
/// 店舗名に検索語が含まれる店舗を抽出し、各店舗についてコードリストに
/// 含まれる製品を集める。
pub fn search_by_branch(snapshot: &Snapshot, term: &str) -> Vec<BranchHit> {
    let needle = term.to_lowercase();
    snapshot
        .branches
        .iter()
        .filter(|b| contains_ci(b.name.as_deref(), &needle))
        .map(|b| {
            let products = snapshot
                .products
                .iter()
                .filter(|p| p.code.as_deref().map(|c| b.has_code(c)).unwrap_or(false))
                .cloned()
                .collect();
            BranchHit {
                branch: b.clone(),
                products,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Branch;

    fn branch(name: &str, codes: &[&str]) -> Branch {
        Branch {
            name: Some(name.to_string()),
            product_codes: codes.iter().map(|c| c.to_string()).collect(),
            ..Branch::default()
        }
    }

    fn snapshot() -> Snapshot {
        Snapshot {
            products: vec![
                Product::new("PC001", "Motor Insurance"),
                Product::new("PC002", "Home Insurance"),
                Product::new("PC003", "Travel Insurance"),
            ],
            branches: vec![
                branch("Leeds", &["PC001", "PC002"]),
                branch("Leeds North", &["PC001"]),
                branch("York", &["PC003"]),
            ],
        }
    }

    #[test]
    fn test_search_by_product_exact_code() {
        let hits = search_by_product(&snapshot(), "PC001");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product.code.as_deref(), Some("PC001"));
        let names: Vec<_> = hits[0]
            .branches
            .iter()
            .map(|b| b.name.as_deref().unwrap())
            .collect();
        // スナップショット順
        assert_eq!(names, vec!["Leeds", "Leeds North"]);
    }

    #[test]
    fn test_search_by_product_name_substring_case_insensitive() {
        let hits = search_by_product(&snapshot(), "insurance");
        assert_eq!(hits.len(), 3);
        // スナップショット順を保つ
        assert_eq!(hits[0].product.code.as_deref(), Some("PC001"));
        assert_eq!(hits[2].product.code.as_deref(), Some("PC003"));
    }

    #[test]
    fn test_search_by_product_no_match_is_empty() {
        assert!(search_by_product(&snapshot(), "boat").is_empty());
    }

    #[test]
    fn test_product_with_no_branches_has_empty_inner_vec() {
        let mut snap = snapshot();
        snap.products.push(Product::new("PC999", "Ghost Product"));
        let hits = search_by_product(&snap, "PC999");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].branches.is_empty());
    }

    #[test]
    fn test_search_by_branch_case_insensitive_substring() {
        let hits = search_by_branch(&snapshot(), "lEeDs");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].branch.name.as_deref(), Some("Leeds"));
        let codes: Vec<_> = hits[0]
            .products
            .iter()
            .map(|p| p.code.as_deref().unwrap())
            .collect();
        assert_eq!(codes, vec!["PC001", "PC002"]);
    }

    #[test]
    fn test_branch_listing_unknown_code_matches_nothing() {
        let mut snap = snapshot();
        snap.branches.push(branch("Hull", &["ZZ999"]));
        let hits = search_by_branch(&snap, "Hull");
        assert_eq!(hits.len(), 1);
        assert!(hits[0].products.is_empty());
    }

    #[test]
    fn test_missing_names_do_not_match_or_error() {
        let mut snap = snapshot();
        snap.branches.push(Branch::default());
        snap.products.push(Product::default());
        assert_eq!(search_by_branch(&snap, "leeds").len(), 2);
        assert_eq!(search_by_product(&snap, "insurance").len(), 3);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let snap = snapshot();
        let first = search_by_product(&snap, "insurance");
        let second = search_by_product(&snap, "insurance");
        assert_eq!(first, second);
        let b1 = search_by_branch(&snap, "york");
        let b2 = search_by_branch(&snap, "york");
        assert_eq!(b1, b2);
    }
}
