//! 正規化済みスナップショット

use crate::domain::{Branch, Product};

/// 正規化済みの両コレクション（プロセス内の不変なコピー）
///
/// キャッシュの TTL 窓の間だけ有効。フェッチごとに丸ごと作り直され、
/// 以後いっさい変更されない。順序は上流の挿入順を保つ。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub branches: Vec<Branch>,
}

impl Snapshot {
    /// 両方のコレクションにデータがあるか
    ///
    /// フェッチ失敗時は空のスナップショットがキャッシュされるため、
    /// 呼び出し側はこれで「読み込み失敗」状態を判定する。
    pub fn has_data(&self) -> bool {
        !self.products.is_empty() && !self.branches.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_has_no_data() {
        assert!(!Snapshot::default().has_data());
    }

    #[test]
    fn test_partial_snapshot_has_no_data() {
        let snap = Snapshot {
            products: vec![Product::new("PC001", "Motor Insurance")],
            branches: Vec::new(),
        };
        assert!(!snap.has_data());
    }
}
