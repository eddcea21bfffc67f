//! bpmap コマンドの enum（Command Pattern）
//!
//! 一発検索 vs 対話ループの分岐を enum で明示する。

use crate::domain::{SearchMode, SearchTerm};

/// bpmap の実行モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapperCommand {
    /// ヘルプ表示
    Help,
    /// 一発検索（モードと検索語を引数で指定）
    Search { mode: SearchMode, term: SearchTerm },
    /// 対話ループ（標準入力からコマンドを読む）
    Interactive,
}
