//! アダプター（表示と対話ループ）

pub mod console;
pub mod repl;
