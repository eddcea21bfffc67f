//! 対話ループ
//!
//! 標準入力から 1 行ずつコマンドを読み、検索ユースケースを呼ぶ。
//! フェッチ失敗はそのインタラクションを中断するだけで、ループ自体は
//! 続行する（次の入力で再試行できる）。

use crate::domain::{SearchMode, SearchTerm};
use crate::usecase::MapperUseCase;
use common::error::Error;
use std::io::{self, BufRead, Write};

const COMMANDS_HINT: &str = "Commands: product <term> | branch <term> | help | quit";

/// 対話ループを実行する。EOF か quit で終了コード 0。
pub fn run(use_case: &MapperUseCase) -> Result<i32, Error> {
    println!("Branch & Product Code Mapper (interactive)");
    println!("{}", COMMANDS_HINT);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print!("bpmap> ");
        io::stdout()
            .flush()
            .map_err(|e| Error::io_msg(e.to_string()))?;

        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(e.to_string()))?;
        if bytes == 0 {
            // EOF
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        if line == "help" {
            println!("{}", COMMANDS_HINT);
            continue;
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let mode_word = parts.next().unwrap_or_default();
        let term = parts.next().unwrap_or_default().trim();

        let Some(mode) = SearchMode::parse(mode_word) else {
            eprintln!("bpmap: Unknown command: '{}'. {}", mode_word, COMMANDS_HINT);
            continue;
        };
        if term.is_empty() {
            let hint = match mode {
                SearchMode::ProductToBranch => "Enter a product name or code to search.",
                SearchMode::BranchToProduct => "Enter a branch name to search.",
            };
            println!("{}", hint);
            continue;
        }

        match use_case.run_search(mode, &SearchTerm::new(term)) {
            Ok(output) => println!("{}", output),
            Err(e) => eprintln!("bpmap: {}", e),
        }
    }
    Ok(0)
}
