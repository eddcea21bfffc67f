//! bpmap: Branch & Product Code Mapper
//!
//! 上流 2 API（製品一覧・店舗一覧）を取得・正規化し、製品→店舗 /
//! 店舗→製品の 2 方向で検索する CLI。

mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};
use domain::MapperCommand;
use ports::inbound::RunMapperApp;
use std::process;
use wiring::{wire_mapper, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl RunMapperApp for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let cmd = config_to_command(&config)?;
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command started".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                Some(m)
            },
        });

        let result = match cmd {
            MapperCommand::Help => {
                print_help();
                Ok(0)
            }
            MapperCommand::Interactive => adapter::repl::run(&self.app.use_case),
            MapperCommand::Search { mode, term } => {
                self.app.use_case.run_search(mode, &term).map(|output| {
                    println!("{}", output);
                    0
                })
            }
        };

        let code = result.as_ref().copied().unwrap_or(0);
        let _ = self.app.log.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "command finished".to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command_name));
                m.insert("exit_code".to_string(), serde_json::json!(code));
                Some(m)
            },
        });
        if let Err(ref e) = result {
            let _ = self.app.log.log(&LogRecord {
                ts: now_iso8601(),
                level: LogLevel::Error,
                message: e.to_string(),
                layer: Some("cli".to_string()),
                kind: Some("error".to_string()),
                fields: None,
            });
        }
        result
    }
}

fn cmd_name_for_log(cmd: &MapperCommand) -> &'static str {
    match cmd {
        MapperCommand::Help => "help",
        MapperCommand::Interactive => "interactive",
        MapperCommand::Search { mode, .. } => mode.as_str(),
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("bpmap: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_mapper(&config)?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: bpmap [options] <product|branch> <term...>");
}

fn print_help() {
    println!("Usage: bpmap [options] <product|branch> <term...>");
    println!("Modes:");
    println!("  product <term...>   Search products by name or code, list the branches that stock each match");
    println!("  branch <term...>    Search branches by name, list the products allocated to each match");
    println!("Options:");
    println!("  -h, --help              Show this help message");
    println!("  -i, --interactive       Start an interactive prompt (product/branch commands, quit to exit)");
    println!("  -s, --source <SOURCE>   Data source: http (live APIs, default) or fixture (built-in sample data)");
    println!("  --products-url <URL>    Override the product list endpoint");
    println!("  --branches-url <URL>    Override the branch list endpoint");
    println!("  --ttl-secs <SECS>       Cache window for fetched data. Default: 3600");
    println!("  --generate <shell>      Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  BPMAP_PRODUCTS_URL    Product list endpoint (overridden by --products-url)");
    println!("  BPMAP_BRANCHES_URL    Branch list endpoint (overridden by --branches-url)");
    println!("  BPMAP_CACHE_TTL_SECS  Cache window in seconds (overridden by --ttl-secs)");
    println!("  BPMAP_STATE_DIR       Directory for the JSONL log. Default: $XDG_STATE_HOME/bpmap");
    println!();
    println!("Description:");
    println!("  Fetches the product and branch lists from the upstream APIs, joins them");
    println!("  via each branch's product-code list, and searches in either direction.");
    println!("  Matching is a case-insensitive substring match; results keep API order.");
    println!();
    println!("Examples:");
    println!("  bpmap product motor");
    println!("  bpmap product PC001");
    println!("  bpmap branch leeds");
    println!("  bpmap -s fixture branch leeds");
    println!("  bpmap -i");
}
