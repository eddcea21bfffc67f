//! コマンドライン引数の解析
//!
//! clap の builder API で解析し、フラットな Config に落としてから
//! MapperCommand へ変換する。ヘルプは独自表示のため clap の自動
//! ヘルプは無効化している。

use crate::domain::{MapperCommand, SearchMode, SearchTerm};
use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use common::error::Error;

/// 解析済みのコマンドライン引数（フラットな形）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    pub interactive: bool,
    /// データソース種別（http | fixture）。未指定なら http。
    pub source: Option<String>,
    pub products_url: Option<String>,
    pub branches_url: Option<String>,
    /// キャッシュ TTL（秒）。未指定なら環境変数かデフォルト 1 時間。
    pub ttl_secs: Option<u64>,
    /// 先頭が検索モード、残りが検索語
    pub positional: Vec<String>,
}

/// parse_args の結果（通常の Config か、補完生成要求か）
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> Command {
    Command::new("bpmap")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("SOURCE"),
        )
        .arg(
            Arg::new("products-url")
                .long("products-url")
                .value_name("URL"),
        )
        .arg(
            Arg::new("branches-url")
                .long("branches-url")
                .value_name("URL"),
        )
        .arg(
            Arg::new("ttl-secs")
                .long("ttl-secs")
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("generate")
                .long("generate")
                .value_name("SHELL")
                .value_parser(clap::value_parser!(Shell)),
        )
        .arg(
            Arg::new("positional")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        interactive: matches.get_flag("interactive"),
        source: matches.get_one::<String>("source").cloned(),
        products_url: matches.get_one::<String>("products-url").cloned(),
        branches_url: matches.get_one::<String>("branches-url").cloned(),
        ttl_secs: matches.get_one::<u64>("ttl-secs").copied(),
        positional: matches
            .get_many::<String>("positional")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は
/// ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "bpmap", &mut std::io::stdout());
}

/// Config を実行コマンドへ変換する
///
/// 検索モードの解決と「検索語が空でない」不変条件はここで担保する。
pub fn config_to_command(config: &Config) -> Result<MapperCommand, Error> {
    if config.help {
        return Ok(MapperCommand::Help);
    }
    if config.interactive {
        return Ok(MapperCommand::Interactive);
    }

    let (mode_word, term_words) = match config.positional.split_first() {
        Some((first, rest)) => (first.as_str(), rest),
        None => {
            return Err(Error::invalid_argument(
                "Specify a search mode: product or branch.",
            ))
        }
    };

    let mode = SearchMode::parse(mode_word).ok_or_else(|| {
        Error::invalid_argument(format!(
            "Unknown search mode: '{}'. Available: product, branch",
            mode_word
        ))
    })?;

    let term = term_words.join(" ").trim().to_string();
    if term.is_empty() {
        let hint = match mode {
            SearchMode::ProductToBranch => "Enter a product name or code to search.",
            SearchMode::BranchToProduct => "Enter a branch name to search.",
        };
        return Err(Error::invalid_argument(hint));
    }

    Ok(MapperCommand::Search {
        mode,
        term: SearchTerm::new(term),
    })
}
