use crate::cli::{config_to_command, parse_args_from};
use crate::domain::{MapperCommand, SearchMode};

#[test]
fn test_parse_product_search() {
    let config = parse_args_from(&["bpmap", "product", "motor"]).unwrap();
    let cmd = config_to_command(&config).unwrap();
    match cmd {
        MapperCommand::Search { mode, term } => {
            assert_eq!(mode, SearchMode::ProductToBranch);
            assert_eq!(term.as_ref(), "motor");
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_multi_word_term_joined() {
    let config = parse_args_from(&["bpmap", "branch", "leeds", "north"]).unwrap();
    match config_to_command(&config).unwrap() {
        MapperCommand::Search { mode, term } => {
            assert_eq!(mode, SearchMode::BranchToProduct);
            assert_eq!(term.as_ref(), "leeds north");
        }
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_mode_aliases() {
    let config = parse_args_from(&["bpmap", "p", "PC001"]).unwrap();
    assert!(matches!(
        config_to_command(&config).unwrap(),
        MapperCommand::Search {
            mode: SearchMode::ProductToBranch,
            ..
        }
    ));
    let config = parse_args_from(&["bpmap", "b", "york"]).unwrap();
    assert!(matches!(
        config_to_command(&config).unwrap(),
        MapperCommand::Search {
            mode: SearchMode::BranchToProduct,
            ..
        }
    ));
}

#[test]
fn test_missing_mode_is_usage_error() {
    let config = parse_args_from(&["bpmap"]).unwrap();
    let err = config_to_command(&config).unwrap_err();
    assert!(err.is_usage());
    assert_eq!(err.exit_code(), 64);
}

#[test]
fn test_unknown_mode_is_usage_error() {
    let config = parse_args_from(&["bpmap", "shop", "leeds"]).unwrap();
    let err = config_to_command(&config).unwrap_err();
    assert!(err.is_usage());
    assert!(err.to_string().contains("Unknown search mode"));
}

#[test]
fn test_empty_term_is_usage_error() {
    let config = parse_args_from(&["bpmap", "product"]).unwrap();
    let err = config_to_command(&config).unwrap_err();
    assert!(err.is_usage());
    assert!(err.to_string().contains("product name or code"));

    let config = parse_args_from(&["bpmap", "branch"]).unwrap();
    let err = config_to_command(&config).unwrap_err();
    assert!(err.to_string().contains("branch name"));
}

#[test]
fn test_help_flag_wins() {
    let config = parse_args_from(&["bpmap", "-h"]).unwrap();
    assert!(matches!(
        config_to_command(&config).unwrap(),
        MapperCommand::Help
    ));
}

#[test]
fn test_interactive_flag() {
    let config = parse_args_from(&["bpmap", "-i"]).unwrap();
    assert!(matches!(
        config_to_command(&config).unwrap(),
        MapperCommand::Interactive
    ));
}

#[test]
fn test_options_parsed() {
    let config = parse_args_from(&[
        "bpmap",
        "-s",
        "fixture",
        "--ttl-secs",
        "60",
        "--products-url",
        "http://localhost:9000/products",
        "product",
        "motor",
    ])
    .unwrap();
    assert_eq!(config.source.as_deref(), Some("fixture"));
    assert_eq!(config.ttl_secs, Some(60));
    assert_eq!(
        config.products_url.as_deref(),
        Some("http://localhost:9000/products")
    );
    assert_eq!(config.positional, vec!["product", "motor"]);
}

#[test]
fn test_invalid_ttl_rejected() {
    let err = parse_args_from(&["bpmap", "--ttl-secs", "soon", "product", "x"]).unwrap_err();
    assert!(err.is_usage());
}
