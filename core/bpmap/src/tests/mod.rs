//! bpmap のモジュールテスト

mod args_tests;
mod console_tests;
