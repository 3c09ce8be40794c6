//! Configuration file integration tests

use ligo_lexer::util::config::{ConfigError, LexerConfig};
use ligo_lexer::{scan_tokens_with, TokenKind};
use std::fs;

#[test]
fn test_config_file_controls_comment_stripping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ligo.toml");
    fs::write(&path, "[lexer]\nstrip_comments = false\n").unwrap();

    let config = LexerConfig::load(&path).unwrap();
    let tokens = scan_tokens_with("(a ;b)", &config).unwrap();
    assert_eq!(tokens, ["a", ";b"]);
    assert_eq!(tokens[1].kind(), TokenKind::Atom);
}

#[test]
fn test_broken_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ligo.toml");
    fs::write(&path, "[lexer\n").unwrap();

    assert!(matches!(LexerConfig::load(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(LexerConfig::load(dir.path()), Err(ConfigError::Io(_))));
}
