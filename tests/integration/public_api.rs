//! Public API integration tests
//!
//! Drives the crate the way a parser would: scan an expression, then recurse
//! into sub-expressions and closure headers.

use ligo_lexer::{
    extract_closure_params, is_variadic, match_delimiter, scan_tokens, strip_comments,
    ScanErrorKind, Token, TokenKind,
};

const PROGRAM: &str = r#"
; a small ligo program
(fn greet |name ...rest|
    (print "hello, " name) ; say hi
    (map [1 2 3] (fn |x| (* x x))))
"#;

/// Count every token in the tree by re-scanning nested expressions
fn count_tree(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .map(|token| match token.kind() {
            TokenKind::Expression => 1 + count_tree(&scan_tokens(token).unwrap()),
            _ => 1,
        })
        .sum()
}

#[test]
fn test_scan_program() {
    let tokens = scan_tokens(PROGRAM).unwrap();
    let texts: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
    assert_eq!(
        texts,
        [
            "fn",
            "greet",
            "|name ...rest|",
            "(print \"hello, \" name)",
            "(map [1 2 3] (fn |x| (* x x)))",
        ]
    );
}

#[test]
fn test_closure_header_of_program() {
    let tokens = scan_tokens(PROGRAM).unwrap();
    let params = extract_closure_params(&tokens[2]);
    assert_eq!(params, ["name", "...rest"]);
    assert!(!is_variadic(params[0]));
    assert!(is_variadic(params[1]));
}

#[test]
fn test_recursive_descent() {
    let tokens = scan_tokens(PROGRAM).unwrap();
    // fn greet |..| (print ..) (map ..)         5
    // print "hello, " name                      3
    // map [1 2 3] (fn ..)                       3
    // fn |x| (* x x)                            3
    // * x x                                     3
    assert_eq!(count_tree(&tokens), 17);
}

#[test]
fn test_positions_refer_to_raw_lines() {
    let tokens = scan_tokens(PROGRAM).unwrap();
    assert_eq!(tokens[0].span.start.line, 3);
    assert_eq!(tokens[4].span.start.line, 5);
    assert_eq!(tokens[4].span.start.column, 5);
}

#[test]
fn test_match_delimiter_on_program() {
    let stripped = strip_comments(PROGRAM);
    let open = stripped.find('(').unwrap();
    let close = match_delimiter(&stripped, open, '(', ')').unwrap();
    assert_eq!(stripped[close + 1..].trim(), "");
}

#[test]
fn test_error_is_reported_with_location() {
    let source = "(fn f |x|\n  (print x)y)";
    let err = scan_tokens(source).unwrap_err();
    assert_eq!(err.kind(), ScanErrorKind::UnexpectedCharacter);
    assert_eq!(err.position().line, 2);
    assert_eq!(err.position().column, 12);
}
