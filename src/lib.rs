//! ligo lexer
//!
//! Lexical front-end for ligo, a small Lisp-family configuration and
//! expression language. Source text goes in, the top-level tokens of one
//! parenthesized expression come out.
//!
//! # Example
//!
//! ```rust
//! use ligo_lexer::{scan_tokens, TokenKind};
//!
//! let tokens = scan_tokens(r#"(set name "ligo" [1 2 3]) ; config"#).unwrap();
//! assert_eq!(tokens, ["set", "name", "\"ligo\"", "[1 2 3]"]);
//! assert_eq!(tokens[3].kind(), TokenKind::Array);
//! ```

#![doc(html_root_url = "https://docs.rs/ligo-lexer")]
#![warn(rust_2018_idioms)]

pub mod lexer;

// Utility modules
pub mod util;

// Re-exports
pub use lexer::{
    extract_closure_params, is_variadic, match_delimiter, scan_tokens, scan_tokens_with,
    strip_comments, variadic_name, Construct, ScanError, ScanErrorKind, Token, TokenKind,
};
pub use util::config::LexerConfig;
pub use util::span::{Position, Span};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
