//! Lexer module
//!
//! Turns one ligo expression into the flat list of its top-level tokens:
//!
//! ```text
//! (def add |a b| (+ a b)) ; comment
//!  ^^^ ^^^ ^^^^^ ^^^^^^^
//! ```
//!
//! Nested expressions and arrays stay single tokens; a parser recurses by
//! scanning a sub-expression token again.

pub mod closure;
pub mod comments;
pub mod matcher;
pub mod scanner;
pub mod tokens;

// Re-export types
pub use closure::{extract_closure_params, is_variadic, variadic_name};
pub use comments::strip_comments;
pub use matcher::match_delimiter;
pub use scanner::Scanner;
pub use tokens::{Construct, ScanError, ScanErrorKind, Token, TokenKind};

use crate::util::config::LexerConfig;

/// Scan one expression with the default configuration (comments stripped)
///
/// ```rust
/// use ligo_lexer::scan_tokens;
///
/// let tokens = scan_tokens("(f |x y| body) ; trailing").unwrap();
/// assert_eq!(tokens, ["f", "|x y|", "body"]);
/// ```
pub fn scan_tokens(text: &str) -> Result<Vec<Token>, ScanError> {
    scan_tokens_with(text, &LexerConfig::default())
}

/// Scan one expression
pub fn scan_tokens_with(
    text: &str,
    config: &LexerConfig,
) -> Result<Vec<Token>, ScanError> {
    tracing::debug!("Scanning expression ({} bytes)", text.len());

    let stripped;
    let source = if config.strip_comments {
        stripped = strip_comments(text);
        stripped.as_str()
    } else {
        text
    };

    match Scanner::new(source, config).scan() {
        Ok(tokens) => {
            tracing::debug!("Scan complete: {} tokens", tokens.len());
            Ok(tokens)
        }
        Err(err) => {
            tracing::debug!("Scan failed: {}", err);
            Err(err)
        }
    }
}
