//! Expression scanner
//!
//! Splits the body of one `( ... )` expression into its top-level tokens.
//! Nested expressions and arrays are located with the delimiter matcher and
//! emitted whole; quoted strings and closure headers are tracked with two
//! flags. Every token is a contiguous run of the source, so the token being
//! built is just its start offset until it is emitted.

use super::matcher::match_delimiter;
use super::tokens::{Construct, ScanError, Token};
use crate::util::config::LexerConfig;
use crate::util::span::LineIndex;

/// Single-use scanner over one expression
pub struct Scanner<'a> {
    source: &'a str,
    lines: LineIndex,
    trace_tokens: bool,
    in_quotes: bool,
    in_closure: bool,
    /// Start of the token being accumulated
    token_start: Option<usize>,
    tokens: Vec<Token>,
}

fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

impl<'a> Scanner<'a> {
    pub fn new(
        source: &'a str,
        config: &LexerConfig,
    ) -> Self {
        Self {
            source,
            lines: LineIndex::new(source),
            trace_tokens: config.trace_tokens,
            in_quotes: false,
            in_closure: false,
            token_start: None,
            tokens: Vec::new(),
        }
    }

    /// Validate the `( ... )` envelope and split its body into tokens
    pub fn scan(mut self) -> Result<Vec<Token>, ScanError> {
        let (open, last) = self.envelope()?;
        let bytes = self.source.as_bytes();

        let mut i = open + 1;
        while i <= last {
            match bytes[i] {
                b if is_separator(b) => {
                    if !self.in_quotes && !self.in_closure {
                        self.flush(i);
                    }
                }
                b'|' => {
                    if self.in_closure {
                        self.in_closure = false;
                    } else if !self.in_quotes {
                        if self.token_start.is_some() {
                            return Err(self.separator_expected(i, Construct::Closure));
                        }
                        self.token_start = Some(i);
                        self.in_closure = true;
                    }
                }
                b'"' => {
                    if !self.in_quotes {
                        if self.token_start.is_some() {
                            return Err(self.separator_expected(i, Construct::Quote));
                        }
                        self.token_start = Some(i);
                        self.in_quotes = true;
                    } else {
                        self.in_quotes = false;
                        self.flush(i + 1);
                    }
                }
                b'[' | b'(' => {
                    if self.in_closure {
                        return Err(self.inside_closure(i));
                    }
                    if !self.in_quotes {
                        i = self.nested(i, last)?;
                        continue;
                    }
                }
                b')' => {
                    if self.in_closure {
                        return Err(self.inside_closure(i));
                    }
                    if !self.in_quotes {
                        if i != last {
                            return Err(ScanError::PrematureEnd {
                                position: self.lines.position(i),
                            });
                        }
                        self.flush(i);
                    }
                }
                b']' => {
                    if self.in_closure {
                        return Err(self.inside_closure(i));
                    }
                    if !self.in_quotes {
                        self.flush(i);
                    }
                }
                _ => {
                    if self.token_start.is_none() {
                        self.token_start = Some(i);
                    }
                }
            }
            i += 1;
        }

        if let Some(start) = self.token_start {
            let construct = if self.in_quotes {
                Some(Construct::Quote)
            } else if self.in_closure {
                Some(Construct::Closure)
            } else {
                None
            };
            if let Some(construct) = construct {
                return Err(ScanError::UnterminatedConstruct {
                    position: self.lines.position(start),
                    construct,
                });
            }
        }

        Ok(self.tokens)
    }

    /// Offsets of the opening `(` and the final `)` of the trimmed source
    fn envelope(&self) -> Result<(usize, usize), ScanError> {
        let trimmed = self.source.trim();
        let start = self.source.len() - self.source.trim_start().len();

        if trimmed.len() < 2 {
            return Err(ScanError::MalformedExpression {
                position: self.lines.position(start),
                message: format!("expected at least `()`, got `{}`", trimmed),
            });
        }

        let first = trimmed.chars().next().unwrap_or_default();
        if first != '(' {
            return Err(ScanError::MalformedExpression {
                position: self.lines.position(start),
                message: format!("missing opening delimiter `(`, found `{}`", first),
            });
        }

        let (last_offset, last) = trimmed.char_indices().next_back().unwrap_or_default();
        if last != ')' {
            return Err(ScanError::MalformedExpression {
                position: self.lines.position(start + last_offset),
                message: format!("missing closing delimiter `)`, found `{}`", last),
            });
        }

        Ok((start, start + last_offset))
    }

    /// Emit the `[...]` or `(...)` starting at `open` as one token and return
    /// the offset to resume scanning from
    fn nested(
        &mut self,
        open: usize,
        last: usize,
    ) -> Result<usize, ScanError> {
        let (construct, open_ch, close_ch) = if self.source.as_bytes()[open] == b'[' {
            (Construct::Array, '[', ']')
        } else {
            (Construct::Expression, '(', ')')
        };

        if self.token_start.is_some() {
            return Err(self.separator_expected(open, construct));
        }

        let unterminated = || ScanError::UnterminatedConstruct {
            position: self.lines.position(open),
            construct,
        };
        let close = match_delimiter(self.source, open, open_ch, close_ch).ok_or_else(unterminated)?;
        let after = close + 1;
        // The pair swallowed the closing `)` of the enclosing expression
        if after > last {
            return Err(unterminated());
        }

        self.emit(open, after);

        if after == last {
            return Ok(after);
        }
        let next = self.source.as_bytes()[after];
        if is_separator(next) {
            return Ok(after + 1);
        }

        Err(ScanError::UnexpectedCharacter {
            position: self.lines.position(after),
            ch: self.source[after..].chars().next().unwrap_or_default(),
            message: format!("unexpected character found at {} end", construct),
        })
    }

    fn flush(
        &mut self,
        end: usize,
    ) {
        if let Some(start) = self.token_start {
            self.emit(start, end);
        }
    }

    fn emit(
        &mut self,
        start: usize,
        end: usize,
    ) {
        let token = Token::new(&self.source[start..end], self.lines.span(start, end));
        if self.trace_tokens {
            tracing::trace!("token {:?} at {}", token.text, token.span);
        }
        self.tokens.push(token);
        self.token_start = None;
    }

    fn separator_expected(
        &self,
        offset: usize,
        construct: Construct,
    ) -> ScanError {
        ScanError::SeparatorExpected {
            position: self.lines.position(offset),
            construct,
        }
    }

    fn inside_closure(
        &self,
        offset: usize,
    ) -> ScanError {
        let ch = char::from(self.source.as_bytes()[offset]);
        ScanError::UnexpectedCharacter {
            position: self.lines.position(offset),
            ch,
            message: format!("`{}` not expected inside a closure", ch),
        }
    }
}
