//! Paired delimiter matching

/// Find the delimiter that closes the `open` at `offset`.
///
/// Nested `open`/`close` pairs are counted; delimiters between double quotes
/// are ignored. Returns `None` when `offset` does not hold `open` (or is not a
/// char boundary inside `text`) and when the text ends before the pair closes.
///
/// ```rust
/// use ligo_lexer::match_delimiter;
///
/// assert_eq!(match_delimiter("(a (b) c)", 0, '(', ')'), Some(8));
/// assert_eq!(match_delimiter("(a (b c", 0, '(', ')'), None);
/// ```
pub fn match_delimiter(
    text: &str,
    offset: usize,
    open: char,
    close: char,
) -> Option<usize> {
    let mut chars = text.get(offset..)?.char_indices();
    if chars.next().map(|(_, c)| c) != Some(open) {
        return None;
    }

    let mut depth = 1usize;
    let mut in_quotes = false;
    for (i, c) in chars {
        if c == '"' {
            in_quotes = !in_quotes;
        } else if in_quotes {
            continue;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(offset + i);
            }
        }
    }

    None
}
