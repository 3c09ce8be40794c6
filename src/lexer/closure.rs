//! Closure header helpers
//!
//! A closure header lists parameter names between pipes, e.g. `|a b ...rest|`.
//! The scanner keeps the header as a single token; these functions pick it
//! apart for the evaluator.

/// Parameter names declared by a closure header, in order.
///
/// Whitespace and `|` both separate names. Malformed headers are not
/// rejected, they just yield whatever names can be read.
pub fn extract_closure_params(closure: &str) -> Vec<&str> {
    closure
        .split(|c: char| c.is_whitespace() || c == '|')
        .filter(|name| !name.is_empty())
        .collect()
}

/// Whether `name` is a variate (rest) parameter: exactly three leading dots
/// followed by at least two more characters.
pub fn is_variadic(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 4 && bytes.starts_with(b"...") && bytes[3] != b'.'
}

/// Name of a variate parameter without its `...` prefix
pub fn variadic_name(name: &str) -> Option<&str> {
    if is_variadic(name) {
        name.get(3..)
    } else {
        None
    }
}
