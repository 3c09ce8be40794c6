//! `;` line comments

/// Strip `;` comments from every line of `text`.
///
/// A `;` inside a double-quoted string is kept. Quote state starts fresh on
/// each line, so a string spanning several lines does not protect a `;` on
/// its continuation lines. Line terminators are copied unchanged.
pub fn strip_comments(text: &str) -> String {
    let mut stripped = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        let (body, terminator) = split_terminator(line);
        stripped.push_str(&body[..comment_start(body)]);
        stripped.push_str(terminator);
    }

    stripped
}

/// Offset of the first unquoted `;`, or the line length when there is none
fn comment_start(line: &str) -> usize {
    let mut in_quotes = false;
    for (i, b) in line.bytes().enumerate() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b';' if !in_quotes => return i,
            _ => {}
        }
    }
    line.len()
}

fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
