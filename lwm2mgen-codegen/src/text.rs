//! Plain-text helpers shared by the emitters.

/// Wraps text to the given width with a greedy line-break strategy.
///
/// Runs of whitespace (including newlines) collapse to single spaces
/// before wrapping.  A word longer than the width gets a line of its
/// own.
#[must_use]
pub fn fill(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        if line_len == 0 {
            out.push_str(word);
            line_len = word.len();
        } else if line_len + 1 + word.len() <= width {
            out.push(' ');
            out.push_str(word);
            line_len += 1 + word.len();
        } else {
            out.push('\n');
            out.push_str(word);
            line_len = word.len();
        }
    }

    out
}

/// Reflows free-form description text into the body of a block comment.
///
/// The result is meant to follow a `" * "` prefix on the first line;
/// continuation lines carry their own prefix.
#[must_use]
pub fn comment_block(text: &str) -> String {
    fill(text, 70).replace('\n', "\n * ")
}

/// Indents every line after the first by `n` spaces.
///
/// Blank lines stay empty instead of gaining trailing whitespace.  The
/// first line is left alone so the fragment can be placed after an
/// already-indented prefix.
#[must_use]
pub fn indent_tail(fragment: &str, n: usize) -> String {
    let pad = " ".repeat(n);
    let mut out = String::new();

    for (i, line) in fragment.lines().enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(&pad);
            }
        }
        out.push_str(line);
    }

    out
}
