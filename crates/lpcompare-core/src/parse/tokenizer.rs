//! Whitespace tokenizer and the LP identifier grammar.

/// Bound lines split on the space character only.
pub const BOUND_DELIMITERS: &[char] = &[' '];

/// Constraint rows are re-joined from several physical lines, so embedded
/// tabs and line breaks separate tokens as well.
pub const CONSTRAINT_DELIMITERS: &[char] = &[' ', '\t', '\r', '\n'];

/// Punctuation allowed anywhere in an identifier.
const IDENTIFIER_PUNCTUATION: &str = "!\"#$%&()/,;?@_`'{}|~";

/// Split `line` into maximal runs of non-delimiter characters.
///
/// Empty tokens are dropped, so leading, trailing and repeated delimiters
/// produce nothing.
pub fn tokenize<'a>(line: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    line.split(|c: char| delimiters.contains(&c))
        .filter(|token| !token.is_empty())
        .collect()
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || IDENTIFIER_PUNCTUATION.contains(c)
}

pub fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit() || c == '.'
}

/// True when the whole token matches the identifier grammar.
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_char),
        _ => false,
    }
}
