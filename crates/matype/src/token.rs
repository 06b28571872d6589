//! Operator token table.
//!
//! Operators are looked up by the *whole* run of operator characters the
//! [`Operator`](crate::context::Context::Operator) context accumulated. There is
//! no prefix matching: `<=` and `<==>` are unrelated keys, and a run that is not
//! a key (e.g. `^^`) passes through as literal text.

/// LaTeX emitted for a row break (`;`).
pub const ROW_BREAK: &str = "\\\\\n";

/// Every shorthand operator and its LaTeX rendering.
///
/// `!>` renders as `\ngtr` and `\nless` has no shorthand. The table used to list
/// `!>` for both, with the later entry winning. `!<` is probably the key
/// `\nless` wanted but stays unmapped until that is confirmed.
pub const OPERATORS: &[(&str, &str)] = &[
    ("+", "+"),
    ("-", "-"),
    ("*", "\\times"),
    (">", ">"),
    ("<", "<"),
    ("=", "="),
    ("!=", "\\neq"),
    ("<=", "\\leq"),
    ("!<=", "\\nleq"),
    (">=", "\\geq"),
    ("!>=", "\\ngeq"),
    ("!>", "\\ngtr"),
    ("~=", "\\approx"),
    ("=>", "\\Rightarrow"),
    ("->", "\\rightarrow"),
    ("==>", "\\implies"),
    ("<==>", "\\iff"),
    ("<=>", "\\Leftrightarrow"),
    (";", ROW_BREAK),
];

/// Returns `true` for characters that start or continue an operator token.
pub fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '=' | '<' | '>' | '^' | ';' | '!' | '~')
}

/// Looks up the LaTeX rendering of an exact operator sequence.
pub fn lookup(candidate: &str) -> Option<&'static str> {
    OPERATORS
        .iter()
        .find(|(key, _)| *key == candidate)
        .map(|(_, latex)| *latex)
}

/// Resolves an accumulated operator sequence, falling back to the literal text.
pub fn render(candidate: &str) -> String {
    lookup(candidate).map_or_else(|| candidate.to_string(), str::to_string)
}
