use crate::token::ROW_BREAK;

/// Normalizes the root buffer into the final LaTeX text.
///
/// Space runs collapse to one space, a dangling row break is dropped, and the
/// result is trimmed. A row break still counts as dangling when only
/// whitespace follows its newline.
pub fn normalize(compiled: &str) -> String {
    let collapsed = collapse_spaces(compiled);
    let body = collapsed.trim_end();
    let marker = ROW_BREAK.trim_end_matches('\n');
    let body = match body.strip_suffix(marker) {
        Some(rest) if collapsed[body.len()..].starts_with('\n') => rest,
        _ => body,
    };
    body.trim().to_string()
}

/// Replaces every run of consecutive spaces with a single space.
pub fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_space = false;
    for c in text.chars() {
        if c == ' ' {
            if after_space {
                continue;
            }
            after_space = true;
        } else {
            after_space = false;
        }
        out.push(c);
    }
    out
}
