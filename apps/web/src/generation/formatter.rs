//! Formatter — turns the raw model response into clean bullet lines.
//!
//! The model is instructed to return a plain newline-separated list, but in
//! practice lines arrive decorated with `- `, `* `, or `1. ` markers. The
//! cleanup here mirrors what users would otherwise delete by hand.

/// Splits a raw response blob into cleaned, non-empty bullet lines.
///
/// The whole blob is trimmed first, then split on newlines; each line runs
/// through `clean_line` and empties are dropped. Output order follows the
/// raw text.
pub fn extract_bullets(raw: &str) -> Vec<String> {
    raw.trim()
        .split('\n')
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Strips list-marker noise from one line.
///
/// Exactly two passes, in this order: a leading run of `-`/`*`, then — only
/// if the line now starts with a digit — a leading run of digits, `.`, and
/// spaces. The passes are not iterated, so a doubly-prefixed line such as
/// `"1. - Did X"` keeps its residual `- ` marker.
fn clean_line(line: &str) -> String {
    let line = line.trim();
    let line = line.trim_start_matches(['-', '*']).trim();

    let line = if line.starts_with(|c: char| c.is_ascii_digit()) {
        line.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c == ' ')
    } else {
        line
    };

    line.trim().to_string()
}
