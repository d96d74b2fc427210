/// Splits raw text into the ordered sequence of comparable lines.
///
/// Lines are trimmed and lines that are empty after trimming are dropped, so
/// authors adding blank separators between guideline steps do not shift the
/// positional diff. Whitespace-only input yields an empty sequence.
pub fn tokenize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}
