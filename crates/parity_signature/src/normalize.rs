/// Collapses every run of Unicode whitespace (including newlines) to a single
/// ASCII space and trims the edges.
///
/// This is the one normalization rule shared by page-level text signatures and
/// block-level diffing, so layout-only differences are invisible to both.
/// Empty or whitespace-only input normalizes to the empty string.
pub fn collapse_whitespace(s: &str) -> String {
    let mut normalized = String::with_capacity(s.len());
    for segment in s.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
