/// Normalize a user-supplied platform handle: trim surrounding whitespace
/// and strip at most one leading '@'. Platform handles can legally contain
/// '@' elsewhere, so nothing fuller is attempted.
pub fn normalize_handle(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('@').unwrap_or(trimmed);
    stripped.trim_start().to_string()
}
