/// Compute effective limit with precedence: global flag -> configured default.
///
/// Zero means "no limit" and yields `None`.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> Option<usize> {
    match global.unwrap_or(fallback) {
        0 => None,
        limit => Some(usize::try_from(limit).unwrap_or(usize::MAX)),
    }
}
