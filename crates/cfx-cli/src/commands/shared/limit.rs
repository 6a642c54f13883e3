/// Compute effective limit with precedence: local arg -> startup flag -> config.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> usize {
    let limit = local.or(global).unwrap_or(fallback);
    usize::try_from(limit).unwrap_or(usize::MAX)
}
