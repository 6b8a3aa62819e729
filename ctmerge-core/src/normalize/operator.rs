/// Long-form operator names mapped to the short form used inside log descriptions.
pub const OPERATOR_ALIASES: &[(&str, &str)] = &[("Up In The Air Consulting", "Up In The Air")];

/// Map a known long-form operator name to its short form; pass others through.
#[must_use]
pub fn normalize_operator_name(name: &str) -> &str {
    OPERATOR_ALIASES
        .iter()
        .find(|&&(long, _)| long == name)
        .map_or(name, |&(_, short)| short)
}
