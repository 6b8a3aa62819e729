use std::sync::LazyLock;

use regex::Regex;

/// Prefixes stripped before the operator's own name, in order.
///
/// These are spellings that appear inside descriptions but differ from the
/// operator name the feeds publish (e.g. DigiCert runs the old Symantec logs,
/// "Up In The Air Consulting" titles its logs "Up In The Air").
pub const OPERATOR_PREFIX_VARIANTS: &[&str] = &["Symantec", "Up In The Air", "Trust Asia", "Nordu"];

/// Suffixes stripped after the prefixes, in order.
pub const DESCRIPTION_SUFFIXES: &[&str] = &["CT Log", "CT log", "Log", "log"];

/// Prefixes stripped once more after the quotes are removed, in order.
pub const TRAILING_PREFIXES: &[&str] = &["Log", "log", "CT Log"];

const QUOTE: &str = "'";

static HALF_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(20[0-9][0-9])H([12])").expect("half-year pattern is valid"));
static REVISION_A: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(20[0-9][0-9])A").expect("revision pattern is valid"));
static REVISION_B: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(20[0-9][0-9])B").expect("revision pattern is valid"));
static SPACED_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" (20[0-9][0-9])").expect("year pattern is valid"));

const SECOND_LOG_PATTERN: &str = "' log #2";
const SECOND_LOG_REPLACEMENT: &str = "-2";

/// Reduce a log description to a short token that compares equal across feeds.
///
/// Steps, in order:
/// 1. `2022H1` becomes `2022h1`; a year followed by `A`/`B` gets the letter lowercased.
/// 2. `' log #2` becomes `-2`.
/// 3. A space before a `20xx` year is removed (`Argon 2024` → `Argon2024`).
/// 4. Known operator spellings, then `operator`, are stripped from the front.
/// 5. [`DESCRIPTION_SUFFIXES`] are stripped from the end.
/// 6. A leading and a trailing `'` are stripped.
/// 7. [`TRAILING_PREFIXES`] are stripped from the front.
///
/// Whitespace is trimmed after every strip. When the result would be empty
/// (descriptions like `"StartCom log"`), the original text is returned.
#[must_use]
pub fn normalize_description(operator: Option<&str>, description: &str) -> String {
    let canonical = HALF_YEAR.replace(description, "${1}h${2}");
    let canonical = REVISION_A.replace(&canonical, "${1}a");
    let canonical = REVISION_B.replace(&canonical, "${1}b");
    let canonical = canonical.replacen(SECOND_LOG_PATTERN, SECOND_LOG_REPLACEMENT, 1);
    let canonical = SPACED_YEAR.replace_all(&canonical, "${1}");

    let mut s: &str = &canonical;
    for prefix in OPERATOR_PREFIX_VARIANTS {
        s = drop_prefix(prefix, s);
    }
    if let Some(operator) = operator {
        s = drop_prefix(operator, s);
    }
    for suffix in DESCRIPTION_SUFFIXES {
        s = drop_suffix(suffix, s);
    }
    s = drop_prefix(QUOTE, s);
    s = drop_suffix(QUOTE, s);
    for prefix in TRAILING_PREFIXES {
        s = drop_prefix(prefix, s);
    }

    if s.is_empty() {
        return description.to_string();
    }
    s.to_string()
}

fn drop_prefix<'a>(prefix: &str, s: &'a str) -> &'a str {
    s.strip_prefix(prefix).unwrap_or(s).trim()
}

fn drop_suffix<'a>(suffix: &str, s: &'a str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_are_trimmed_even_without_a_match() {
        assert_eq!(drop_prefix("Nordu", "  x  "), "x");
        assert_eq!(drop_suffix("log", " x log "), "x log");
        assert_eq!(drop_suffix("log", "x log"), "x");
    }
}
