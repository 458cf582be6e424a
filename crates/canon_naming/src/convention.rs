//! Canonicalization of identifiers under a naming convention.

use std::fmt;

/// A naming convention prescribed for a declaration kind/visibility pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NamingConvention {
    /// Private fields: a single leading underscore, then camelCase
    /// (`_total`, `_openOrders`).
    LeadingUnderscoreCamelCase,
    /// Non-private members: PascalCase (`Total`, `OpenOrders`).
    PascalCase,
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingConvention::LeadingUnderscoreCamelCase => {
                write!(f, "leading-underscore camelCase")
            }
            NamingConvention::PascalCase => write!(f, "PascalCase"),
        }
    }
}

/// Returns the canonical spelling of `name` under `convention`.
///
/// Total and idempotent: every input (including the empty string and
/// single characters) maps to a defined output, and canonicalizing a
/// canonical name returns it unchanged.
///
/// `LeadingUnderscoreCamelCase` drops a legacy `m_` prefix, otherwise one
/// leading underscore, lower-cases the first remaining character, and
/// prepends a single underscore. `PascalCase` drops leading underscores
/// and upper-cases the first remaining character. Case mapping is full
/// Unicode, not ASCII-only.
pub fn canonicalize(name: &str, convention: NamingConvention) -> String {
    if name.is_empty() {
        return String::new();
    }
    match convention {
        NamingConvention::LeadingUnderscoreCamelCase => {
            let rest = if let Some(stripped) = name.strip_prefix("m_") {
                stripped
            } else {
                name.strip_prefix('_').unwrap_or(name)
            };
            let mut out = String::with_capacity(rest.len() + 1);
            out.push('_');
            push_with_first_case(&mut out, rest, char::to_lowercase);
            out
        }
        NamingConvention::PascalCase => {
            let rest = name.trim_start_matches('_');
            let mut out = String::with_capacity(rest.len());
            push_with_first_case(&mut out, rest, char::to_uppercase);
            out
        }
    }
}

/// Appends `rest` to `out` with its first character mapped through `case`.
fn push_with_first_case<I>(out: &mut String, rest: &str, case: fn(char) -> I)
where
    I: Iterator<Item = char>,
{
    let mut chars = rest.chars();
    if let Some(first) = chars.next() {
        out.extend(case(first));
        out.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use NamingConvention::{LeadingUnderscoreCamelCase, PascalCase};

    #[test]
    fn private_field_round_trips() {
        assert_eq!(canonicalize("m_Foo", LeadingUnderscoreCamelCase), "_foo");
        assert_eq!(canonicalize("Foo", LeadingUnderscoreCamelCase), "_foo");
        assert_eq!(canonicalize("_Foo", LeadingUnderscoreCamelCase), "_foo");
        assert_eq!(canonicalize("_foo", LeadingUnderscoreCamelCase), "_foo");
    }

    #[test]
    fn pascal_round_trips() {
        assert_eq!(canonicalize("_foo", PascalCase), "Foo");
        assert_eq!(canonicalize("foo", PascalCase), "Foo");
        assert_eq!(canonicalize("_Total", PascalCase), "Total");
        assert_eq!(canonicalize("Total", PascalCase), "Total");
    }

    #[test]
    fn degenerate_lengths() {
        assert_eq!(canonicalize("", LeadingUnderscoreCamelCase), "");
        assert_eq!(canonicalize("", PascalCase), "");
        assert_eq!(canonicalize("A", LeadingUnderscoreCamelCase), "_a");
        assert_eq!(canonicalize("a", PascalCase), "A");
        assert_eq!(canonicalize("_", LeadingUnderscoreCamelCase), "_");
        assert_eq!(canonicalize("_", PascalCase), "");
        assert_eq!(canonicalize("m_", LeadingUnderscoreCamelCase), "_");
    }

    #[test]
    fn legacy_prefix_only_stripped_for_private_convention() {
        assert_eq!(canonicalize("m_total", LeadingUnderscoreCamelCase), "_total");
        // Under PascalCase, `m_` is just part of the name
        assert_eq!(canonicalize("m_total", PascalCase), "M_total");
    }

    #[test]
    fn idempotent_for_all_conventions() {
        let inputs = [
            "", "_", "__", "a", "A", "_a", "_A", "m_", "m_x", "m_Foo", "foo", "Foo", "_foo",
            "_Foo", "__foo", "m_m_x", "_m_x", "snake_case_name", "ALLCAPS", "x1", "_1x",
        ];
        for convention in [LeadingUnderscoreCamelCase, PascalCase] {
            for input in inputs {
                let once = canonicalize(input, convention);
                let twice = canonicalize(&once, convention);
                assert_eq!(once, twice, "{convention:?} not idempotent on {input:?}");
            }
        }
    }

    #[test]
    fn unicode_first_character() {
        assert_eq!(canonicalize("Ärger", LeadingUnderscoreCamelCase), "_ärger");
        assert_eq!(canonicalize("ärger", PascalCase), "Ärger");
    }

    #[test]
    fn multiple_leading_underscores_under_pascal() {
        // Idempotence requires dropping them all, not one at a time
        assert_eq!(canonicalize("__foo", PascalCase), "Foo");
        assert_eq!(canonicalize("___", PascalCase), "");
    }

    #[test]
    fn double_underscore_stable_under_private_convention() {
        assert_eq!(canonicalize("__foo", LeadingUnderscoreCamelCase), "__foo");
    }

    #[test]
    fn display_names() {
        assert_eq!(
            format!("{LeadingUnderscoreCamelCase}"),
            "leading-underscore camelCase"
        );
        assert_eq!(format!("{PascalCase}"), "PascalCase");
    }
}
