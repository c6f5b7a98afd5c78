//! Quantified properties of `sanitize` over generated inputs.

use proptest::prelude::*;
use safeurl_core::{is_safe_url, sanitize, INNOCUOUS_URL};

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "ftp"];

/// Left-to-right reading of the scheme rule: allowlisted prefix, or the
/// first of `:/?#` is not a colon.
fn passes_scheme_rule(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    if ALLOWED_SCHEMES
        .iter()
        .any(|s| lower.starts_with(&format!("{s}:")))
    {
        return true;
    }
    lower.find([':', '/', '?', '#']).map_or(true, |i| &lower[i..i + 1] != ":")
}

/// Strategy: `word` with each ASCII letter randomly upper- or lowercased.
fn arb_case(word: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

/// Strategy: an allowlisted scheme in random case.
fn arb_allowed_scheme() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_case("http"),
        arb_case("https"),
        arb_case("mailto"),
        arb_case("ftp"),
    ]
}

/// Strategy: a syntactically valid scheme outside the allowlist (and not `data`).
fn arb_disallowed_scheme() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9+.-]{0,15}")
        .unwrap()
        .prop_filter("allowlisted or data scheme", |s| {
            !ALLOWED_SCHEMES.contains(&s.as_str()) && s != "data"
        })
}

/// Strategy: text containing none of `:/?#`.
fn arb_schemeless_prefix() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[^:/?#]{0,32}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    #[test]
    fn allowlisted_scheme_passes_through(
        scheme in arb_allowed_scheme(),
        tail in any::<String>()
    ) {
        let url = format!("{scheme}:{tail}");
        let sanitized = sanitize(&url);
        prop_assert_eq!(sanitized.as_str(), url.as_str());
    }

    #[test]
    fn delimiter_before_colon_passes_through(
        prefix in arb_schemeless_prefix(),
        delim in prop::sample::select(vec!['/', '?', '#']),
        tail in any::<String>()
    ) {
        let url = format!("{prefix}{delim}{tail}");
        let sanitized = sanitize(&url);
        prop_assert_eq!(sanitized.as_str(), url.as_str());
    }

    #[test]
    fn colonless_input_passes_through(url in "[^:]*") {
        let sanitized = sanitize(&url);
        prop_assert_eq!(sanitized.as_str(), url.as_str());
    }

    #[test]
    fn disallowed_scheme_is_replaced(
        scheme in arb_disallowed_scheme(),
        upper in any::<bool>(),
        tail in any::<String>()
    ) {
        let scheme = if upper { scheme.to_ascii_uppercase() } else { scheme };
        let url = format!("{scheme}:{tail}");
        let sanitized = sanitize(&url);
        prop_assert_eq!(sanitized.as_str(), INNOCUOUS_URL);
    }

    #[test]
    fn agrees_with_scheme_rule(url in any::<String>()) {
        let expected = passes_scheme_rule(&url);
        if expected {
            prop_assert!(is_safe_url(&url));
        } else if !url.to_ascii_lowercase().starts_with("data:") {
            prop_assert!(!is_safe_url(&url));
        }
    }

    #[test]
    fn sanitize_is_idempotent(url in any::<String>()) {
        let once = sanitize(&url);
        let twice = sanitize(once.as_str());
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn output_is_input_or_placeholder(url in any::<String>()) {
        let out = sanitize(&url);
        prop_assert!(out.as_str() == url || out.is_innocuous());
    }
}
