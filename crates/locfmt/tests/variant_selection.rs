//! Integration tests for variant selection.

use std::sync::Arc;

use locfmt::{
    Expression, FormatError, Formatter, FunctionRegistry, MemoryTermStore, Message, Selector,
    Variant, VariantKey, bindings,
};

fn formatter() -> Formatter {
    Formatter::builder()
        .registry(FunctionRegistry::new())
        .terms(Arc::new(MemoryTermStore::new()))
        .build()
}

fn text_variant(keys: Vec<VariantKey>, text: &str) -> Variant {
    Variant::builder()
        .keys(keys)
        .parts(vec![Expression::literal(text)])
        .build()
}

// =============================================================================
// Wildcards and Defaults
// =============================================================================

#[test]
fn single_wildcard_variant_is_always_selected() {
    let message = Message::builder()
        .id("only")
        .selectors(vec![Selector::defaulted("default")])
        .variants(vec![text_variant(vec![VariantKey::Any], "always me")])
        .build();
    let formatter = formatter();

    for (locale, args) in [
        ("en", bindings! {}),
        ("pl", bindings! { "x" => 1 }),
        ("xx", bindings! { "a" => true, "b" => "c" }),
    ] {
        assert_eq!(formatter.format(locale, &message, &args).unwrap(), "always me");
    }
}

#[test]
fn fallback_key_is_used_when_selector_is_absent() {
    let message = Message::builder()
        .id("greeting")
        .selectors(vec![Selector::defaulted("formal")])
        .variants(vec![
            text_variant(vec![VariantKey::literal("casual")], "hey"),
            text_variant(vec![VariantKey::literal("formal")], "good day"),
        ])
        .build();
    assert_eq!(
        formatter().format("en", &message, &bindings! {}).unwrap(),
        "good day"
    );
}

// =============================================================================
// First-Match Scan
// =============================================================================

#[test]
fn first_match_wins_among_identical_keys() {
    let message = Message::builder()
        .id("dup")
        .selectors(vec![Selector::defaulted("default")])
        .variants(vec![
            text_variant(vec![VariantKey::literal("default")], "first"),
            text_variant(vec![VariantKey::literal("default")], "second"),
        ])
        .build();
    assert_eq!(
        formatter().format("en", &message, &bindings! {}).unwrap(),
        "first"
    );
}

#[test]
fn earlier_literal_beats_later_wildcard_and_vice_versa() {
    let literal_first = Message::builder()
        .id("literal_first")
        .selectors(vec![Selector::defaulted("one")])
        .variants(vec![
            text_variant(vec![VariantKey::literal("one")], "literal"),
            text_variant(vec![VariantKey::Any], "wildcard"),
        ])
        .build();
    assert_eq!(
        formatter().format("en", &literal_first, &bindings! {}).unwrap(),
        "literal"
    );

    // Declaration order is the only tie-break: a wildcard declared first
    // shadows a later, more specific key.
    let wildcard_first = Message::builder()
        .id("wildcard_first")
        .selectors(vec![Selector::defaulted("one")])
        .variants(vec![
            text_variant(vec![VariantKey::Any], "wildcard"),
            text_variant(vec![VariantKey::literal("one")], "literal"),
        ])
        .build();
    assert_eq!(
        formatter().format("en", &wildcard_first, &bindings! {}).unwrap(),
        "wildcard"
    );
}

#[test]
fn selector_expression_drives_selection() {
    let message = Message::builder()
        .id("mood")
        .selectors(vec![Selector::new(Expression::variable("mood"), "other")])
        .variants(vec![
            text_variant(vec![VariantKey::literal("happy")], ":)"),
            text_variant(vec![VariantKey::literal("sad")], ":("),
            text_variant(vec![VariantKey::Any], ":|"),
        ])
        .build();
    let formatter = formatter();

    assert_eq!(
        formatter.format("en", &message, &bindings! { "mood" => "happy" }).unwrap(),
        ":)"
    );
    assert_eq!(
        formatter.format("en", &message, &bindings! { "mood" => "sad" }).unwrap(),
        ":("
    );
    assert_eq!(
        formatter.format("en", &message, &bindings! { "mood" => "confused" }).unwrap(),
        ":|"
    );
}

#[test]
fn resolved_selector_values_are_stringified() {
    let message = Message::builder()
        .id("flag")
        .selectors(vec![Selector::new(Expression::variable("flag"), "other")])
        .variants(vec![
            text_variant(vec![VariantKey::literal("true")], "on"),
            text_variant(vec![VariantKey::literal("false")], "off"),
        ])
        .build();
    let formatter = formatter();

    assert_eq!(
        formatter.format("en", &message, &bindings! { "flag" => true }).unwrap(),
        "on"
    );
    assert_eq!(
        formatter.format("en", &message, &bindings! { "flag" => false }).unwrap(),
        "off"
    );
}

#[test]
fn multiple_selectors_must_all_match() {
    let message = Message::builder()
        .id("pair")
        .selectors(vec![
            Selector::new(Expression::variable("count"), "other"),
            Selector::new(Expression::variable("gender"), "masc"),
        ])
        .variants(vec![
            text_variant(
                vec![VariantKey::literal("one"), VariantKey::literal("fem")],
                "one fem",
            ),
            text_variant(
                vec![VariantKey::literal("one"), VariantKey::Any],
                "one any",
            ),
            text_variant(vec![VariantKey::Any, VariantKey::Any], "fallback"),
        ])
        .build();
    let formatter = formatter();

    assert_eq!(
        formatter
            .format("en", &message, &bindings! { "count" => "one", "gender" => "fem" })
            .unwrap(),
        "one fem"
    );
    assert_eq!(
        formatter
            .format("en", &message, &bindings! { "count" => "one", "gender" => "masc" })
            .unwrap(),
        "one any"
    );
    assert_eq!(
        formatter
            .format("en", &message, &bindings! { "count" => "many", "gender" => "fem" })
            .unwrap(),
        "fallback"
    );
}

#[test]
fn key_arity_mismatch_never_matches() {
    // The first variant carries one key against two selector positions; even
    // a wildcard cannot make up for the missing position.
    let message = Message::builder()
        .id("arity")
        .selectors(vec![
            Selector::defaulted("a"),
            Selector::defaulted("b"),
        ])
        .variants(vec![
            text_variant(vec![VariantKey::Any], "short"),
            text_variant(vec![VariantKey::Any, VariantKey::Any], "full"),
        ])
        .build();
    assert_eq!(
        formatter().format("en", &message, &bindings! {}).unwrap(),
        "full"
    );
}

// =============================================================================
// Failure
// =============================================================================

#[test]
fn no_matching_variant_is_fatal() {
    let message = Message::builder()
        .id("nomatch")
        .selectors(vec![Selector::defaulted("default")])
        .variants(vec![text_variant(vec![VariantKey::literal("other")], "x")])
        .build();
    let err = formatter()
        .format("en", &message, &bindings! {})
        .unwrap_err();
    assert!(
        matches!(err, FormatError::NoMatchingVariant { ref message, .. } if message == "nomatch"),
        "expected NoMatchingVariant, got: {err:?}"
    );
    assert!(err.to_string().contains("default"));
}

#[test]
fn selector_resolution_error_aborts_selection() {
    let message = Message::builder()
        .id("sel_err")
        .selectors(vec![Selector::new(Expression::variable("missing"), "other")])
        .variants(vec![text_variant(vec![VariantKey::Any], "never")])
        .build();
    let err = formatter()
        .format("en", &message, &bindings! {})
        .unwrap_err();
    assert!(
        matches!(err, FormatError::UnboundVariable { .. }),
        "expected UnboundVariable, got: {err:?}"
    );
}

// =============================================================================
// Literal Bodies
// =============================================================================

#[test]
fn literal_only_body_is_exact_concatenation() {
    let message = Message::builder()
        .id("literal")
        .selectors(vec![Selector::defaulted("default")])
        .variants(vec![Variant::builder()
            .keys(vec![VariantKey::Any])
            .parts(vec![
                Expression::literal("The "),
                Expression::literal("quick "),
                Expression::literal("fox."),
            ])
            .build()])
        .build();
    let formatter = formatter();

    for locale in ["en", "pl", "zz"] {
        assert_eq!(
            formatter
                .format(locale, &message, &bindings! { "ignored" => 1 })
                .unwrap(),
            "The quick fox."
        );
    }
}
