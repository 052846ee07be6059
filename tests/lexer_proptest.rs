//! Property-based tests for the Jam lexer
//!
//! These tests ensure that the lexer terminates on any input, never drops or invents text,
//! and that balanced constructs leave the mode stack where they found it.

use jam_lex::jam::formats::detokenize;
use jam_lex::jam::formats::detokenizer::covers_source;
use jam_lex::jam::lexing::tokenize;
use proptest::prelude::*;

/// Fragments that exercise every mode, glued together in random order.
fn jam_fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("rule ".to_string()),
        Just("actions ".to_string()),
        Just("quietly ".to_string()),
        Just("bind ".to_string()),
        Just("module m { ".to_string()),
        Just("class c : d ".to_string()),
        Just("local x ".to_string()),
        Just("for v in ".to_string()),
        Just("( ".to_string()),
        Just(") ".to_string()),
        Just("{ ".to_string()),
        Just("} ".to_string()),
        Just("$(".to_string()),
        Just(")".to_string()),
        Just("<".to_string()),
        Just(">".to_string()),
        Just("\\$".to_string()),
        Just("#| c |#".to_string()),
        Just("# c\n".to_string()),
        Just(" ".to_string()),
        Just("\n".to_string()),
        "[a-zA-Z0-9_.:=;+*?-]{1,6}",
    ]
}

fn jam_source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(jam_fragment_strategy(), 0..40).prop_map(|parts| parts.concat())
}

/// A balanced value: grist and expansions nested to a small depth, no whitespace.
fn balanced_value_strategy() -> impl Strategy<Value = String> {
    let leaf = "[a-z0-9]{1,3}";
    leaf.prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(|v| format!("$({})", v)),
            inner.clone().prop_map(|v| format!("<{}>", v)),
            (inner.clone(), inner).prop_map(|(a, b)| format!("{}{}", a, b)),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn arbitrary_text_is_lossless(s in ".*") {
        let tokens: Vec<_> = tokenize(&s).collect();
        prop_assert_eq!(detokenize(&tokens), s.clone());
        prop_assert!(covers_source(&tokens, &s));
        prop_assert!(tokens.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn token_count_is_bounded(s in ".*") {
        // every token covers at least one byte
        let count = tokenize(&s).count();
        prop_assert!(count <= s.len());
    }

    #[test]
    fn jam_like_text_is_lossless(s in jam_source_strategy()) {
        let tokens: Vec<_> = tokenize(&s).collect();
        prop_assert!(covers_source(&tokens, &s), "input={:?}", s);
    }

    #[test]
    fn balanced_values_return_to_root(v in balanced_value_strategy()) {
        // the leading letter keeps concatenated leaves from spelling `rule ` or `actions `
        let source = format!("v{} ", v);
        let mut lexer = tokenize(&source);
        lexer.by_ref().for_each(drop);
        prop_assert_eq!(lexer.depth(), 1, "input={:?}", source);
    }

    #[test]
    fn balanced_action_bodies_return_to_root(depth in 0usize..6, text in "[a-z $]{0,8}") {
        let body = format!("{}{}{}", "{ ".repeat(depth), text, " }".repeat(depth));
        let source = format!("actions a {{ {} }}\n", body);
        let mut lexer = tokenize(&source);
        lexer.by_ref().for_each(drop);
        prop_assert_eq!(lexer.depth(), 1, "input={:?}", source);
    }
}
