//! Property-based tests for parse / generate round-tripping
//!
//! Any prompt produced by the generator is a fixed point:
//! - generate(parse(generate(nodes))) == generate(nodes)
//! - parsing it yields exactly one node per generated fragment

use prompt_parser::prompt::ast::PromptNode;
use prompt_parser::{generate, parse};
use proptest::prelude::*;

/// Phrase text free of the notation's delimiters
fn phrase_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_]{0,10}",
        "[a-z][a-z ]{0,15}[a-z]",
        "[A-Za-z][A-Za-z0-9 _-]{0,12}[A-Za-z0-9]",
    ]
}

fn number_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        (0u32..=200).prop_map(|n| f64::from(n) / 100.0),
        -10.0f64..10.0,
    ]
}

fn node_strategy() -> impl Strategy<Value = PromptNode> {
    prop_oneof![
        phrase_strategy().prop_map(PromptNode::plain),
        ("[a-z]{1,8}", phrase_strategy(), number_strategy()).prop_map(|(kind, name, w)| {
            PromptNode::extra_networks(kind, format!("{name}:{w}"))
        }),
        (1usize..5, phrase_strategy()).prop_map(|(d, p)| PromptNode::positive(d, p)),
        (1usize..5, phrase_strategy()).prop_map(|(d, p)| PromptNode::negative(d, p)),
        (phrase_strategy(), number_strategy()).prop_map(|(p, w)| PromptNode::weighted(p, w)),
        prop::collection::vec(phrase_strategy(), 1..5).prop_map(PromptNode::alternate),
        (phrase_strategy(), phrase_strategy(), number_strategy())
            .prop_map(|(from, to, at)| PromptNode::scheduled_full(from, to, at)),
        (phrase_strategy(), number_strategy())
            .prop_map(|(from, at)| PromptNode::scheduled_from(from, at)),
        (phrase_strategy(), number_strategy()).prop_map(|(to, at)| PromptNode::scheduled_to(to, at)),
    ]
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_generated_prompts_are_fixed_points(
            nodes in prop::collection::vec(node_strategy(), 0..8)
        ) {
            let source = generate(&nodes);
            let parsed = parse(&source);
            prop_assert!(parsed.is_ok(), "Failed to parse: {}", source);
            prop_assert_eq!(generate(&parsed.unwrap()), source);
        }

        #[test]
        fn test_generated_prompts_keep_fragment_count(
            nodes in prop::collection::vec(node_strategy(), 1..8)
        ) {
            let source = generate(&nodes);
            let parsed = parse(&source).unwrap();
            prop_assert_eq!(parsed.len(), nodes.len());
        }

        #[test]
        fn test_weights_survive_round_trip(phrase in phrase_strategy(), weight in number_strategy()) {
            let node = PromptNode::weighted(phrase, weight);
            let parsed = parse(&generate(std::slice::from_ref(&node))).unwrap();
            prop_assert_eq!(parsed, vec![node]);
        }

        #[test]
        fn test_emphasis_depth_survives_round_trip(depth in 1usize..8, phrase in phrase_strategy()) {
            let positive = PromptNode::positive(depth, phrase.clone());
            let negative = PromptNode::negative(depth, phrase);
            let parsed = parse(&generate(&[positive.clone(), negative.clone()])).unwrap();
            prop_assert_eq!(parsed, vec![positive, negative]);
        }
    }
}
