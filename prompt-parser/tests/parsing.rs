//! End-to-end parsing tests over whole prompts

use prompt_parser::prompt::ast::{FragmentError, NodeKind, PromptNode};
use prompt_parser::prompt::testing::{assert_kinds, assert_round_trip, Samples};
use prompt_parser::{generate, parse};
use rstest::rstest;

#[test]
fn kitchensink_nodes() {
    let nodes = Samples::parse("kitchensink");
    assert_eq!(
        nodes,
        vec![
            PromptNode::plain("masterpiece"),
            PromptNode::plain("1girl"),
            PromptNode::plain("blonde hair"),
            PromptNode::extra_networks("lora", "Zelda_v1:0.5"),
            PromptNode::weighted("chromatic aberration", 0.7),
            PromptNode::plain("sharp focus"),
            PromptNode::plain("hyper detailed"),
            PromptNode::weighted("fog", 0.7),
            PromptNode::extra_networks("hypernet", "sxz-bloom:0.5"),
            PromptNode::negative(1, "real photo"),
            PromptNode::scheduled_full("highlight", "dark", 0.9),
            PromptNode::positive(3, "good anatomy"),
        ]
    );
    assert_eq!(generate(&nodes), Samples::kitchensink());
}

#[test]
fn loras_nodes() {
    let nodes = Samples::parse("loras");
    assert_kinds(
        &nodes,
        &[
            NodeKind::ExtraNetworks,
            NodeKind::ExtraNetworks,
            NodeKind::Plain,
            NodeKind::Plain,
            NodeKind::Plain,
            NodeKind::ExtraNetworks,
            NodeKind::Plain,
            NodeKind::Plain,
            NodeKind::ExtraNetworks,
        ],
    );
    assert_eq!(nodes[1], PromptNode::extra_networks("lora", "LORA MODEL:0.2"));
    assert_eq!(nodes[8], PromptNode::extra_networks("lora", "film_grain_sd15:1"));
    assert_round_trip(&Samples::loras());
}

#[test]
fn schedules_nodes() {
    let nodes = Samples::parse("schedules");
    assert_eq!(
        nodes,
        vec![
            PromptNode::scheduled_full("mountain", "lake", 0.25),
            PromptNode::scheduled_full("", "snow", 0.5),
            PromptNode::scheduled_full("dusk", "", 0.8),
            PromptNode::alternate(["red", "green", "blue"]),
            PromptNode::negative(2, "blurry"),
            PromptNode::positive(2, "cinematic"),
            PromptNode::weighted("bokeh", 1.15),
        ]
    );
}

#[test]
fn end_to_end_mixed_prompt() {
    let source = "masterpiece, (fog:0.7), [real photo], <lora:a:1>";
    let nodes = parse(source).unwrap();
    assert_kinds(
        &nodes,
        &[
            NodeKind::Plain,
            NodeKind::Weighted,
            NodeKind::Negative,
            NodeKind::ExtraNetworks,
        ],
    );
    assert_eq!(nodes[2].depth(), Some(1));
    assert_eq!(generate(&nodes), source);
}

#[rstest]
#[case("(((x)))", PromptNode::positive(3, "x"))]
#[case("[[x]]", PromptNode::negative(2, "x"))]
#[case("(fog:0.7)", PromptNode::weighted("fog", 0.7))]
#[case("<lora:Zelda_v1:0.5>", PromptNode::extra_networks("lora", "Zelda_v1:0.5"))]
#[case("[highlight:dark:0.9]", PromptNode::scheduled_full("highlight", "dark", 0.9))]
#[case("[red|green|blue]", PromptNode::alternate(["red", "green", "blue"]))]
#[case("[dark:0.3]", PromptNode::scheduled_to("dark", 0.3))]
#[case("[:0.3]", PromptNode::scheduled_to("", 0.3))]
#[case("sharp focus", PromptNode::plain("sharp focus"))]
fn single_fragment(#[case] source: &str, #[case] expected: PromptNode) {
    assert_eq!(parse(source).unwrap(), vec![expected]);
}

#[rstest]
#[case("a", 1)]
#[case("a, b", 2)]
#[case("a,,b", 3)]
#[case("a, ", 2)]
#[case(",", 2)]
#[case("[red, green|blue]", 2)]
#[case("", 0)]
#[case("   ", 0)]
fn one_node_per_fragment(#[case] source: &str, #[case] count: usize) {
    assert_eq!(parse(source).unwrap().len(), count);
}

#[test]
fn empty_fragments_are_empty_plain_nodes() {
    assert_eq!(
        parse("a,,b").unwrap(),
        vec![
            PromptNode::plain("a"),
            PromptNode::plain(""),
            PromptNode::plain("b"),
        ]
    );
}

#[test]
fn comma_inside_brackets_splits_the_prompt() {
    assert_eq!(
        parse("[red, green|blue]").unwrap(),
        vec![PromptNode::plain("[red"), PromptNode::plain("green|blue]")]
    );
}

#[rstest]
#[case("[(a)|[b]]", PromptNode::alternate(["(a)", "[b]"]))]
#[case("[(a):1]", PromptNode::scheduled_to("(a)", 1.0))]
#[case("((x) )", PromptNode::positive(1, "(x) "))]
#[case("<lora:(a:1)>", PromptNode::extra_networks("lora", "(a:1)"))]
#[case("[[a|b]]", PromptNode::alternate(["[a", "b]"]))]
fn bracket_content_is_not_decomposed(#[case] source: &str, #[case] expected: PromptNode) {
    assert_eq!(parse(source).unwrap(), vec![expected]);
}

#[test]
fn nested_weight_inside_emphasis_is_not_reparsed() {
    let error = parse("((a:0.5))").unwrap_err();
    assert_eq!(
        error.source,
        FragmentError::InvalidWeight {
            text: "0.5)".to_string()
        }
    );
}

#[rstest]
#[case("<badformat>", NodeKind::ExtraNetworks)]
#[case("[a:b:c:1]", NodeKind::ScheduledTo)]
fn invalid_format(#[case] source: &str, #[case] kind: NodeKind) {
    let error = parse(source).unwrap_err();
    assert_eq!(
        error.source,
        FragmentError::InvalidFormat {
            kind,
            fragment: source.to_string()
        }
    );
}

#[rstest]
#[case("[a:b:later]", NodeKind::ScheduledFull, "later")]
#[case("[a:soon]", NodeKind::ScheduledTo, "soon")]
#[case("[a::b:1]", NodeKind::ScheduledFrom, "b:1")]
#[case("[a:b: 0.5]", NodeKind::ScheduledFull, " 0.5")]
fn invalid_number(#[case] source: &str, #[case] kind: NodeKind, #[case] text: &str) {
    let error = parse(source).unwrap_err();
    assert_eq!(
        error.source,
        FragmentError::InvalidNumber {
            kind,
            text: text.to_string()
        }
    );
}

#[test]
fn error_points_at_fragment() {
    let error = parse("masterpiece, 1girl, <lora>, (fog:0.7)").unwrap_err();
    assert_eq!(error.index, 2);
    assert_eq!(error.fragment, "<lora>");
    assert!(error.to_string().contains("<lora>"));
}

#[test]
fn exponent_weights_render_as_decimals() {
    let nodes = parse("(fog:7e-1), [a:b:1.50]").unwrap();
    assert_eq!(generate(&nodes), "(fog:0.7), [a:b:1.5]");
}
