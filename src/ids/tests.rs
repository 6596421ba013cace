use proptest::prelude::*;

use super::*;
use crate::error::ParseError;

const LR: BinaryOperator = BinaryOperator::LeftToRight;
const AB: BinaryOperator = BinaryOperator::AboveToBelow;
const LMR: TernaryOperator = TernaryOperator::LeftToMiddleAndRight;

fn leaf(ch: char) -> Ids {
    Ids::Leaf(ch)
}

// --- Parser ---

#[test]
fn test_parse_simple_binary() {
    let ids = parse("⿰AB").unwrap();
    assert_eq!(ids, Ids::binary(LR, leaf('A'), leaf('B')));
    assert_eq!(ids.operator().map(Operator::symbol), Some('⿰'));
    assert_eq!(ids.operands().len(), 2);
}

#[test]
fn test_parse_nested() {
    let ids = parse("⿱A⿵BC").unwrap();
    let expected = Ids::binary(
        AB,
        leaf('A'),
        Ids::binary(BinaryOperator::SurroundFromAbove, leaf('B'), leaf('C')),
    );
    assert_eq!(ids, expected);
}

#[test]
fn test_parse_ternary() {
    let ids = parse("⿲ABC").unwrap();
    assert_eq!(ids, Ids::ternary(LMR, leaf('A'), leaf('B'), leaf('C')));
    assert_eq!(ids.operands().len(), 3);
}

#[test]
fn test_parse_single_leaf() {
    assert_eq!(parse("A").unwrap(), leaf('A'));
    assert_eq!(parse("\u{18801}").unwrap(), leaf('\u{18801}'));
}

#[test]
fn test_parse_tangut_leaves() {
    let ids = parse("⿰\u{18820}\u{18864}").unwrap();
    assert_eq!(ids.leaves().collect::<Vec<_>>(), vec!['\u{18820}', '\u{18864}']);
}

#[test]
fn test_parse_incomplete_binary() {
    let err = parse("⿰A").unwrap_err();
    assert_eq!(
        err,
        ParseError::Incomplete {
            operator: Operator::Binary(LR),
            offset: 0,
        }
    );
}

#[test]
fn test_parse_incomplete_reports_innermost_operator() {
    let err = parse("⿱A⿰B").unwrap_err();
    assert_eq!(
        err,
        ParseError::Incomplete {
            operator: Operator::Binary(LR),
            offset: 2,
        }
    );
}

#[test]
fn test_parse_lone_operator_is_incomplete() {
    assert!(matches!(parse("⿳"), Err(ParseError::Incomplete { offset: 0, .. })));
}

#[test]
fn test_parse_ternary_missing_third_operand() {
    let err = parse("⿲AB").unwrap_err();
    assert_eq!(
        err,
        ParseError::Incomplete {
            operator: Operator::Ternary(LMR),
            offset: 0,
        }
    );
}

#[test]
fn test_parse_trailing_data() {
    let err = parse("⿰ABA").unwrap_err();
    assert_eq!(
        err,
        ParseError::TrailingData {
            offset: 3,
            rest: "A".to_string(),
        }
    );
    assert!(err.to_string().contains("did not consume entire IDS string"));
}

#[test]
fn test_parse_two_leaves_is_trailing_data() {
    assert!(matches!(parse("AB"), Err(ParseError::TrailingData { offset: 1, .. })));
}

#[test]
fn test_parse_empty() {
    assert_eq!(parse(""), Err(ParseError::Empty));
}

#[test]
fn test_parse_nesting_limit() {
    let deep = format!("{}{}", "⿰".repeat(300), "A".repeat(301));
    assert!(matches!(parse(&deep), Err(ParseError::TooDeep { max: 256 })));

    let ok = format!("{}{}", "⿰".repeat(200), "A".repeat(201));
    assert!(parse(&ok).is_ok());
}

#[test]
fn test_from_str() {
    let ids: Ids = "⿰AB".parse().unwrap();
    assert_eq!(ids.to_string(), "⿰AB");
}

#[test]
fn test_error_byte_range_points_at_trailing_text() {
    let text = "⿰AB\u{18801}";
    let err = parse(text).unwrap_err();
    let range = err.byte_range(text);
    assert_eq!(&text[range], "\u{18801}");
    assert_eq!(err.offset(), Some(3));
}

// --- Printer ---

#[test]
fn test_print_simple() {
    assert_eq!(Ids::binary(LR, leaf('A'), leaf('B')).to_string(), "⿰AB");
}

#[test]
fn test_print_nested() {
    let ids = Ids::binary(
        AB,
        leaf('\u{18800}'),
        Ids::binary(BinaryOperator::SurroundFromAbove, leaf('\u{18812}'), leaf('\u{1886F}')),
    );
    assert_eq!(ids.to_ids_string(), "⿱\u{18800}⿵\u{18812}\u{1886F}");
}

#[test]
fn test_round_trip_examples() {
    for text in [
        "A",
        "⿰AB",
        "⿱\u{18800}⿵\u{18812}\u{1886F}",
        "⿳A⿰BC⿻DE",
        "⿴⿲ABCD",
        "⿸⿹⿺ABCD",
    ] {
        assert_eq!(parse(text).unwrap().to_string(), text);
    }
}

// --- Construction ---

#[test]
fn test_from_operands_accepts_matching_arity() {
    let ids = Ids::from_operands(Operator::Ternary(LMR), vec![leaf('A'), leaf('B'), leaf('C')]);
    assert_eq!(ids.unwrap().to_string(), "⿲ABC");
}

#[test]
fn test_from_operands_rejects_wrong_arity() {
    let err = Ids::from_operands(Operator::Binary(LR), vec![leaf('A'), leaf('B'), leaf('C')])
        .unwrap_err();
    assert_eq!(err.expected, 2);
    assert_eq!(err.found, 3);
    assert_eq!(err.to_string(), "operator ⿰ takes 2 operands, got 3");

    let err = Ids::from_operands(Operator::Ternary(LMR), vec![leaf('A')]).unwrap_err();
    assert_eq!((err.expected, err.found), (3, 1));
}

#[test]
fn test_leaf_accessors() {
    let ids = leaf('A');
    assert!(ids.is_leaf());
    assert_eq!(ids.as_leaf(), Some('A'));
    assert_eq!(ids.operator(), None);
    assert!(ids.operands().is_empty());
    assert_eq!(ids.depth(), 0);
    assert_eq!(parse("⿰A⿱BC").unwrap().depth(), 2);
    assert_eq!(parse("⿲ABC").unwrap().depth(), 1);
}

// --- Equality ---

#[test]
fn test_equal_identical_nested() {
    let a = parse("⿱A⿵BC").unwrap();
    let b = parse("⿱A⿵BC").unwrap();
    assert!(equal(&a, &b));
}

#[test]
fn test_equal_rejects_different_operator() {
    assert!(!equal(&parse("⿰AB").unwrap(), &parse("⿱AB").unwrap()));
}

#[test]
fn test_equal_rejects_different_operand() {
    assert!(!equal(&parse("⿰AB").unwrap(), &parse("⿰AC").unwrap()));
}

#[test]
fn test_equal_rejects_swapped_operands() {
    assert!(!equal(&parse("⿰AB").unwrap(), &parse("⿰BA").unwrap()));
}

#[test]
fn test_equal_rejects_different_operand_count() {
    assert!(!equal(&parse("⿰AB").unwrap(), &parse("⿲ABA").unwrap()));
}

#[test]
fn test_equal_ternary_not_equal_to_binary_restatement() {
    assert!(!equal(&parse("⿲ABC").unwrap(), &parse("⿰A⿰BC").unwrap()));
}

#[test]
fn test_equal_leaves() {
    assert!(equal(&leaf('A'), &leaf('A')));
    assert!(!equal(&leaf('A'), &leaf('B')));
}

#[test]
fn test_leaf_never_equals_node() {
    let node = parse("⿰AB").unwrap();
    assert!(!equal(&node, &leaf('A')));
    assert!(!equal(&leaf('A'), &node));
}

// --- Transform ---

#[test]
fn test_transform_visits_post_order() {
    let ids = parse("⿱A⿰BC").unwrap();
    let mut seen = Vec::new();
    let out = transform(ids.clone(), |node| {
        seen.push(node.to_string());
        node
    });
    assert_eq!(out, ids);
    assert_eq!(seen, vec!["A", "B", "C", "⿰BC", "⿱A⿰BC"]);
}

#[test]
fn test_transform_parent_sees_rewritten_children() {
    let ids = parse("⿱A⿰BC").unwrap();
    let mut parent_view = String::new();
    let out = transform(ids, |node| match node {
        Ids::Leaf('B') => leaf('X'),
        Ids::Binary(BinaryOperator::AboveToBelow, _) => {
            parent_view = node.to_string();
            node
        }
        other => other,
    });
    assert_eq!(parent_view, "⿱A⿰XC");
    assert_eq!(out.to_string(), "⿱A⿰XC");
}

#[test]
fn test_transform_can_collapse_subtree() {
    let ids = parse("⿰A⿱BC").unwrap();
    let out = ids.transform(&mut |node: Ids| {
        if node.to_string() == "⿱BC" {
            leaf('Z')
        } else {
            node
        }
    });
    assert_eq!(out.to_string(), "⿰AZ");
}

#[test]
fn test_leaves_in_serialized_order() {
    let ids = parse("⿳A⿰BC⿻DE").unwrap();
    assert_eq!(ids.leaves().collect::<String>(), "ABCDE");
    assert_eq!(leaf('Q').leaves().collect::<String>(), "Q");
}

// --- Properties ---

fn arb_ids() -> impl Strategy<Value = Ids> {
    let leaf = prop::sample::select(vec!['A', 'B', 'C', '\u{17000}', '\u{18800}', '\u{18D80}'])
        .prop_map(Ids::Leaf);
    leaf.prop_recursive(5, 48, 3, |inner| {
        prop_oneof![
            (
                prop::sample::select(BinaryOperator::ALL.to_vec()),
                inner.clone(),
                inner.clone()
            )
                .prop_map(|(op, a, b)| Ids::binary(op, a, b)),
            (
                prop::sample::select(TernaryOperator::ALL.to_vec()),
                inner.clone(),
                inner.clone(),
                inner
            )
                .prop_map(|(op, a, b, c)| Ids::ternary(op, a, b, c)),
        ]
    })
}

fn arities_hold(ids: &Ids) -> bool {
    let own = match ids.operator() {
        Some(op) => ids.operands().len() == op.arity(),
        None => ids.operands().is_empty(),
    };
    own && ids.operands().iter().all(arities_hold)
}

proptest! {
    #[test]
    fn prop_print_then_parse_round_trips(ids in arb_ids()) {
        let text = ids.to_string();
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed.to_string(), text);
        prop_assert!(equal(&parsed, &ids));
    }

    #[test]
    fn prop_parsed_nodes_respect_arity(ids in arb_ids()) {
        let parsed = parse(&ids.to_string()).unwrap();
        prop_assert!(arities_hold(&parsed));
    }

    #[test]
    fn prop_equality_reflexive_and_symmetric(a in arb_ids(), b in arb_ids()) {
        prop_assert!(equal(&a, &a));
        prop_assert_eq!(equal(&a, &b), equal(&b, &a));
        prop_assert_eq!(equal(&a, &b), a.to_string() == b.to_string());
    }

    #[test]
    fn prop_identity_transform_preserves_tree(ids in arb_ids()) {
        let out = transform(ids.clone(), |node| node);
        prop_assert_eq!(out, ids);
    }

    #[test]
    fn prop_truncated_node_never_parses(ids in arb_ids()) {
        let text = ids.to_string();
        if !ids.is_leaf() {
            let truncated: String = text.chars().take(text.chars().count() - 1).collect();
            let is_incomplete = matches!(parse(&truncated), Err(ParseError::Incomplete { .. }));
            prop_assert!(is_incomplete);
        }
    }
}
