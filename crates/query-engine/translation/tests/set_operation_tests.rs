//! Tests for merging translated set-operation trees.

mod common;

use common::*;

use enum_iterator::all;
use query_engine_ast::ast::Node;
use query_engine_ir::ir::{QueryExpression, SetOperator};
use query_engine_translation::translation::helpers::Env;
use query_engine_translation::translation::query::{self, set_ops};

fn translate(query_expression: &QueryExpression) -> Node {
    let session = TestSession::new();
    let env = Env::new(&session);
    query::translate(&env, query_expression).expect("translation failed")
}

fn scanned_tables(union: &Node) -> Vec<&str> {
    union.children.iter().map(scanned_table).collect()
}

#[test]
fn a_left_nested_union_chain_flattens_to_one_node() {
    let union = translate(&set_operation(
        SetOperator::Union,
        set_operation(SetOperator::Union, select_from("a"), select_from("b")),
        select_from("c"),
    ));

    assert_eq!(union.name, "union");
    assert_eq!(union.attribute("uniontype"), Some("union"));
    assert_eq!(union.children.len(), 3);
    assert_eq!(scanned_tables(&union), vec!["a", "b", "c"]);
}

#[test]
fn a_right_nested_union_chain_also_flattens() {
    let union = translate(&set_operation(
        SetOperator::Union,
        select_from("a"),
        set_operation(SetOperator::Union, select_from("b"), select_from("c")),
    ));

    assert_eq!(union.children.len(), 3);
    assert_eq!(scanned_tables(&union), vec!["a", "b", "c"]);
}

#[test]
fn every_operator_flattens_a_left_nested_chain_of_itself() {
    // merging is left-associative, so splicing the left side preserves
    // evaluation order for every operator, EXCEPT included
    for operator in all::<SetOperator>() {
        let union = translate(&set_operation(
            operator,
            set_operation(operator, select_from("a"), select_from("b")),
            select_from("c"),
        ));

        assert_eq!(union.attribute("uniontype"), Some(operator.name()));
        assert_eq!(scanned_tables(&union), vec!["a", "b", "c"], "{operator:?}");
    }
}

#[test]
fn except_never_flattens_its_right_operand() {
    for operator in [SetOperator::Except, SetOperator::ExceptAll] {
        let union = translate(&set_operation(
            operator,
            select_from("a"),
            set_operation(operator, select_from("b"), select_from("c")),
        ));

        assert_eq!(union.children.len(), 2);
        assert_eq!(scanned_table(&union.children[0]), "a");
        let nested = &union.children[1];
        assert_eq!(nested.name, "union");
        assert_eq!(nested.attribute("uniontype"), Some(operator.name()));
        assert_eq!(scanned_tables(nested), vec!["b", "c"]);
    }
}

#[test]
fn associative_operators_flatten_their_right_operand() {
    for operator in [
        SetOperator::Union,
        SetOperator::UnionAll,
        SetOperator::Intersect,
        SetOperator::IntersectAll,
    ] {
        let union = translate(&set_operation(
            operator,
            select_from("a"),
            set_operation(operator, select_from("b"), select_from("c")),
        ));
        assert_eq!(scanned_tables(&union), vec!["a", "b", "c"], "{operator:?}");
    }
}

#[test]
fn different_operators_never_merge() {
    let intersect = translate(&set_operation(
        SetOperator::Intersect,
        set_operation(SetOperator::Union, select_from("a"), select_from("b")),
        select_from("c"),
    ));

    assert_eq!(intersect.children.len(), 2);
    let nested = &intersect.children[0];
    assert_eq!(nested.attribute("uniontype"), Some("union"));
    assert_eq!(nested.children.len(), 2);
}

#[test]
fn union_all_does_not_merge_into_plain_union() {
    let union = translate(&set_operation(
        SetOperator::Union,
        set_operation(SetOperator::UnionAll, select_from("a"), select_from("b")),
        select_from("c"),
    ));

    assert_eq!(union.children.len(), 2);
    assert_eq!(
        union.children[0].attribute("uniontype"),
        Some("union all")
    );
}

#[test]
fn the_uniontype_comparison_is_case_insensitive() {
    // a union node recorded with different casing still merges
    let mut left = Node::new("UNION");
    left.set_attribute("uniontype", "Union All");
    left.add_child(Node::new("select"));
    left.add_child(Node::new("select"));

    let merged = set_ops::merge(SetOperator::UnionAll, left, Node::new("select"));
    assert_eq!(merged.children.len(), 3);
}

#[test]
fn a_union_of_selects_keeps_select_children_whole() {
    let union = translate(&set_operation(
        SetOperator::Union,
        select_from("a"),
        select_from("b"),
    ));

    assert_eq!(union.children.len(), 2);
    for select in &union.children {
        assert_eq!(select.name, "select");
        assert!(select.children.iter().any(|c| c.name == "columns"));
    }
}
