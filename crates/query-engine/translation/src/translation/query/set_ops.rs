//! Merge translated set-operation operands, flattening where associativity
//! allows.

use query_engine_ast::ast::Node;
use query_engine_ir::ir::SetOperator;

/// Combine two already-translated operand trees under one `union` node.
///
/// A child that is itself a `union` node carrying the same operator is
/// spliced into the parent instead of nested, so a chain of same-kind
/// operators becomes one node with all leaves as direct children. EXCEPT is
/// not associative: its right operand is never spliced, which keeps
/// `(A EXCEPT B) EXCEPT C` distinct from `A EXCEPT (B EXCEPT C)`.
pub fn merge(operator: SetOperator, left: Node, right: Node) -> Node {
    let mut union = Node::new("union");
    union.set_attribute("uniontype", operator.name());

    if merges_into(&left, operator) {
        union.children.extend(left.children);
    } else {
        union.add_child(left);
    }

    if !operator.is_except() && merges_into(&right, operator) {
        union.children.extend(right.children);
    } else {
        union.add_child(right);
    }

    union
}

fn merges_into(child: &Node, operator: SetOperator) -> bool {
    child.name.eq_ignore_ascii_case("union")
        && child
            .attribute("uniontype")
            .is_some_and(|uniontype| uniontype.eq_ignore_ascii_case(operator.name()))
}
