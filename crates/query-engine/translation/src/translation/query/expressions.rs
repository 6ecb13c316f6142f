//! Serialize expressions and column descriptors to AST nodes.

use std::collections::BTreeMap;

use query_engine_ast::ast::Node;
use query_engine_ir::ir::{ColumnHandle, ColumnKind, Columns, Expression, Value};

use crate::translation::helpers::Env;

/// Serialize one column descriptor.
///
/// The alias propagated by a stand-in wins over the descriptor's own alias.
/// An order-by helper wraps its sort key in an `orderby` node carrying the
/// direction.
pub fn descriptor_node(
    env: &Env,
    columns: &Columns,
    aliases: &BTreeMap<ColumnHandle, String>,
    handle: ColumnHandle,
) -> Node {
    let descriptor = columns.get(handle);
    let mut node = expression_node(env, &descriptor.expression);

    let alias = aliases
        .get(&handle)
        .map(String::as_str)
        .or(descriptor.alias.as_deref());
    if let Some(alias) = alias {
        node.set_attribute("alias", alias);
    }

    if let ColumnKind::OrderBy { descending } = descriptor.kind {
        let mut wrapper = Node::new("orderby");
        if descending {
            wrapper.set_attribute("desc", "true");
        }
        wrapper.add_child(node);
        return wrapper;
    }

    node
}

/// Serialize a scalar expression. Total: every expression shape has a node
/// form.
pub fn expression_node(env: &Env, expression: &Expression) -> Node {
    match expression {
        Expression::Literal(value) => {
            let mut node = Node::new("value");
            if !matches!(value, Value::Null) {
                node.set_attribute("value", value.to_string());
            }
            node.set_attribute("valuetype", value.type_name());
            node
        }
        Expression::ColumnRef(column) => {
            let mut node = Node::new("columnref");
            if let Some(table) = &column.table {
                node.set_attribute("table", table);
            }
            if let Some(name) = &column.column {
                node.set_attribute("column", name);
            }
            node
        }
        Expression::Parameter { index } => {
            let mut node = Node::new("value");
            node.set_attribute("isparam", "true");
            node.set_attribute("id", env.parameter_id(*index));
            node
        }
        Expression::Operation { operator, operands } => {
            let mut node = Node::new("operation");
            node.set_attribute("optype", operator.name());
            for operand in operands {
                node.add_child(expression_node(env, operand));
            }
            node
        }
        Expression::Aggregate {
            function,
            distinct,
            operand,
        } => {
            let mut node = Node::new("aggregation");
            node.set_attribute("optype", function.name());
            if *distinct {
                node.set_attribute("distinct", "true");
            }
            if let Some(operand) = operand {
                node.add_child(expression_node(env, operand));
            }
            node
        }
    }
}
