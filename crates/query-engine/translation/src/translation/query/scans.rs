//! Serialize range variables to `tablescan` nodes.

use query_engine_ast::ast::Node;
use query_engine_ir::ir::RangeVariable;

use crate::translation::helpers::Env;

/// One `tablescan` node per scanned or joined source. A source without an
/// explicit schema is qualified with the session's current schema.
pub fn range_variable_node(env: &Env, range_variable: &RangeVariable) -> Node {
    let mut node = Node::new("tablescan");
    let schema = range_variable
        .schema
        .as_deref()
        .unwrap_or_else(|| env.current_schema());
    node.set_attribute("schema", schema);
    node.set_attribute("table", &range_variable.table);
    if let Some(alias) = &range_variable.alias {
        node.set_attribute("tablealias", alias);
    }
    node
}
