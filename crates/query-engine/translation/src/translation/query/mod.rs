//! Translate a resolved query expression into the planner AST.

pub mod columns;
pub mod conditions;
pub mod expressions;
pub mod limits;
pub mod scans;
pub mod set_ops;

use query_engine_ast::ast::Node;
use query_engine_ir::ir::{QueryExpression, Specification};

use super::error::Error;
use super::helpers::Env;

/// Translate a query expression to the AST handed to the planner.
///
/// Either the whole tree translates or the first fatal error aborts the
/// statement; no partial AST is ever returned.
pub fn translate(env: &Env, query: &QueryExpression) -> Result<Node, Error> {
    let root = translate_expression(env, query)?;
    tracing::info!("planner AST: {:?}", root);
    Ok(root)
}

fn translate_expression(env: &Env, query: &QueryExpression) -> Result<Node, Error> {
    match query {
        QueryExpression::SetOperation(operation) => {
            let left = translate_expression(env, &operation.left)?;
            let right = translate_expression(env, &operation.right)?;
            Ok(set_ops::merge(operation.operator, left, right))
        }
        QueryExpression::Specification(specification) => {
            translate_specification(env, specification)
        }
    }
}

fn translate_specification(env: &Env, select: &Specification) -> Result<Node, Error> {
    // deliberately rejected, surfaced to the caller rather than dropped
    if select.having.is_some() {
        return Err(Error::UnsupportedConstruct("the HAVING clause".to_string()));
    }

    let mut query = Node::new("select");
    if select.distinct {
        query.set_attribute("distinct", "true");
    }

    // limit and offset
    limits::resolve(env, select.sort_and_slice.as_ref(), &mut query)?;

    // partition the flat column list into display, group and order buckets
    let classified = columns::classify(&select.columns, select.grouping.as_ref());

    // display columns, in output schema order
    let mut display = Node::new("columns");
    for handle in columns::resolve_display(&select.columns, &classified.display) {
        display.add_child(expressions::descriptor_node(
            env,
            &select.columns,
            &classified.aliases,
            handle,
        ));
    }
    query.add_child(display);

    // parameters
    query.add_child(parameters_node(env));

    // scans
    let mut scans = Node::new("tablescans");
    for range_variable in &select.range_variables {
        scans.add_child(scans::range_variable_node(env, range_variable));
    }
    query.add_child(scans);

    // condition
    if let Some(condition) = conditions::combine(select.filter.as_ref(), &select.range_variables) {
        let mut node = Node::new("querycondition");
        node.add_child(expressions::expression_node(env, &condition));
        query.add_child(node);
    }

    // group by
    if select.grouping.is_some() {
        let mut group = Node::new("groupcolumns");
        for handle in &classified.group {
            group.add_child(expressions::descriptor_node(
                env,
                &select.columns,
                &classified.aliases,
                *handle,
            ));
        }
        query.add_child(group);
    }

    // order by
    if !classified.order.is_empty() {
        let mut order = Node::new("ordercolumns");
        for handle in &classified.order {
            order.add_child(expressions::descriptor_node(
                env,
                &select.columns,
                &classified.aliases,
                *handle,
            ));
        }
        query.add_child(order);
    }

    Ok(query)
}

/// The parameter-binding metadata child, one entry per registry binding.
fn parameters_node(env: &Env) -> Node {
    let mut parameters = Node::new("parameters");
    for binding in env.parameters() {
        let mut parameter = Node::new("parameter");
        parameter.set_attribute("index", binding.index.to_string());
        parameter.set_attribute("id", binding.id);
        parameter.set_attribute("valuetype", binding.type_name);
        parameters.add_child(parameter);
    }
    parameters
}
