//! Shared fixtures for the translation tests.

#![allow(dead_code)]

use query_engine_ast::ast::Node;
use query_engine_ir::ir::{
    AggregateFunction, ColumnDescriptor, ColumnHandle, ColumnKind, ColumnRef, Columns, Expression,
    LimitClause, QueryExpression, RangeVariable, SetOperation, SetOperator, SortAndSlice,
    Specification, Value,
};
use query_engine_translation::translation::helpers::{EvaluationError, ParameterBinding, Session};

/// A session double: evaluates literal expressions only, hands out
/// parameter ids `p0`, `p1`, …
pub struct TestSession {
    pub schema: String,
    pub parameters: Vec<ParameterBinding>,
}

impl TestSession {
    pub fn new() -> TestSession {
        TestSession {
            schema: "public".to_string(),
            parameters: vec![],
        }
    }
}

impl Session for TestSession {
    fn current_schema(&self) -> &str {
        &self.schema
    }

    fn evaluate(&self, expression: &Expression) -> Result<Value, EvaluationError> {
        match expression {
            Expression::Literal(value) => Ok(value.clone()),
            other => Err(EvaluationError(format!("not a literal: {other:?}"))),
        }
    }

    fn parameter_id(&self, index: usize) -> String {
        format!("p{index}")
    }

    fn parameters(&self) -> Vec<ParameterBinding> {
        self.parameters.clone()
    }
}

pub fn column_ref(name: &str) -> Expression {
    Expression::ColumnRef(ColumnRef {
        table: Some("t".to_string()),
        column: Some(name.to_string()),
    })
}

pub fn integer(value: i64) -> Expression {
    Expression::Literal(Value::Integer(value))
}

pub fn parameter(index: usize) -> Expression {
    Expression::Parameter { index }
}

/// An ordinary output column.
pub fn column(name: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        kind: ColumnKind::Column,
        alias: None,
        is_aggregate: false,
        expression: column_ref(name),
    }
}

pub fn aliased(mut descriptor: ColumnDescriptor, alias: &str) -> ColumnDescriptor {
    descriptor.alias = Some(alias.to_string());
    descriptor
}

/// An aliased aggregate stand-in delegating to `target`. Its payload is an
/// alias-only placeholder reference, as the resolver produces.
pub fn aggregate_stand_in(target: usize, alias: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        kind: ColumnKind::StandIn {
            target: ColumnHandle::new(target),
        },
        alias: Some(alias.to_string()),
        is_aggregate: true,
        expression: Expression::ColumnRef(ColumnRef {
            table: None,
            column: None,
        }),
    }
}

pub fn aggregate(function: AggregateFunction, operand: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        kind: ColumnKind::Aggregate,
        alias: None,
        is_aggregate: true,
        expression: Expression::Aggregate {
            function,
            distinct: false,
            operand: Some(Box::new(column_ref(operand))),
        },
    }
}

pub fn order_helper(name: &str, descending: bool) -> ColumnDescriptor {
    ColumnDescriptor {
        kind: ColumnKind::OrderBy { descending },
        alias: None,
        is_aggregate: false,
        expression: column_ref(name),
    }
}

pub fn scan(table: &str) -> RangeVariable {
    RangeVariable {
        schema: None,
        table: table.to_string(),
        alias: None,
        non_index_join_condition: None,
        index_condition: None,
        index_end_condition: None,
        is_join_index: false,
    }
}

pub fn specification(columns: Vec<ColumnDescriptor>) -> Specification {
    Specification {
        columns: Columns::new(columns),
        range_variables: vec![scan("t")],
        filter: None,
        grouping: None,
        sort_and_slice: None,
        having: None,
        distinct: false,
    }
}

/// A one-column SELECT reading from `table`, for set-operation leaves.
pub fn select_from(table: &str) -> QueryExpression {
    let mut select = specification(vec![column("a")]);
    select.range_variables = vec![scan(table)];
    QueryExpression::Specification(select)
}

pub fn set_operation(
    operator: SetOperator,
    left: QueryExpression,
    right: QueryExpression,
) -> QueryExpression {
    QueryExpression::SetOperation(SetOperation {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn limit_clause(offset: Expression, limit: Expression) -> SortAndSlice {
    SortAndSlice {
        limit: Some(LimitClause {
            operands: vec![offset, limit],
        }),
    }
}

/// First child with the given name; panics when absent.
pub fn child<'a>(node: &'a Node, name: &str) -> &'a Node {
    node.children
        .iter()
        .find(|child| child.name == name)
        .unwrap_or_else(|| panic!("no {name} child in {}", node.name))
}

/// The table scanned by a translated one-table `select` node.
pub fn scanned_table(select: &Node) -> &str {
    child(select, "tablescans").children[0]
        .attribute("table")
        .expect("tablescan without table attribute")
}
