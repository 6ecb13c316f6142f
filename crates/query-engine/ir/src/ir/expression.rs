//! Scalar expressions: literals, column references, operator trees,
//! aggregates and parameter tokens.

use serde::{Deserialize, Serialize};

/// A scalar expression appearing in a column descriptor, a join condition,
/// a filter, or a LIMIT/OFFSET clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// An irreducible literal value.
    Literal(Value),
    /// A reference to a column of a range variable.
    ColumnRef(ColumnRef),
    /// A parameter token. The session assigns it a stable unique id.
    Parameter { index: usize },
    /// An operator applied to sub-expressions.
    Operation {
        operator: Operator,
        operands: Vec<Expression>,
    },
    /// An aggregate function call. `COUNT(*)` carries no operand.
    Aggregate {
        function: AggregateFunction,
        distinct: bool,
        operand: Option<Box<Expression>>,
    },
}

impl Expression {
    /// Whether this expression is a column reference that actually names a
    /// column. A reference without a column name is an alias-only
    /// placeholder.
    pub fn names_a_column(&self) -> bool {
        matches!(self, Expression::ColumnRef(column) if column.column.is_some())
    }

    /// AND two expressions together.
    pub fn and(left: Expression, right: Expression) -> Expression {
        Expression::Operation {
            operator: Operator::And,
            operands: vec![left, right],
        }
    }
}

/// A reference to a column. The column name may be absent when the
/// reference exists only to carry an alias for another descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRef {
    pub table: Option<String>,
    pub column: Option<String>,
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Null,
}

impl Value {
    /// The planner type name for this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::Boolean(_) => "BOOLEAN",
            Value::String(_) => "VARCHAR",
            Value::Null => "NULL",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Null => write!(f, "NULL"),
        }
    }
}

/// Logical, comparison and arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    And,
    Or,
    Not,
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The wire name recorded in the `optype` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::Equal => "equal",
            Operator::NotEqual => "notequal",
            Operator::GreaterThan => "greaterthan",
            Operator::GreaterThanOrEqual => "greaterthanorequalto",
            Operator::LessThan => "lessthan",
            Operator::LessThanOrEqual => "lessthanorequalto",
            Operator::Add => "add",
            Operator::Subtract => "subtract",
            Operator::Multiply => "multiply",
            Operator::Divide => "divide",
        }
    }
}

/// An aggregate function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunction {
    Count,
    Sum,
    Min,
    Max,
    Avg,
}

impl AggregateFunction {
    /// The wire name recorded in the `optype` attribute.
    pub fn name(self) -> &'static str {
        match self {
            AggregateFunction::Count => "count",
            AggregateFunction::Sum => "sum",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
            AggregateFunction::Avg => "avg",
        }
    }
}
