//! Input data model: query expressions and the scalar expressions they carry.
//!
//! Everything in here is produced by the upstream parser and name resolver
//! and is read-only once the translation stage runs.

pub mod expression;
pub mod query;

pub use expression::{AggregateFunction, ColumnRef, Expression, Operator, Value};
pub use query::{
    ColumnDescriptor, ColumnHandle, ColumnKind, Columns, GroupingSet, LimitClause, QueryExpression,
    RangeVariable, SetOperation, SetOperator, SortAndSlice, Specification,
};
