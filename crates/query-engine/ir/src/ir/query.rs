//! Query expressions: SELECT specifications and set-operation combinations.

use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

use super::expression::Expression;

/// A resolved query expression: either one SELECT specification or a set
/// operation over two query expressions. No other shapes exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryExpression {
    Specification(Specification),
    SetOperation(SetOperation),
}

/// A set-operation combination of two query expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetOperation {
    pub operator: SetOperator,
    pub left: Box<QueryExpression>,
    pub right: Box<QueryExpression>,
}

/// The six supported set operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Sequence)]
pub enum SetOperator {
    Union,
    UnionAll,
    Intersect,
    IntersectAll,
    Except,
    ExceptAll,
}

impl SetOperator {
    /// The wire name recorded in the `uniontype` attribute.
    pub fn name(self) -> &'static str {
        match self {
            SetOperator::Union => "union",
            SetOperator::UnionAll => "union all",
            SetOperator::Intersect => "intersect",
            SetOperator::IntersectAll => "intersect all",
            SetOperator::Except => "except",
            SetOperator::ExceptAll => "except all",
        }
    }

    /// EXCEPT is not associative, so its right operand is never flattened.
    pub fn is_except(self) -> bool {
        matches!(self, SetOperator::Except | SetOperator::ExceptAll)
    }
}

/// One SELECT's full column, source, filter, grouping and sort state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// All columns needed to compute the result, in output-schema order:
    /// display columns interleaved with alias stand-ins and group/order
    /// helpers.
    pub columns: Columns,
    /// The scanned or joined table sources, in declaration order.
    pub range_variables: Vec<RangeVariable>,
    /// The explicit filter condition, when one was given.
    pub filter: Option<Expression>,
    /// Which column descriptors are group columns.
    pub grouping: Option<GroupingSet>,
    pub sort_and_slice: Option<SortAndSlice>,
    /// Present only when the statement had a HAVING clause. The translation
    /// stage rejects it.
    pub having: Option<Expression>,
    pub distinct: bool,
}

/// The flat column list of a specification: an arena of descriptors
/// addressed by stable handles. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    descriptors: Vec<ColumnDescriptor>,
}

/// A stable address of one descriptor in a [`Columns`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnHandle(usize);

impl ColumnHandle {
    pub const fn new(index: usize) -> ColumnHandle {
        ColumnHandle(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl Columns {
    pub fn new(descriptors: Vec<ColumnDescriptor>) -> Columns {
        Columns { descriptors }
    }

    /// Look up a descriptor. A dangling handle is a programming error
    /// upstream, not a runtime condition, and panics.
    pub fn get(&self, handle: ColumnHandle) -> &ColumnDescriptor {
        &self.descriptors[handle.0]
    }

    /// Whether the handle addresses a descriptor in this arena.
    pub fn contains(&self, handle: ColumnHandle) -> bool {
        handle.0 < self.descriptors.len()
    }

    /// Iterate descriptors with their handles, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnHandle, &ColumnDescriptor)> {
        self.descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| (ColumnHandle(index), descriptor))
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// One entry in the flat column list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub kind: ColumnKind,
    pub alias: Option<String>,
    pub is_aggregate: bool,
    /// The expression payload. For a stand-in this is only a placeholder
    /// and is never serialized.
    pub expression: Expression,
}

/// What role a column descriptor plays in the flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// An ordinary output column.
    Column,
    /// An aliased derived expression.
    Derived,
    /// A stand-in: marks an output-schema position but delegates its value
    /// to the descriptor its target handle names.
    StandIn { target: ColumnHandle },
    /// An order-by helper column. Not part of the output schema.
    OrderBy { descending: bool },
    /// An aggregate column.
    Aggregate,
    /// A parameter column.
    Parameter,
}

/// Which descriptors of the flat column list are group columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingSet {
    columns: Vec<ColumnHandle>,
}

impl GroupingSet {
    pub fn new(columns: Vec<ColumnHandle>) -> GroupingSet {
        GroupingSet { columns }
    }

    pub fn contains(&self, handle: ColumnHandle) -> bool {
        self.columns.contains(&handle)
    }
}

/// Sort and slice state of a specification. Only the slice half matters to
/// the translation stage; sort keys travel as order-by helper columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortAndSlice {
    pub limit: Option<LimitClause>,
}

/// The parsed LIMIT clause: offset at position 0, limit at position 1.
/// Any other arity is a parser defect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitClause {
    pub operands: Vec<Expression>,
}

/// One scanned or joined table source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeVariable {
    /// Schema the table lives in; the session's current schema when absent.
    pub schema: Option<String>,
    pub table: String,
    pub alias: Option<String>,
    /// Join condition on non-indexed columns.
    pub non_index_join_condition: Option<Expression>,
    /// Start and end conditions of an indexed join. Either half may be
    /// absent.
    pub index_condition: Option<Expression>,
    pub index_end_condition: Option<Expression>,
    /// Whether the indexed join condition pair is active.
    pub is_join_index: bool,
}
