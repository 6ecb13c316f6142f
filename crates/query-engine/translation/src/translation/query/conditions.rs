//! Combine the filter condition and per-range-variable join conditions
//! into one logical AND tree.

use query_engine_ir::ir::{Expression, RangeVariable};

/// Build the single query condition, if any.
///
/// An explicit filter and range-variable join conditions are mutually
/// exclusive paths upstream; the filter wins outright. Otherwise each range
/// variable contributes its non-indexed join condition, or — when marked as
/// an indexed join — its start and end conditions, folded left-to-right
/// with AND.
pub fn combine(
    filter: Option<&Expression>,
    range_variables: &[RangeVariable],
) -> Option<Expression> {
    if let Some(filter) = filter {
        return Some(filter.clone());
    }

    let mut condition: Option<Expression> = None;
    for range_variable in range_variables {
        if let Some(join) = &range_variable.non_index_join_condition {
            condition = Some(combine_with_and(condition, join.clone()));
        } else if range_variable.is_join_index {
            for part in [
                &range_variable.index_condition,
                &range_variable.index_end_condition,
            ] {
                if let Some(part) = part {
                    condition = Some(combine_with_and(condition, part.clone()));
                }
            }
        }
    }
    condition
}

fn combine_with_and(left: Option<Expression>, right: Expression) -> Expression {
    match left {
        None => right,
        Some(left) => Expression::and(left, right),
    }
}
