//! Extract LIMIT and OFFSET attributes from the sort/slice specification.

use query_engine_ast::ast::Node;
use query_engine_ir::ir::{Expression, SortAndSlice, Value};

use crate::translation::error::Error;
use crate::translation::helpers::{Env, EvaluationError, LiteralPolicy};

/// Write the `offset`/`offset_paramid` and `limit`/`limit_paramid`
/// attributes onto the `select` node.
///
/// A sort/slice specification without exactly the offset and limit
/// sub-expressions is a parser defect and fails with
/// [`Error::MalformedLimitClause`]. A literal that fails to evaluate is
/// handled per the environment's [`LiteralPolicy`]: lenient keeps whatever
/// attributes were already emitted and logs the failure, strict propagates
/// it.
pub fn resolve(
    env: &Env,
    sort_and_slice: Option<&SortAndSlice>,
    query: &mut Node,
) -> Result<(), Error> {
    let Some(clause) = sort_and_slice.and_then(|sort| sort.limit.as_ref()) else {
        return Ok(());
    };
    if clause.operands.len() != 2 {
        return Err(Error::MalformedLimitClause(clause.operands.len()));
    }

    match emit(env, &clause.operands[0], &clause.operands[1], query) {
        Ok(()) => Ok(()),
        Err(error) => match env.literal_policy {
            LiteralPolicy::Lenient => {
                tracing::warn!("ignoring LIMIT/OFFSET literal that failed to evaluate: {error}");
                Ok(())
            }
            LiteralPolicy::Strict => Err(error),
        },
    }
}

fn emit(
    env: &Env,
    offset_expression: &Expression,
    limit_expression: &Expression,
    query: &mut Node,
) -> Result<(), Error> {
    // offset. it may be a parameter token.
    match offset_expression {
        Expression::Parameter { index } => {
            query.set_attribute("offset_paramid", env.parameter_id(*index));
        }
        _ => {
            let offset = evaluate_integer(env, offset_expression, "OFFSET")?;
            // a zero or negative literal offset is the default and is omitted
            if offset > 0 {
                query.set_attribute("offset", offset.to_string());
            }
        }
    }

    // limit. it may be a parameter token.
    match limit_expression {
        Expression::Parameter { index } => {
            query.set_attribute("limit_paramid", env.parameter_id(*index));
        }
        _ => {
            let limit = evaluate_integer(env, limit_expression, "LIMIT")?;
            query.set_attribute("limit", limit.to_string());
        }
    }

    Ok(())
}

fn evaluate_integer(env: &Env, expression: &Expression, clause: &'static str) -> Result<i64, Error> {
    let value = env
        .evaluate(expression)
        .map_err(|source| Error::LiteralEvaluation { clause, source })?;
    match value {
        Value::Integer(value) => Ok(value),
        other => Err(Error::LiteralEvaluation {
            clause,
            source: EvaluationError(format!("expected an integer, got {}", other.type_name())),
        }),
    }
}
