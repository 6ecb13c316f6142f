//! Errors for query translation.

use thiserror::Error;

use super::helpers::EvaluationError;

/// A type for translation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An operator or clause the compiler does not support. Fatal to the
    /// statement and surfaced verbatim as a compilation error.
    #[error("{0} is not supported.")]
    UnsupportedConstruct(String),

    /// The sort/slice specification did not carry exactly the offset and
    /// limit sub-expressions. An upstream parser defect.
    #[error("the parser did not create offset and limit expressions for the LIMIT clause (found {0}).")]
    MalformedLimitClause(usize),

    /// A non-parameter LIMIT/OFFSET expression failed to evaluate to a
    /// literal. Only surfaced under the strict literal policy; the lenient
    /// policy logs and drops the attribute instead.
    #[error("could not evaluate the {clause} expression to a literal")]
    LiteralEvaluation {
        clause: &'static str,
        #[source]
        source: EvaluationError,
    },
}
