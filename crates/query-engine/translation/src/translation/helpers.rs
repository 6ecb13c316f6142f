//! Session context and translation policies.

use query_engine_ir::ir::{Expression, Value};
use thiserror::Error;

/// The read-only session context the caller supplies alongside the query
/// expression. The translation stage never mutates it.
pub trait Session {
    /// Name of the schema unqualified tables resolve against.
    fn current_schema(&self) -> &str;

    /// Evaluate a non-parameter sub-expression to a literal value.
    fn evaluate(&self, expression: &Expression) -> Result<Value, EvaluationError>;

    /// Stable unique identifier for a parameter token.
    fn parameter_id(&self, index: usize) -> String;

    /// The statement's parameter registry, in binding order.
    fn parameters(&self) -> Vec<ParameterBinding>;
}

/// One entry of the statement's parameter registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterBinding {
    pub index: usize,
    pub id: String,
    pub type_name: String,
}

/// Evaluating a sub-expression to a literal failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct EvaluationError(pub String);

/// What to do when a LIMIT/OFFSET literal fails to evaluate. The lenient
/// setting reproduces the reference behavior: log the failure and keep
/// whatever attributes were already emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralPolicy {
    #[default]
    Lenient,
    Strict,
}

/// Static information for one translation run: the session plus policies.
pub struct Env<'a> {
    session: &'a dyn Session,
    pub literal_policy: LiteralPolicy,
}

impl<'a> Env<'a> {
    pub fn new(session: &'a dyn Session) -> Env<'a> {
        Env {
            session,
            literal_policy: LiteralPolicy::default(),
        }
    }

    pub fn with_policy(session: &'a dyn Session, literal_policy: LiteralPolicy) -> Env<'a> {
        Env {
            session,
            literal_policy,
        }
    }

    pub fn current_schema(&self) -> &str {
        self.session.current_schema()
    }

    pub fn evaluate(&self, expression: &Expression) -> Result<Value, EvaluationError> {
        self.session.evaluate(expression)
    }

    pub fn parameter_id(&self, index: usize) -> String {
        self.session.parameter_id(index)
    }

    pub fn parameters(&self) -> Vec<ParameterBinding> {
        self.session.parameters()
    }
}
