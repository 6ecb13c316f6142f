//! Lower a resolved query expression to the AST consumed by the planner.

pub mod translation;
