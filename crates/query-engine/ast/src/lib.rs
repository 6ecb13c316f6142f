//! The canonical AST handed to the query planner.

pub mod ast;
