//! The resolved query representation consumed by the translation stage.

pub mod ir;
