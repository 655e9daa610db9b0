//! Application services: one module per use-case.

pub mod execution;
pub mod operations;
pub mod startup;
