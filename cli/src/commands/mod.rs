//! Command implementations

pub mod menu;
pub mod run;
pub mod steps;
pub mod version;
