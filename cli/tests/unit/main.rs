//! Unit tests for sysprep
//!
//! These tests use test doubles for the ports; only `audited_run` spawns
//! real (trivial) processes.

mod helpers;
mod menu;
mod property_tests;
