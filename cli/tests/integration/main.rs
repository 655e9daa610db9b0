//! Integration tests for the sysprep binary.

mod cli_tests;
