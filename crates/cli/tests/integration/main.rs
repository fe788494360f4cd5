//! Integration test harness for the wns CLI.

mod common;

mod buildenv_tests;
mod run_tests;
