//! Integration tests for pastedbg.

mod helpers;

mod cli_test;
mod session_test;
mod tree_test;
