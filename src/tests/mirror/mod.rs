//! Mirror module tests.

mod memory_tests;
mod stdio_tests;
