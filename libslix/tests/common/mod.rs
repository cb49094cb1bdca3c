// Shared helpers for integration tests. Each aggregator pulls this in with
// `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]

pub mod fixtures;

/// Install env_logger once so `RUST_LOG=libslix=trace` shows library logs.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
