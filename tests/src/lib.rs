//! Integration suites for `addrcheck-core`.
//!
//! Compiled only under `cargo test`.

mod properties;
mod scenarios;
