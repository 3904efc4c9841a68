//! # Addrcheck Core
//!
//! Single-pass grammar validators for textual IP addresses.
//!
//! * **[`ipv4`]**: dotted-quad validation (`192.168.1.1`).
//! * **[`ipv6`]**: hextet validation with `::` compression and embedded
//!   IPv4 suffixes (`::ffff:192.0.2.128`).
//!
//! Both validators are pure membership tests. Every malformed, out of range
//! or absent input collapses to `false`, and nothing is logged or printed.
//!
//! ```
//! use addrcheck_core::{validate_ipv4, validate_ipv6};
//!
//! assert!(validate_ipv4("255.255.255.255"));
//! assert!(!validate_ipv4("256.1.1.1"));
//! assert!(validate_ipv6("::ffff:192.0.2.128"));
//! assert!(!validate_ipv6(None::<&str>));
//! ```

pub mod config;
pub mod ipv4;
pub mod ipv6;

mod digits;
mod error;

pub use config::Config;
pub use ipv4::{validate_ipv4, validate_ipv4_with};
pub use ipv6::{validate_ipv6, validate_ipv6_with};
