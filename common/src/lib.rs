//! Pieces shared by the `addrcheck` binary and the integration tests.
//!
//! * **[`battery`]**: the fixed, labeled regression cases.
//! * **[`reference`]**: verdicts from the standard library parsers.
//! * **[`stats`]**: pass/fail bookkeeping per address family.

pub mod battery;
pub mod reference;
pub mod stats;
