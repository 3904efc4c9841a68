//! Reference verdicts used to cross-check the custom validators.
//!
//! Backed by `std::net` parsing. Note that std rejects zero-padded IPv4
//! octets, so it disagrees with the default custom policy on those.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::battery::Family;

pub fn is_valid_ipv4(text: Option<&str>) -> bool {
    text.is_some_and(|text| text.parse::<Ipv4Addr>().is_ok())
}

pub fn is_valid_ipv6(text: Option<&str>) -> bool {
    text.is_some_and(|text| text.parse::<Ipv6Addr>().is_ok())
}

pub fn is_valid(family: Family, text: Option<&str>) -> bool {
    match family {
        Family::Ipv4 => is_valid_ipv4(text),
        Family::Ipv6 => is_valid_ipv6(text),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
