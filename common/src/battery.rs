//! # Regression Battery
//!
//! Labeled `(input, expected verdict)` pairs covering legal forms, edge
//! cases and adversarial input for each address family.
//!
//! Every expectation here also holds for the reference parser, so the
//! battery stays free of zero-padded IPv4 octets (std rejects them while
//! the default custom policy accepts them).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Ipv4,
    Ipv6,
}

impl Family {
    pub fn cases(self) -> &'static [Case] {
        match self {
            Family::Ipv4 => IPV4_CASES,
            Family::Ipv6 => IPV6_CASES,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Ipv4 => f.write_str("IPv4"),
            Family::Ipv6 => f.write_str("IPv6"),
        }
    }
}

/// One labeled input. `input: None` stands for an absent address.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub label: &'static str,
    pub input: Option<&'static str>,
    pub expected: bool,
}

const fn case(label: &'static str, input: &'static str, expected: bool) -> Case {
    Case {
        label,
        input: Some(input),
        expected,
    }
}

const fn absent(label: &'static str) -> Case {
    Case {
        label,
        input: None,
        expected: false,
    }
}

pub const IPV4_CASES: &[Case] = &[
    // Standard
    case("Minimum address", "0.0.0.0", true),
    case("Maximum address", "255.255.255.255", true),
    case("Localhost", "127.0.0.1", true),
    case("Private network", "192.168.1.1", true),
    case("Public IP", "8.8.8.8", true),
    case("Max octets", "255.255.255.254", true),
    case("Mixed values", "1.2.3.4", true),
    // Out of range
    case("Octet > 255", "256.1.1.1", false),
    case("Large octet", "999.1.1.1", false),
    case("All high", "300.300.300.300", false),
    // Octet count
    case("Too few octets", "192.168.1", false),
    case("Too many octets", "192.168.1.1.1", false),
    case("Single octet", "192", false),
    // Empty or missing parts
    case("Empty octet", "192.168..1", false),
    case("Trailing dot", "192.168.1.1.", false),
    case("Leading dot", ".192.168.1.1", false),
    case("Empty string", "", false),
    absent("NULL"),
    // Characters
    case("Letter in octet", "192.168.a.1", false),
    case("Special chars", "192.168.1.1!", false),
    case("Space", "192.168. 1.1", false),
    case("Negative", "192.168.-1.1", false),
    // Adversarial
    case("256 boundary", "255.255.255.256", false),
    case("Overflow attempt", "99999999999.1.1.1", false),
    case("Hex format", "0xC0.0xA8.0x01.0x01", false),
    case("Octal-like", "0777.0777.0777.0777", false),
    case("SQL injection", "192'; DROP TABLE--", false),
    case("Script injection", "192<script>", false),
    case("Unicode digits", "１９２.１６８.１.１", false),
    case("Double dots", "192..168.1.1", false),
    case("Triple dots", "192...168.1.1", false),
    case("Trailing dot variant", "255.1.1.0.", false),
    case("Trailing dot max", "255.255.255.255.", false),
];

pub const IPV6_CASES: &[Case] = &[
    // Standard
    case("Full format", "2001:0db8:0000:0000:0000:0000:0000:0001", true),
    case("Compressed zeros", "2001:db8::1", true),
    case("All zeros", "::", true),
    case("Loopback", "::1", true),
    case("With leading zeros", "2001:0db8:0001:0000:0000:0ab9:C0A8:0102", true),
    case("No leading zeros", "2001:db8:1:0:0:ab9:c0a8:102", true),
    // Case
    case("Lowercase", "2001:0db8:85a3:0000:0000:8a2e:0370:7334", true),
    case("Uppercase", "2001:0DB8:85A3:0000:0000:8A2E:0370:7334", true),
    case("Mixed case", "2001:0dB8:85a3:0000:0000:8A2e:0370:7334", true),
    // Embedded IPv4
    case("IPv4-mapped 1", "::ffff:192.0.2.128", true),
    case("IPv4-mapped 2", "::ffff:c000:0280", true),
    case("IPv4-compatible", "::192.0.2.128", true),
    // Compression position
    case("Compression at start", "::8a2e:0370:7334", true),
    case("Compression at end", "2001:db8::", true),
    case("Compression in middle", "2001:db8::8a2e:0370:7334", true),
    case("Link-local", "fe80::1", true),
    case("Link-local full", "fe80:0000:0000:0000:0204:61ff:fe9d:f156", true),
    // Compression misuse
    case("Triple colon", "2001:db8:::1", false),
    case("Quad colon", "2001::::1", false),
    case("Multiple compressions", "2001::db8::1", false),
    case("Empty groups", "2001::db8:::1", false),
    // Group count and size
    case("Too many groups", "1:2:3:4:5:6:7:8:9", false),
    case("No compression with 9", "2001:0db8:0000:0000:0000:0000:0000:0000:0001", false),
    case("Group > 4 digits", "2001:0db8:00000:0000:0000:0000:0000:0001", false),
    case("Very long group", "20011:0db8:0000:0000:0000:0000:0000:0001", false),
    case("Hex overflow", "ffffffff:0:0:0:0:0:0:1", false),
    case("Full no compress", "2001:0db8:0000:0000:0000:0000:0000:0001", true),
    case("Valid with trailing ::", "2001:0db8:0001:0002:0003:0004:0005::", true),
    // Characters
    case("Invalid hex", "2001:0db8:0g00:0000:0000:0000:0000:0001", false),
    case("Special char", "2001:0db8:0000:0000:0000:0000:0000:0001!", false),
    case("Mixed extreme", "aBcD:EfGh:0000:0000:0000:0000:0000:0001", false),
    case("Unicode colon", "2001:db8∶:1", false),
    case("Script tag", "2001:db8<script>::1", false),
    case("SQL", "'; DROP TABLE--", false),
    case("Unicode digits", "１９２.１６８.１.１", false),
    // Empty
    case("Empty string", "", false),
    absent("NULL"),
    // IPv4 suffix
    case("Bad IPv4 suffix", "::ffff:999.0.2.128", false),
    case("IPv4 wrong position", "2001:db8:192.168.1.1::", false),
    case("IPv4 only", "192.168.1.1", false),
    case("Mixed wrong", "2001:db8:192.168.1", false),
    // Colons
    case("Single colon start", ":2001:db8::1", false),
    case("Single colon end", "2001:db8::1:", false),
    case("Only colons", ":::", false),
    case("Many colons", "::::::::", false),
    case("Alternating", ":1:2:3:4:5:6:7:8", false),
    case("Just colons", ":", false),
    // Short, long, whitespace
    case("Short string", "1", false),
    case("Just dots", "...", false),
    case("IPv4 with spaces", " 192.168.1.1", false),
    case("IPv4 trailing space", "192.168.1.1 ", false),
    case("IPv6 with space", " ::1", false),
    case(
        "Very long invalid",
        "1111111111111111111111111111111111111111111111111111111111",
        false,
    ),
];

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
