//! # IPv4 Validator
//!
//! Accepts exactly four dot-separated decimal octets in `0..=255`.
//!
//! Empty octets, signs, whitespace, hex prefixes and non-ASCII digits are
//! all rejected. Zero-padded octets (`192.001.002.003`) follow
//! [`Config::allow_leading_zeros`].

use crate::config::Config;
use crate::digits;
use crate::error::Rejection;

/// Longest legal dotted quad, `255.255.255.255`.
pub const MAX_LEN: usize = 15;

const OCTETS: usize = 4;

/// Returns `true` if `text` is a dotted-quad IPv4 address.
///
/// Accepts `&str` directly or an `Option<&str>`; `None` and `""` are invalid.
pub fn validate_ipv4<'a>(text: impl Into<Option<&'a str>>) -> bool {
    validate_ipv4_with(text, &Config::default())
}

/// Same as [`validate_ipv4`] under an explicit policy.
pub fn validate_ipv4_with<'a>(text: impl Into<Option<&'a str>>, config: &Config) -> bool {
    text.into()
        .is_some_and(|text| scan(text.as_bytes(), config).is_ok())
}

/// Scans `bytes` as a dotted quad.
///
/// Reading stops one byte past [`MAX_LEN`], so oversized input costs no
/// more than a legal one.
pub(crate) fn scan(bytes: &[u8], config: &Config) -> Result<(), Rejection> {
    if bytes.is_empty() {
        return Err(Rejection::Empty);
    }

    let mut octet_count: usize = 0;
    let mut octet_start: usize = 0;

    for cursor in 0..=bytes.len() {
        if cursor > MAX_LEN {
            return Err(Rejection::TooLong { max: MAX_LEN });
        }

        match bytes.get(cursor) {
            Some(b'.') | None => {
                let octet = &bytes[octet_start..cursor];
                digits::parse_octet(octet, octet_start)?;

                if !config.allow_leading_zeros && octet.len() > 1 && octet[0] == b'0' {
                    return Err(Rejection::LeadingZero { at: octet_start });
                }

                octet_count += 1;
                octet_start = cursor + 1;
            }
            Some(byte) if byte.is_ascii_digit() => {}
            Some(_) => return Err(Rejection::UnexpectedChar { at: cursor }),
        }
    }

    if octet_count != OCTETS {
        return Err(Rejection::OctetCount { found: octet_count });
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
