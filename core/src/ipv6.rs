//! # IPv6 Validator
//!
//! Single left-to-right pass over hex groups, colons, at most one `::`
//! compression marker and an optional trailing dotted quad.
//!
//! The trailing dotted quad is handed to the [`ipv4`](crate::ipv4) scanner
//! and counts as two groups. Nothing may follow it.

use crate::config::Config;
use crate::digits;
use crate::error::Rejection;
use crate::ipv4;

/// Longest legal textual form,
/// `ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255`.
pub const MAX_LEN: usize = 45;

const MAX_GROUPS: usize = 8;
const MAX_GROUP_DIGITS: usize = 4;

/// Returns `true` if `text` is a textual IPv6 address.
///
/// Accepts `&str` directly or an `Option<&str>`; `None` and `""` are invalid.
/// Zone IDs (`fe80::1%eth0`) and prefix lengths (`2001:db8::/32`) are not
/// part of the grammar and reject.
pub fn validate_ipv6<'a>(text: impl Into<Option<&'a str>>) -> bool {
    validate_ipv6_with(text, &Config::default())
}

/// Same as [`validate_ipv6`] under an explicit policy.
///
/// The policy only matters for an embedded IPv4 suffix.
pub fn validate_ipv6_with<'a>(text: impl Into<Option<&'a str>>, config: &Config) -> bool {
    text.into()
        .is_some_and(|text| scan(text.as_bytes(), config).is_ok())
}

/// Group bookkeeping for one scan.
#[derive(Debug, Default)]
struct Groups {
    count: usize,
    compressed: bool,
    xdigits_seen: usize,
    val: u16,
}

impl Groups {
    fn push_digit(&mut self, digit: u8, at: usize) -> Result<(), Rejection> {
        if self.xdigits_seen == MAX_GROUP_DIGITS {
            return Err(Rejection::GroupTooLong { at });
        }
        self.val = self
            .val
            .checked_mul(16)
            .and_then(|v| v.checked_add(u16::from(digit)))
            .ok_or(Rejection::GroupOverflow { at })?;
        self.xdigits_seen += 1;
        Ok(())
    }

    fn close_group(&mut self) -> Result<(), Rejection> {
        self.count += 1;
        if self.count > MAX_GROUPS {
            return Err(Rejection::TooManyGroups);
        }
        self.xdigits_seen = 0;
        self.val = 0;
        Ok(())
    }

    fn finish(mut self) -> Result<(), Rejection> {
        if self.xdigits_seen > 0 {
            self.close_group()?;
        }

        let complete = if self.compressed {
            self.count < MAX_GROUPS
        } else {
            self.count == MAX_GROUPS
        };

        if !complete {
            return Err(Rejection::GroupCount {
                found: self.count,
                compressed: self.compressed,
            });
        }
        Ok(())
    }
}

pub(crate) fn scan(bytes: &[u8], config: &Config) -> Result<(), Rejection> {
    if bytes.is_empty() {
        return Err(Rejection::Empty);
    }
    if bytes.len() > MAX_LEN {
        return Err(Rejection::TooLong { max: MAX_LEN });
    }

    let mut cursor: usize = 0;

    // A leading colon is only legal as the first half of `::`.
    if bytes.first() == Some(&b':') {
        if bytes.get(1) != Some(&b':') {
            return Err(Rejection::LoneLeadingColon);
        }
        cursor = 1;
    }

    let mut groups = Groups::default();
    let mut token_start = cursor;

    while let Some(&byte) = bytes.get(cursor) {
        let at = cursor;
        cursor += 1;

        if let Some(digit) = digits::hex_digit_value(byte) {
            groups.push_digit(digit, at)?;
            continue;
        }

        match byte {
            b':' => {
                token_start = cursor;
                if groups.xdigits_seen == 0 {
                    if groups.compressed {
                        return Err(Rejection::DoubleCompression { at });
                    }
                    groups.compressed = true;
                    continue;
                }
                if cursor == bytes.len() {
                    return Err(Rejection::TrailingColon { at });
                }
                groups.close_group()?;
            }
            b'.' if groups.xdigits_seen > 0 => {
                embedded_ipv4(&bytes[token_start..], token_start, config)?;
                groups.count += 2;
                groups.xdigits_seen = 0;
                break;
            }
            _ => return Err(Rejection::UnexpectedChar { at }),
        }
    }

    groups.finish()
}

/// Validates the dotted quad that ends an IPv6 address.
///
/// `suffix` runs from the start of the current token to the end of input.
fn embedded_ipv4(suffix: &[u8], offset: usize, config: &Config) -> Result<(), Rejection> {
    let mut dots = 0;
    for (idx, &byte) in suffix.iter().enumerate() {
        match byte {
            b'.' => dots += 1,
            b'0'..=b'9' => {}
            _ => return Err(Rejection::UnexpectedChar { at: offset + idx }),
        }
    }

    if dots != 3 {
        return Err(Rejection::BadIpv4Suffix { at: offset });
    }

    ipv4::scan(suffix, config).map_err(|_| Rejection::BadIpv4Suffix { at: offset })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
