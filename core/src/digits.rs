use crate::error::Rejection;

pub(crate) fn decimal_digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        _ => None,
    }
}

pub(crate) fn hex_digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parses one decimal octet.
///
/// `offset` is the position of `digits` in the scanned text and is only
/// used to locate the rejection. Accumulation happens in a `u8`, so the
/// parse stops at the first digit that would push the value past 255
/// instead of reading the whole run and range-checking afterwards.
pub(crate) fn parse_octet(digits: &[u8], offset: usize) -> Result<u8, Rejection> {
    if digits.is_empty() {
        return Err(Rejection::EmptyOctet { at: offset });
    }

    let mut value: u8 = 0;
    for (idx, &byte) in digits.iter().enumerate() {
        let at = offset + idx;
        let digit = decimal_digit_value(byte).ok_or(Rejection::UnexpectedChar { at })?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(Rejection::OctetOverflow { at })?;
    }
    Ok(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
