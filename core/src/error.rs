use thiserror::Error;

/// Why a scanner stopped.
///
/// Never leaves the crate: the public validators collapse every variant
/// to `false`. Positions are byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum Rejection {
    #[error("empty input")]
    Empty,

    #[error("input longer than {max} characters")]
    TooLong { max: usize },

    #[error("unexpected character at {at}")]
    UnexpectedChar { at: usize },

    #[error("empty octet at {at}")]
    EmptyOctet { at: usize },

    #[error("octet exceeds 255 at {at}")]
    OctetOverflow { at: usize },

    #[error("zero-padded octet at {at}")]
    LeadingZero { at: usize },

    #[error("expected 4 octets, found {found}")]
    OctetCount { found: usize },

    #[error("single leading colon")]
    LoneLeadingColon,

    #[error("second compression marker at {at}")]
    DoubleCompression { at: usize },

    #[error("group longer than 4 hex digits at {at}")]
    GroupTooLong { at: usize },

    #[error("group exceeds 0xffff at {at}")]
    GroupOverflow { at: usize },

    #[error("trailing colon at {at}")]
    TrailingColon { at: usize },

    #[error("more than 8 groups")]
    TooManyGroups,

    #[error("invalid embedded IPv4 suffix at {at}")]
    BadIpv4Suffix { at: usize },

    #[error("{found} groups do not form an address (compressed: {compressed})")]
    GroupCount { found: usize, compressed: bool },
}
