/// Validation policy shared by both scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Accepts zero-padded octets such as `192.001.002.003`.
    ///
    /// Enabled by default. Applies to standalone IPv4 input as well as
    /// embedded IPv4 suffixes inside IPv6 input. Disabling it rejects
    /// `010`, which some resolvers read as octal.
    pub allow_leading_zeros: bool,
}

impl Config {
    /// Policy that rejects zero-padded octets.
    pub const fn strict() -> Self {
        Self {
            allow_leading_zeros: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_leading_zeros: true,
        }
    }
}
