pub mod check;
pub mod suite;

use addrcheck_common::battery::Family;
use addrcheck_core::{Config, validate_ipv4_with, validate_ipv6_with};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "addrcheck")]
#[command(about = "Validates textual IPv4 and IPv6 addresses.")]
#[command(
    long_about = "Validates textual IPv4 and IPv6 addresses.\n\n\
    Without arguments, runs the IPv4 and IPv6 regression batteries against \
    both the custom validators and the standard library parser."
)]
pub struct CommandLine {
    /// Check a single IPv4 address
    #[arg(short = '4', long = "ipv4", value_name = "ADDRESS")]
    pub ipv4: Option<String>,

    /// Check a single IPv6 address
    #[arg(short = '6', long = "ipv6", value_name = "ADDRESS")]
    pub ipv6: Option<String>,

    /// Reject zero-padded IPv4 octets such as 192.001.002.003
    #[arg(long)]
    pub strict: bool,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        if self.strict {
            Config::strict()
        } else {
            Config::default()
        }
    }

    /// No single address was given, so the batteries run.
    pub fn runs_suite(&self) -> bool {
        self.ipv4.is_none() && self.ipv6.is_none()
    }
}

/// Verdict of the custom validator for `family`.
pub fn custom_verdict(family: Family, text: Option<&str>, cfg: &Config) -> bool {
    match family {
        Family::Ipv4 => validate_ipv4_with(text, cfg),
        Family::Ipv6 => validate_ipv6_with(text, cfg),
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
