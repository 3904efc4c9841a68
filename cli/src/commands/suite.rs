use addrcheck_common::battery::{Case, Family};
use addrcheck_common::reference;
use addrcheck_common::stats::SuiteStats;
use addrcheck_core::Config;
use colored::*;
use tracing::{error, info, warn};

use crate::commands::custom_verdict;
use crate::terminal::print;

/// Both verdicts for one battery case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub reference: bool,
    pub custom: bool,
    pub passed: bool,
}

pub fn evaluate(family: Family, case: &Case, cfg: &Config) -> Outcome {
    let reference: bool = reference::is_valid(family, case.input);
    let custom: bool = custom_verdict(family, case.input, cfg);

    Outcome {
        reference,
        custom,
        passed: reference == case.expected && custom == case.expected,
    }
}

/// Runs both batteries and prints per-family and combined totals.
///
/// Mismatches are reported, never fatal.
pub fn run(cfg: &Config) -> (SuiteStats, SuiteStats) {
    print::header("IPv4 battery");
    let ipv4: SuiteStats = run_family(Family::Ipv4, cfg);

    print::header("IPv6 battery");
    let ipv6: SuiteStats = run_family(Family::Ipv6, cfg);

    print_summary(&ipv4, &ipv6);
    (ipv4, ipv6)
}

fn run_family(family: Family, cfg: &Config) -> SuiteStats {
    let mut stats = SuiteStats::default();

    for case in family.cases() {
        let outcome: Outcome = evaluate(family, case, cfg);
        stats.record(outcome.passed);
        report(family, case, &outcome);
    }

    stats
}

fn report(family: Family, case: &Case, outcome: &Outcome) {
    let input: String = print::input(case.input);

    if outcome.passed {
        info!(
            "PASS {family} {}: {input} -> {}",
            case.label,
            print::verdict(outcome.reference)
        );
    } else {
        let line: String = format!(
            "FAIL {family} {}: {input} -> Expected: {}, reference: {}, custom: {}",
            case.label,
            print::verdict(case.expected),
            print::verdict(outcome.reference),
            print::verdict(outcome.custom)
        );
        error!("{}", line.red());
    }
}

fn print_summary(ipv4: &SuiteStats, ipv6: &SuiteStats) {
    let combined: SuiteStats = *ipv4 + *ipv6;

    print::fat_separator();
    info!("IPv4 totals {}:{} {}", ipv4.total, ipv4.passed, ipv4.failed());
    info!("IPv6 totals {}:{} {}", ipv6.total, ipv6.passed, ipv6.failed());

    let failed: usize = combined.failed();
    let output: String = format!("Combined {}:{} {}", combined.total, combined.passed, failed);
    if failed == 0 {
        info!("{}", output.bold().green());
    } else {
        warn!("{}", output.bold().yellow());
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
