use addrcheck_common::{battery::Family, reference};
use addrcheck_core::Config;
use tracing::{debug, info, warn};

use crate::commands::custom_verdict;
use crate::terminal::print;

/// Prints the custom and reference verdicts for one address.
pub fn check(family: Family, address: &str, cfg: &Config) {
    debug!("Checking {family} address with {cfg:?}");

    let custom: bool = custom_verdict(family, Some(address), cfg);
    let reference: bool = reference::is_valid(family, Some(address));

    info!(
        "Custom {family} validator: {address} is {}",
        print::colored_verdict(custom)
    );
    info!(
        "Reference parser: {address} is {}",
        print::colored_verdict(reference)
    );

    if custom != reference {
        warn!("Verdicts disagree for {address}");
    }
}
