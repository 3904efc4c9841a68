mod commands;
mod terminal;

use addrcheck_common::battery::Family;
use commands::{CommandLine, check, suite};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = commands.config();

    if commands.runs_suite() {
        suite::run(&cfg);
        return Ok(());
    }

    if let Some(address) = &commands.ipv4 {
        check::check(Family::Ipv4, address, &cfg);
    }

    if let Some(address) = &commands.ipv6 {
        check::check(Family::Ipv6, address, &cfg);
    }

    Ok(())
}
