mod samples;
mod tally;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "snptally";
    pub const BIN_NAME: &str = "snptally";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Confirm and tally candidate SNPs across multiple SAM-aligned samples.")
        .subcommand_required(true)
        .subcommand(tally::cli::create_tally_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // TALLY
        //
        Some((tally::cli::TALLY_CMD, matches)) => {
            tally::handlers::run_tally(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
