mod fetch;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "vartab";
    pub const BIN_NAME: &str = "vartab";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Builds per-accession variant annotation tables from the UniProt variation API, with polyphen scores from Ensembl VEP.")
        .subcommand_required(true)
        .subcommand(fetch::cli::create_fetch_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        Some((fetch::cli::FETCH_CMD, matches)) => {
            fetch::handlers::run_fetch(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
