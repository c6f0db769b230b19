use clap::{Arg, Command};

pub const FETCH_CMD: &str = "fetch";

pub fn create_fetch_cli() -> Command {
    Command::new(FETCH_CMD)
        .about("Fetches variant annotations for one or more accessions and writes per-accession tables")
        .arg(
            Arg::new("accessions")
                .long("accessions")
                .short('a')
                .required(true)
                .help("Comma-separated list of protein accession identifiers"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output directory for the per-accession tables (default: tables)"),
        )
        .arg(
            Arg::new("variation-api")
                .long("variation-api")
                .help("Variation API base URL override"),
        )
        .arg(
            Arg::new("vep-api")
                .long("vep-api")
                .help("VEP API URL override"),
        )
}
