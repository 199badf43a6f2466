use clap::error::ErrorKind;
use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

use cli::Cli;
use commands::handle_generate;
use domain::constants::{USAGE, USAGE_EXAMPLE};
use error::error_code;
use services::logging::init_logging;
use services::output::print_err;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            eprintln!("{}", USAGE);
            eprintln!("{}", USAGE_EXAMPLE);
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if let Err(err) = run(&cli) {
        print_err(cli.json, error_code(&err), format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose)?;
    handle_generate(cli)
}
