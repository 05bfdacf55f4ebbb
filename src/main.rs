use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use services::output;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = commands::handle(&cli) {
        output::print_err(cli.json, "IO_ERROR", &format!("{err:#}"));
        std::process::exit(1);
    }
}
