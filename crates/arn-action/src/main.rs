mod cli;
mod commands;
mod runner;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    runner::init_logger(cli.verbose);

    if let Err(e) = commands::generate::run(cli) {
        runner::set_failed(&e);
        std::process::exit(1);
    }
}
