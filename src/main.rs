use clap::Parser;

use play_filter::cli::Cli;
use play_filter::commands::run_filter;
use play_filter::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let exit_code = run_filter(&cli);

    std::process::exit(exit_code);
}
