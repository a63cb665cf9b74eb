use clap::Parser;
use dailybpy::cli::IndexCli;
use dailybpy::commands;

fn main() {
    let cli = IndexCli::parse();
    dailybpy::init_logging(cli.verbose);
    dailybpy::run_main(|| commands::index::run(cli));
}
