use clap::Parser;
use dailybpy::cli::InstallCli;
use dailybpy::commands;

fn main() {
    let cli = InstallCli::parse();
    dailybpy::init_logging(cli.verbose);
    dailybpy::run_main(|| commands::install::run(cli));
}
