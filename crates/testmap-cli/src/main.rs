//! `testmap` binary entry point.

use std::process::ExitCode;

use clap::Parser;
use testmap_cli::{cli, commands, error, logger, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::Cli::parse();

    let color = !args.no_color && ui::should_use_color();
    logger::init_logger(args.verbose, args.quiet, !color);
    ui::init_report_handler(color);

    match commands::list_execute(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::fatal(&error::cli_error_to_miette(err), color);
            ExitCode::FAILURE
        }
    }
}
