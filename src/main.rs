use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use figslice::cli::{Cli, Commands};
use figslice::output::Printer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let printer = Printer::new().with_verbose(cli.verbose);
    let command_name = cli.command.name();

    let result = match cli.command {
        Commands::Export(args) => figslice::cli::export::run(args, &printer).await.map(|_| ()),
        Commands::Discover(args) => figslice::cli::discover::run(args, &printer).await,
        Commands::Completions(args) => figslice::cli::completions::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let show_usage = err.is_usage();
            eprintln!("{:?}", miette::Report::new(err));
            if show_usage {
                let mut cmd = Cli::command();
                if let Some(sub) = cmd.find_subcommand_mut(command_name) {
                    let _ = sub.print_help();
                }
            }
            ExitCode::FAILURE
        }
    }
}
