//! Entry point for the filecat CLI.

use clap::Parser;
use filecat::{
    catalogue::CatalogueError,
    cli::Cli,
    error::ExitCode,
};

fn main() {
    let cli = Cli::parse();

    match filecat::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = if err.downcast_ref::<CatalogueError>().is_some_and(|e| {
                matches!(
                    e,
                    CatalogueError::Format { .. } | CatalogueError::UnsupportedVersion { .. }
                )
            }) {
                ExitCode::BadCatalogue
            } else {
                ExitCode::GeneralError
            };

            eprintln!("[{}] Error: {:#}", exit_code.code_prefix(), err);
            std::process::exit(exit_code.as_i32());
        }
    }
}
