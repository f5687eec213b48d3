//! vanillafy - return a modded game installation to its vanilla state
//!
//! Usage: vanillafy <COMMAND>
//!
//! Commands:
//!   clean   Locate the installation and remove everything not in the manifest
//!   verify  Report missing and extra entries without deleting
//!   zones   List protected folders and suggested install locations

use std::process::ExitCode;

use clap::Parser;
use vanillafy::VanillafyError;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, Commands};
use commands::{EXIT_FAILURE, EXIT_USAGE};
use ui::context::UiContext;
use ui::error::format_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let pause = matches!(cli.command, Commands::Clean { pause: true, .. });

    let code = match commands::dispatch(cli, ui) {
        Ok(code) => code,
        Err(err) => {
            eprint!("{}", format_error(&err, ui.color, ui.unicode));
            match err.downcast_ref::<VanillafyError>() {
                Some(VanillafyError::InvalidMenuChoice(_)) => ExitCode::from(EXIT_USAGE),
                _ => ExitCode::from(EXIT_FAILURE),
            }
        }
    };

    if pause {
        commands::wait_for_enter(ui.json);
    }
    code
}
