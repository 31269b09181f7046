//! portfolio CLI entry point
//!
//! Parses arguments, runs the selected command and turns failures into a
//! readable message with a non-zero exit code.
//!
//! - `list` - Print the projects found in the projects directory
//! - `render` - Render the projects listing page to HTML
//! - `inspect` - Show the front matter extracted from a single file

use anyhow::Result;
use clap::Parser;
use portfolio_cli::cli;
use portfolio_cli::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
