//! Command-line interface.
//!
//! Non-TUI commands run before the terminal is touched:
//!
//! ```ignore
//! use kakomon::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command, &config) {
//!     // handled without the TUI
//! }
//! ```

pub mod api_key;
pub mod args;
pub mod serve;
pub mod version;

pub use api_key::{handle_clear_api_key, handle_set_api_key, store_api_key};
pub use args::{parse_args, CliCommand};
pub use serve::handle_serve_uploads;
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::config::AppConfig;

/// Run `command` if it is not the TUI.
///
/// Returns `None` for [`CliCommand::RunTui`]. `Version` exits the process.
pub fn run_cli_command(command: &CliCommand, config: &AppConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::SetApiKey => Some(handle_set_api_key(config)),
        CliCommand::ClearApiKey => Some(handle_clear_api_key(config)),
        CliCommand::ServeUploads { addr } => Some(handle_serve_uploads(addr.as_deref(), config)),
        CliCommand::RunTui { .. } => None,
    }
}
