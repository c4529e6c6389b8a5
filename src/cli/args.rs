//! Command-line argument parsing.
//!
//! Flags are few and flat, so they are matched by hand.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Prompt for an API key and store it in settings
    SetApiKey,
    /// Remove the stored API key
    ClearApiKey,
    /// Run the upload server, optionally on a given address
    ServeUploads { addr: Option<String> },
    /// Run the TUI, optionally opened straight into a professor's workspace
    RunTui { professor: Option<String> },
}

/// Parse command-line arguments (including the program name).
///
/// # Examples
///
/// ```
/// use kakomon::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["kakomon".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1).peekable();
    let mut professor = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--set-api-key" => return CliCommand::SetApiKey,
            "--clear-api-key" => return CliCommand::ClearApiKey,
            "--serve-uploads" => {
                let addr = args.next_if(|next| !next.starts_with('-'));
                return CliCommand::ServeUploads { addr };
            }
            "--professor" => {
                professor = args.next_if(|next| !next.starts_with('-'));
            }
            other => {
                if let Some(value) = other.strip_prefix("--professor=") {
                    professor = Some(value.to_string());
                }
            }
        }
    }

    CliCommand::RunTui {
        professor: professor.filter(|id| !id.trim().is_empty()),
    }
}
