//! Error handling for kakomon.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Workflow Errors**: every recoverable failure of the generation workflow
//!
//! Adapter seams (`HttpError`, `SettingsError`, `ClipboardError`) keep their
//! own error types in [`crate::traits`]; they are folded into
//! [`WorkflowError`] or into a failed generation state at the workflow
//! boundary.
//!
//! | Category | Description | Notice |
//! |----------|-------------|--------|
//! | User | Incomplete selection, empty or unsupported source | error |
//! | Conflict | Request already running | info |
//! | System | Filesystem, clipboard | error + hint |
//! | Configuration | Missing API key | error + hint |

mod category;
mod workflow;

pub use category::ErrorCategory;
pub use workflow::{WorkflowError, WorkflowResult};
