//! Messages delivered to the event loop from spawned tasks.

use crate::workflow::GenerationOutcome;

#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A dispatched generation request finished.
    GenerationSettled(GenerationOutcome),
}
