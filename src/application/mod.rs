//! Application layer
//!
//! Use cases wiring the domain ports together: preflight resolution and
//! action dispatch.

pub mod dispatch;
pub mod preflight;

pub use dispatch::{DispatchOutcome, DispatchUseCase, OutcomeStatus};
pub use preflight::{Preflight, PreflightCheck, PreflightReport};
