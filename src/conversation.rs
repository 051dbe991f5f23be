//! Per-user conversation state machine
//!
//! Pure state transitions: given the current session and an event, compute
//! the next session and the effects to run. All I/O happens outside, in the
//! runtime layer, which feeds lookup outcomes back in as new events.

mod effect;
mod event;
mod session;
mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::{CategorySource, Event, FailedLookup};
pub use session::Session;
pub use transition::{transition, TransitionError, TransitionResult, CATEGORY_PAGE_SIZE};
