//! Core engine modules - content list, face mapping, flip state
//! machine, autoplay, events.
//!
//! Everything here is UI-framework agnostic: rendering happens behind
//! the [`FlipSurface`] trait and panels stay opaque handles.

pub mod engine;
pub mod events;
pub mod face;
pub mod scheduler;
pub mod store;

// Re-exports for convenience
pub use engine::{FlipEngine, FlipSurface, TransitionTicket};
pub use events::{EventSender, FlipEvent, event_channel};
pub use face::{Axis, Face};
pub use scheduler::Autoplay;
pub use store::ContentStore;
