//! FLIPBOX - 3D flip box component
//!
//! An ordered list of content panels, one visible at a time, with
//! transitions rendered as a cube-like quarter-turn along a horizontal
//! or vertical axis. The core engine is UI-agnostic; an egui widget
//! and demo binary sit on top.

// Core engine (content list, face mapping, flip state machine, autoplay)
pub mod core;

// App modules
pub mod cli;
pub mod command;
pub mod component;
pub mod config;
pub mod options;
pub mod widgets;

// Re-export commonly used types from core
pub use crate::core::{
    Autoplay, Axis, ContentStore, EventSender, Face, FlipEngine, FlipEvent, FlipSurface,
    TransitionTicket, event_channel,
};

// Re-export the public surface
pub use command::{Command, Reply, dispatch};
pub use component::FlipBox;
pub use options::{FlipOptions, FlipOptionsPatch};
pub use widgets::{FlipBoxView, PanelContent};
