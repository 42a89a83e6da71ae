//! UI widgets - the egui face of the crate.

pub mod flipbox;

pub use flipbox::{Easing, FlipBoxView, PanelContent};
