//! Flip box widget - the egui rendering collaborator.
//!
//! Implements [`FlipSurface`]: keeps one attached panel per face slot,
//! animates the quarter-turn the engine requests, and reports the
//! completion ticket back to the host exactly once per landed turn.
//! The flip is drawn as a perspective squash along the rotation axis:
//! the outgoing face collapses to the edge, then the incoming face
//! unfolds from it.

use eframe::egui;
use log::trace;
use std::time::{Duration, Instant};

use crate::core::{Axis, Face, FlipSurface, TransitionTicket};
use crate::options::FlipOptions;

/// Anything the widget can draw inside a face.
///
/// Panels stay opaque to the core engine; only the renderer needs
/// paintability.
pub trait PanelContent {
    fn paint(&self, painter: &egui::Painter, rect: egui::Rect);
}

/// CSS-style timing curves, cubic approximations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Unknown names fall back to the default curve.
    pub fn from_name(name: &str) -> Self {
        match name {
            "linear" => Easing::Linear,
            "ease" => Easing::Ease,
            "ease-in" => Easing::EaseIn,
            "ease-out" => Easing::EaseOut,
            "ease-in-out" => Easing::EaseInOut,
            _ => Easing::default(),
        }
    }

    /// Map linear progress [0, 1] onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            // Fast start, gentle landing
            Easing::Ease => 1.0 - (1.0 - t).powi(3),
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// One quarter-turn in flight.
struct ActiveTurn {
    ticket: TransitionTicket,
    started: Instant,
    outgoing: Face,
}

/// Widget state persisting across frames.
pub struct FlipBoxView<P> {
    axis: Axis,
    size: egui::Vec2,
    duration: Duration,
    easing: Easing,
    rotation: i32,
    attached: [Option<P>; 6],
    turn: Option<ActiveTurn>,
    completed: Option<TransitionTicket>,
}

/// Fixed slot order: Front, Back, Left, Right, Top, Bottom.
fn face_slot(face: Face) -> usize {
    match face {
        Face::Front => 0,
        Face::Back => 1,
        Face::Left => 2,
        Face::Right => 3,
        Face::Top => 4,
        Face::Bottom => 5,
    }
}

impl<P> FlipBoxView<P> {
    pub fn new(options: &FlipOptions) -> Self {
        Self {
            axis: if options.vertical {
                Axis::Vertical
            } else {
                Axis::Horizontal
            },
            size: egui::vec2(options.width, options.height),
            duration: Duration::from_millis(options.animation_duration_ms),
            easing: Easing::from_name(&options.animation_easing),
            rotation: 0,
            attached: std::array::from_fn(|_| None),
            turn: None,
            completed: None,
        }
    }

    /// Ticket of the turn that just landed, yielded once. The host
    /// feeds it back into the engine's completion entry point.
    pub fn take_completed(&mut self) -> Option<TransitionTicket> {
        self.completed.take()
    }

    pub fn is_animating(&self) -> bool {
        self.turn.is_some()
    }
}

impl<P: PanelContent> FlipBoxView<P> {
    /// Draw the box and advance the animation.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::hover());
        let front = self.axis.current_face(self.rotation);

        let landed = match &self.turn {
            None => {
                self.paint_face(ui, rect, front, 1.0);
                None
            }
            Some(turn) => {
                let t = if self.duration.is_zero() {
                    1.0
                } else {
                    turn.started.elapsed().as_secs_f32() / self.duration.as_secs_f32()
                };
                if t >= 1.0 {
                    Some(turn.ticket)
                } else {
                    let eased = self.easing.apply(t);
                    if eased < 0.5 {
                        self.paint_face(ui, rect, turn.outgoing, 1.0 - 2.0 * eased);
                    } else {
                        self.paint_face(ui, rect, front, 2.0 * eased - 1.0);
                    }
                    ui.ctx().request_repaint();
                    None
                }
            }
        };

        if let Some(ticket) = landed {
            // Turn landed: report the ticket and settle on the new face
            trace!("turn {ticket:?} landed");
            self.turn = None;
            self.completed = Some(ticket);
            self.paint_face(ui, rect, front, 1.0);
        }

        response
    }

    /// Paint one face, squashed along the flip axis. `extent` 1.0 is
    /// flat-on, 0.0 is edge-on.
    fn paint_face(&self, ui: &egui::Ui, rect: egui::Rect, face: Face, extent: f32) {
        let extent = extent.clamp(0.0, 1.0);
        let size = match self.axis {
            Axis::Horizontal => egui::vec2(rect.width() * extent, rect.height()),
            Axis::Vertical => egui::vec2(rect.width(), rect.height() * extent),
        };
        let face_rect = egui::Rect::from_center_size(rect.center(), size);

        match &self.attached[face_slot(face)] {
            Some(panel) => panel.paint(ui.painter(), face_rect),
            None => {
                // Empty slot: the box emptied out from removals
                ui.painter()
                    .rect_filled(face_rect, 2.0, egui::Color32::from_gray(30));
            }
        }
    }
}

impl<P: Clone> FlipSurface<P> for FlipBoxView<P> {
    fn attach(&mut self, face: Face, panel: &P) {
        self.attached[face_slot(face)] = Some(panel.clone());
    }

    fn apply_rotation(&mut self, rotation: i32, ticket: TransitionTicket) {
        let outgoing = self.axis.current_face(self.rotation);
        self.rotation = rotation;
        // Overwriting an unfinished turn supersedes it; its ticket is
        // never reported
        self.turn = Some(ActiveTurn {
            ticket,
            started: Instant::now(),
            outgoing,
        });
    }

    fn configure(&mut self, options: &FlipOptions) {
        self.size = egui::vec2(options.width, options.height);
        self.duration = Duration::from_millis(options.animation_duration_ms);
        self.easing = Easing::from_name(&options.animation_easing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::Ease,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?} start");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} end");
        }
    }

    #[test]
    fn test_easing_monotonic_samples() {
        for easing in [Easing::Ease, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            let mut last = 0.0;
            for i in 1..=10 {
                let v = easing.apply(i as f32 / 10.0);
                assert!(v >= last, "{easing:?} not monotonic at {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_easing_name_fallback() {
        assert_eq!(Easing::from_name("linear"), Easing::Linear);
        assert_eq!(Easing::from_name("ease-in-out"), Easing::EaseInOut);
        assert_eq!(Easing::from_name("cubic-bezier(0,0,1,1)"), Easing::Ease);
    }

    #[derive(Clone)]
    struct Dummy;

    impl PanelContent for Dummy {
        fn paint(&self, _painter: &egui::Painter, _rect: egui::Rect) {}
    }

    #[test]
    fn test_new_turn_supersedes_ticket() {
        let mut view: FlipBoxView<Dummy> = FlipBoxView::new(&FlipOptions::default());
        // Drive two overlapping flips through a real engine
        let engine_tickets = {
            use crate::core::{EventSender, FlipEngine};
            let mut engine =
                FlipEngine::new(vec![Dummy, Dummy, Dummy], 0, Axis::Horizontal, EventSender::dummy());
            let first = engine.next(false, &mut view).unwrap();
            let second = engine.next(false, &mut view).unwrap();
            (first, second)
        };
        let _ = engine_tickets.0;
        // Only one turn is live in the view, carrying the second ticket
        assert!(view.is_animating());
        assert!(view.take_completed().is_none());
        let live = view.turn.as_ref().unwrap().ticket;
        assert_eq!(live, engine_tickets.1);
    }
}
