//! Flip state machine.
//!
//! Owns the rotation accumulator and orchestrates one flip: pick the
//! face the rotation will land on, hand the target panel to that slot,
//! bump the accumulator, trigger the visual rotation and wait for its
//! completion signal. The engine is either idle or has exactly one
//! transition in flight; a navigation request during a flight simply
//! starts another flip and supersedes the pending completion.
//!
//! # Transition tickets
//!
//! Every triggered rotation carries a [`TransitionTicket`]. The engine
//! remembers only the latest one; a completion signal for anything else
//! is a stale handler from a superseded flip and is ignored.

use log::{debug, warn};

use super::events::{EventSender, FlipEvent};
use super::face::{Axis, Face};
use super::store::{ContentStore, Mutation};
use crate::options::FlipOptions;

/// Identifies one triggered rotation. Completion signals echo it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTicket(u64);

/// Rendering collaborator: owns the actual face surfaces.
///
/// `attach` replaces whatever the slot held before, keeping the
/// one-panel-per-slot invariant on the renderer side. `apply_rotation`
/// must eventually signal completion exactly once by handing the ticket
/// back to [`FlipEngine::complete_transition`]; arming a new rotation
/// first is fine, the old ticket just goes stale.
pub trait FlipSurface<P> {
    fn attach(&mut self, face: Face, panel: &P);
    fn apply_rotation(&mut self, rotation: i32, ticket: TransitionTicket);

    /// Re-apply sizing and animation settings. Renderers that don't
    /// style themselves can ignore it.
    fn configure(&mut self, _options: &FlipOptions) {}
}

/// One flip in flight.
#[derive(Debug, Clone, Copy)]
struct PendingFlip {
    ticket: TransitionTicket,
    reverse: bool,
    prev_index: usize,
    next_index: usize,
}

/// The flip state machine: content list, accumulator, pending flight.
#[derive(Debug)]
pub struct FlipEngine<P> {
    store: ContentStore<P>,
    axis: Axis,
    rotation: i32,
    ticket_counter: u64,
    pending: Option<PendingFlip>,
    events: EventSender,
}

impl<P> FlipEngine<P> {
    pub fn new(panels: Vec<P>, index: usize, axis: Axis, events: EventSender) -> Self {
        Self {
            store: ContentStore::new(panels, index),
            axis,
            rotation: 0,
            ticket_counter: 0,
            pending: None,
            events,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Signed quarter-turn accumulator, monotonic per direction.
    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn size(&self) -> usize {
        self.store.len()
    }

    pub fn current_index(&self) -> usize {
        self.store.current_index()
    }

    /// Face currently pointing at the viewer.
    pub fn current_face(&self) -> Face {
        self.axis.current_face(self.rotation)
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Attach the displayed panel to the front-facing slot without
    /// animating. Used on mount and whenever the content at the
    /// displayed position changed in place.
    pub fn refresh_current<S: FlipSurface<P>>(&self, surface: &mut S) {
        if let Some(panel) = self.store.current_panel() {
            surface.attach(self.current_face(), panel);
        }
    }

    /// Start a flip to `target`. No-op when already displayed.
    ///
    /// Returns the ticket of the started transition so the host can
    /// match the completion signal.
    pub fn display_content<S: FlipSurface<P>>(
        &mut self,
        target: usize,
        reverse: bool,
        surface: &mut S,
    ) -> Option<TransitionTicket> {
        if target == self.store.current_index() {
            return None;
        }
        let panel = self.store.panel(target)?;

        let face = self.axis.next_face(self.rotation, reverse);
        surface.attach(face, panel);

        let prev_index = self.store.current_index();
        self.store.set_current(target);

        self.ticket_counter += 1;
        let ticket = TransitionTicket(self.ticket_counter);
        if let Some(superseded) = self.pending.replace(PendingFlip {
            ticket,
            reverse,
            prev_index,
            next_index: target,
        }) {
            debug!(
                "flip {} superseded by {} before completion",
                superseded.ticket.0, ticket.0
            );
        }
        self.events.emit(FlipEvent::Flipping {
            reverse,
            current_index: prev_index,
            next_index: target,
        });

        self.rotation += self.axis.rotation_step(reverse);
        debug!(
            "flip {}: {} -> {} via {:?}, accumulator {}",
            ticket.0, prev_index, target, face, self.rotation
        );
        surface.apply_rotation(self.rotation, ticket);
        Some(ticket)
    }

    /// Completion signal from the rendering collaborator.
    ///
    /// Returns whether the ticket matched the flight in progress. Stale
    /// tickets from superseded flips are ignored.
    pub fn complete_transition(&mut self, ticket: TransitionTicket) -> bool {
        match self.pending {
            Some(flight) if flight.ticket == ticket => {
                self.pending = None;
                self.events.emit(FlipEvent::Flipped {
                    reverse: flight.reverse,
                    prev_index: flight.prev_index,
                    current_index: flight.next_index,
                });
                true
            }
            _ => {
                warn!("ignoring stale transition completion {}", ticket.0);
                false
            }
        }
    }

    /// Drop any flight in progress. No completion can fire afterwards.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    pub fn next<S: FlipSurface<P>>(
        &mut self,
        reverse: bool,
        surface: &mut S,
    ) -> Option<TransitionTicket> {
        self.display_content(self.store.next_index(), reverse, surface)
    }

    pub fn prev<S: FlipSurface<P>>(
        &mut self,
        reverse: bool,
        surface: &mut S,
    ) -> Option<TransitionTicket> {
        self.display_content(self.store.prev_index(), reverse, surface)
    }

    pub fn jump<S: FlipSurface<P>>(
        &mut self,
        index: usize,
        reverse: bool,
        surface: &mut S,
    ) -> Option<TransitionTicket> {
        self.display_content(self.store.target_index(index), reverse, surface)
    }

    pub fn add<S: FlipSurface<P>>(&mut self, panel: P, index: Option<usize>, surface: &mut S) {
        let mutation = self.store.insert(panel, index);
        self.apply_refresh(mutation, surface);
        self.events.emit(FlipEvent::Added {
            index: mutation.index,
        });
    }

    pub fn remove<S: FlipSurface<P>>(&mut self, index: usize, surface: &mut S) {
        let mutation = self.store.remove(index);
        self.apply_refresh(mutation, surface);
        self.events.emit(FlipEvent::Removed {
            index: mutation.index,
        });
    }

    pub fn replace<S: FlipSurface<P>>(&mut self, panel: P, index: Option<usize>, surface: &mut S) {
        let mutation = self.store.replace(panel, index);
        self.apply_refresh(mutation, surface);
        self.events.emit(FlipEvent::Replaced {
            index: mutation.index,
        });
    }

    fn apply_refresh<S: FlipSurface<P>>(&self, mutation: Mutation, surface: &mut S) {
        if mutation.refresh_current {
            self.refresh_current(surface);
        }
    }

    /// Teardown: the panel list goes back to the caller, in order.
    pub fn into_panels(self) -> Vec<P> {
        self.store.into_panels()
    }
}
