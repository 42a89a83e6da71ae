//! The flip box component: engine + options + autoplay bundled behind
//! the public surface.
//!
//! The host owns the rendering collaborator and passes it into every
//! call that can touch a face slot; the component never holds onto it.
//! Autoplay is pumped from the host's update loop via [`FlipBox::tick`].

use anyhow::{Result, bail};
use log::{debug, info};
use std::time::Duration;

use crate::core::{
    Autoplay, Axis, EventSender, FlipEngine, FlipEvent, FlipSurface, TransitionTicket,
};
use crate::options::{FlipOptions, FlipOptionsPatch};

/// A flip box attached to a host-supplied panel list.
#[derive(Debug)]
pub struct FlipBox<P> {
    engine: FlipEngine<P>,
    options: FlipOptions,
    autoplay: Autoplay,
    events: EventSender,
}

impl<P> FlipBox<P> {
    /// Build the component around the container's initial panels.
    ///
    /// At least one panel is required - every navigation operation
    /// indexes into the list, so an empty box is a configuration error,
    /// not a runtime state.
    pub fn new(panels: Vec<P>, options: FlipOptions, events: EventSender) -> Result<Self> {
        if panels.is_empty() {
            bail!("flip box requires at least one initial panel");
        }
        let axis = if options.vertical {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };
        let engine = FlipEngine::new(panels, options.index, axis, events.clone());

        let mut component = Self {
            engine,
            options,
            autoplay: Autoplay::new(),
            events,
        };
        component.restart_autoplay();
        info!(
            "flip box created: {} panels, axis {:?}, starting at {}",
            component.engine.size(),
            axis,
            component.engine.current_index()
        );
        component.events.emit(FlipEvent::Created);
        Ok(component)
    }

    /// Push the initial panel and geometry to a freshly built surface.
    pub fn mount<S: FlipSurface<P>>(&self, surface: &mut S) {
        surface.configure(&self.options);
        self.engine.refresh_current(surface);
    }

    pub fn options(&self) -> &FlipOptions {
        &self.options
    }

    /// Merge a partial reconfiguration. Axis and size are locked.
    pub fn config(&mut self, patch: &FlipOptionsPatch) {
        self.options.apply(patch, true);
    }

    /// Re-apply the current options to the surface and restart
    /// autoplay from a fresh interval.
    pub fn update<S: FlipSurface<P>>(&mut self, surface: &mut S) {
        surface.configure(&self.options);
        self.restart_autoplay();
        self.events.emit(FlipEvent::Updated);
    }

    /// Tear down: stop the timer, invalidate any flight in progress,
    /// and hand the panel list back in order.
    pub fn destroy(mut self) -> Vec<P> {
        self.autoplay.stop();
        self.engine.cancel_pending();
        self.events.emit(FlipEvent::Destroyed);
        info!("flip box destroyed, returning {} panels", self.engine.size());
        self.engine.into_panels()
    }

    pub fn size(&self) -> usize {
        self.engine.size()
    }

    pub fn current(&self) -> usize {
        self.engine.current_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.engine.is_transitioning()
    }

    pub fn next<S: FlipSurface<P>>(
        &mut self,
        reverse: bool,
        surface: &mut S,
    ) -> Option<TransitionTicket> {
        self.engine.next(reverse, surface)
    }

    pub fn prev<S: FlipSurface<P>>(
        &mut self,
        reverse: bool,
        surface: &mut S,
    ) -> Option<TransitionTicket> {
        self.engine.prev(reverse, surface)
    }

    pub fn jump<S: FlipSurface<P>>(
        &mut self,
        index: usize,
        reverse: bool,
        surface: &mut S,
    ) -> Option<TransitionTicket> {
        self.engine.jump(index, reverse, surface)
    }

    pub fn add<S: FlipSurface<P>>(&mut self, panel: P, index: Option<usize>, surface: &mut S) {
        self.engine.add(panel, index, surface);
    }

    pub fn remove<S: FlipSurface<P>>(&mut self, index: usize, surface: &mut S) {
        self.engine.remove(index, surface);
    }

    pub fn replace<S: FlipSurface<P>>(&mut self, panel: P, index: Option<usize>, surface: &mut S) {
        self.engine.replace(panel, index, surface);
    }

    /// Completion signal from the rendering collaborator.
    pub fn complete_transition(&mut self, ticket: TransitionTicket) -> bool {
        self.engine.complete_transition(ticket)
    }

    /// Autoplay pump, called from the host update loop. Returns true
    /// when an automatic advance fired.
    pub fn tick<S: FlipSurface<P>>(&mut self, surface: &mut S) -> bool {
        if let Some(reverse) = self.autoplay.tick() {
            debug!("autoplay advance, reverse={reverse}");
            self.next(reverse, surface);
            true
        } else {
            false
        }
    }

    /// Pause/resume hook for hover and window-focus collaborators.
    ///
    /// Always cancels the pending interval first, so repeated enables
    /// never stack timers. The scheduler itself keeps no record of why
    /// it was toggled.
    pub fn toggle_autoplay(&mut self, enabled: bool) {
        self.autoplay.stop();
        if enabled {
            self.autoplay.start(
                Duration::from_millis(self.options.autoplay_wait_ms),
                self.options.autoplay_reverse,
            );
        }
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    fn restart_autoplay(&mut self) {
        self.toggle_autoplay(self.options.autoplay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event_channel;
    use crate::core::Face;
    use std::thread::sleep;

    #[derive(Default)]
    struct RecordingSurface {
        attached: Vec<(Face, &'static str)>,
        configured: usize,
        rotations: Vec<i32>,
    }

    impl FlipSurface<&'static str> for RecordingSurface {
        fn attach(&mut self, face: Face, panel: &&'static str) {
            self.attached.push((face, *panel));
        }

        fn apply_rotation(&mut self, rotation: i32, _ticket: TransitionTicket) {
            self.rotations.push(rotation);
        }

        fn configure(&mut self, _options: &FlipOptions) {
            self.configured += 1;
        }
    }

    fn flipbox(options: FlipOptions) -> FlipBox<&'static str> {
        FlipBox::new(vec!["a", "b", "c"], options, EventSender::dummy()).unwrap()
    }

    #[test]
    fn test_rejects_empty_panel_list() {
        let result: Result<FlipBox<&'static str>> =
            FlipBox::new(vec![], FlipOptions::default(), EventSender::dummy());
        assert!(result.is_err());
    }

    #[test]
    fn test_created_event_and_initial_index() {
        let (tx, rx) = event_channel();
        let options = FlipOptions {
            index: 7,
            ..Default::default()
        };
        let fb = FlipBox::new(vec!["a", "b", "c"], options, tx).unwrap();
        assert_eq!(fb.current(), 2);
        assert_eq!(rx.try_recv(), Ok(FlipEvent::Created));
    }

    #[test]
    fn test_mount_attaches_front_panel() {
        let fb = flipbox(FlipOptions {
            index: 1,
            ..Default::default()
        });
        let mut s = RecordingSurface::default();
        fb.mount(&mut s);
        assert_eq!(s.configured, 1);
        assert_eq!(s.attached, vec![(Face::Front, "b")]);
    }

    #[test]
    fn test_config_respects_locked_fields() {
        let mut fb = flipbox(FlipOptions::default());
        fb.config(&FlipOptionsPatch {
            vertical: Some(true),
            width: Some(1.0),
            autoplay_wait_ms: Some(50),
            ..Default::default()
        });
        assert!(!fb.options().vertical);
        assert_eq!(fb.options().width, 400.0);
        assert_eq!(fb.options().autoplay_wait_ms, 50);
    }

    #[test]
    fn test_update_reconfigures_and_emits() {
        let (tx, rx) = event_channel();
        let mut fb = FlipBox::new(vec!["a", "b"], FlipOptions::default(), tx).unwrap();
        let mut s = RecordingSurface::default();
        while rx.try_recv().is_ok() {}
        fb.update(&mut s);
        assert_eq!(s.configured, 1);
        assert_eq!(rx.try_recv(), Ok(FlipEvent::Updated));
    }

    #[test]
    fn test_autoplay_fires_exactly_once_per_interval() {
        let mut fb = flipbox(FlipOptions {
            autoplay: true,
            autoplay_wait_ms: 10,
            ..Default::default()
        });
        let mut s = RecordingSurface::default();
        assert!(fb.autoplay_running());

        // Before the interval: nothing
        assert!(!fb.tick(&mut s));
        sleep(Duration::from_millis(15));
        assert!(fb.tick(&mut s));
        assert_eq!(fb.current(), 1);
        // Immediately after firing: re-armed, not due
        assert!(!fb.tick(&mut s));
    }

    #[test]
    fn test_autoplay_stop_guarantees_silence() {
        let mut fb = flipbox(FlipOptions {
            autoplay: true,
            autoplay_wait_ms: 5,
            ..Default::default()
        });
        let mut s = RecordingSurface::default();
        fb.toggle_autoplay(false);
        sleep(Duration::from_millis(10));
        assert!(!fb.tick(&mut s));
        assert_eq!(fb.current(), 0);
    }

    #[test]
    fn test_autoplay_reverse_direction() {
        let mut fb = flipbox(FlipOptions {
            autoplay: true,
            autoplay_reverse: true,
            autoplay_wait_ms: 5,
            ..Default::default()
        });
        let mut s = RecordingSurface::default();
        sleep(Duration::from_millis(10));
        assert!(fb.tick(&mut s));
        assert_eq!(fb.current(), 1);
        // Reverse advance rotates the other way
        assert_eq!(s.rotations, vec![1]);
    }

    #[test]
    fn test_toggle_autoplay_arms_and_disarms() {
        let mut fb = flipbox(FlipOptions::default());
        assert!(!fb.autoplay_running());
        // The host decides policy; an explicit enable arms regardless
        // of the configured default
        fb.toggle_autoplay(true);
        assert!(fb.autoplay_running());
        fb.toggle_autoplay(false);
        assert!(!fb.autoplay_running());
    }

    #[test]
    fn test_destroy_returns_panels_in_order() {
        let (tx, rx) = event_channel();
        let mut fb = FlipBox::new(vec!["a", "b", "c"], FlipOptions::default(), tx).unwrap();
        let mut s = RecordingSurface::default();
        fb.add("d", Some(1), &mut s);
        while rx.try_recv().is_ok() {}

        let panels = fb.destroy();
        assert_eq!(panels, vec!["a", "d", "b", "c"]);
        assert_eq!(rx.try_recv(), Ok(FlipEvent::Destroyed));
    }

    #[test]
    fn test_destroy_invalidates_pending_completion() {
        let mut fb = flipbox(FlipOptions::default());
        let mut s = RecordingSurface::default();
        let ticket = fb.next(false, &mut s).unwrap();
        assert!(fb.is_transitioning());
        // Teardown drops the flight; the ticket can never complete
        let _ = ticket;
        let panels = fb.destroy();
        assert_eq!(panels.len(), 3);
    }
}
