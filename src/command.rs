//! Command surface: the attribute-style dispatcher.
//!
//! Hosts that drive the flip box through a single entry point (remote
//! control, scripting, UI action tables) send [`Command`] values
//! instead of calling methods. `Destroy` consumes the component, so
//! dispatch works on an `Option` slot the same way a host would store
//! the component - emptied on teardown, queries answered with
//! [`Reply::None`] once it is gone.

use log::warn;

use crate::component::FlipBox;
use crate::core::FlipSurface;
use crate::options::FlipOptionsPatch;

/// Everything the public command surface can ask for.
#[derive(Debug, Clone)]
pub enum Command<P> {
    /// Merge partial options (axis/size locked after init).
    Config(FlipOptionsPatch),
    /// Re-apply config and restart autoplay.
    Update,
    /// Tear down and return the panels.
    Destroy,
    Next { reverse: bool },
    Prev { reverse: bool },
    Jump { index: usize, reverse: bool },
    Add { panel: P, index: Option<usize> },
    Remove { index: usize },
    Replace { panel: P, index: Option<usize> },
    /// Query the panel count.
    Size,
    /// Query the displayed index.
    Current,
}

/// Dispatch result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<P> {
    None,
    Size(usize),
    Current(usize),
    /// Panels returned by `Destroy`, in list order.
    Panels(Vec<P>),
}

/// Run one command against the component slot.
pub fn dispatch<P, S: FlipSurface<P>>(
    slot: &mut Option<FlipBox<P>>,
    command: Command<P>,
    surface: &mut S,
) -> Reply<P> {
    let Some(flipbox) = slot.as_mut() else {
        warn!("command on a destroyed flip box ignored");
        return Reply::None;
    };
    match command {
        Command::Config(patch) => {
            flipbox.config(&patch);
            Reply::None
        }
        Command::Update => {
            flipbox.update(surface);
            Reply::None
        }
        Command::Destroy => match slot.take() {
            Some(flipbox) => Reply::Panels(flipbox.destroy()),
            None => Reply::None,
        },
        Command::Next { reverse } => {
            let _ = flipbox.next(reverse, surface);
            Reply::None
        }
        Command::Prev { reverse } => {
            let _ = flipbox.prev(reverse, surface);
            Reply::None
        }
        Command::Jump { index, reverse } => {
            let _ = flipbox.jump(index, reverse, surface);
            Reply::None
        }
        Command::Add { panel, index } => {
            flipbox.add(panel, index, surface);
            Reply::None
        }
        Command::Remove { index } => {
            flipbox.remove(index, surface);
            Reply::None
        }
        Command::Replace { panel, index } => {
            flipbox.replace(panel, index, surface);
            Reply::None
        }
        Command::Size => Reply::Size(flipbox.size()),
        Command::Current => Reply::Current(flipbox.current()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventSender, Face, TransitionTicket};
    use crate::options::FlipOptions;

    struct NullSurface;

    impl FlipSurface<&'static str> for NullSurface {
        fn attach(&mut self, _face: Face, _panel: &&'static str) {}
        fn apply_rotation(&mut self, _rotation: i32, _ticket: TransitionTicket) {}
    }

    fn slot() -> Option<FlipBox<&'static str>> {
        Some(FlipBox::new(vec!["a", "b", "c"], FlipOptions::default(), EventSender::dummy()).unwrap())
    }

    #[test]
    fn test_queries() {
        let mut slot = slot();
        let mut s = NullSurface;
        assert_eq!(dispatch(&mut slot, Command::Size, &mut s), Reply::Size(3));
        assert_eq!(
            dispatch(&mut slot, Command::Current, &mut s),
            Reply::Current(0)
        );
    }

    #[test]
    fn test_navigation_and_mutation() {
        let mut slot = slot();
        let mut s = NullSurface;
        dispatch(&mut slot, Command::Next { reverse: false }, &mut s);
        assert_eq!(
            dispatch(&mut slot, Command::Current, &mut s),
            Reply::Current(1)
        );
        dispatch(
            &mut slot,
            Command::Add {
                panel: "d",
                index: None,
            },
            &mut s,
        );
        assert_eq!(dispatch(&mut slot, Command::Size, &mut s), Reply::Size(4));
        dispatch(&mut slot, Command::Remove { index: 3 }, &mut s);
        assert_eq!(dispatch(&mut slot, Command::Size, &mut s), Reply::Size(3));
    }

    #[test]
    fn test_destroy_empties_slot_and_returns_panels() {
        let mut slot = slot();
        let mut s = NullSurface;
        let reply = dispatch(&mut slot, Command::Destroy, &mut s);
        assert_eq!(reply, Reply::Panels(vec!["a", "b", "c"]));
        assert!(slot.is_none());
        // Further commands are ignored
        assert_eq!(
            dispatch(&mut slot, Command::Next { reverse: false }, &mut s),
            Reply::None
        );
    }

    #[test]
    fn test_config_via_command() {
        let mut slot = slot();
        let mut s = NullSurface;
        dispatch(
            &mut slot,
            Command::Config(FlipOptionsPatch {
                autoplay_wait_ms: Some(1234),
                ..Default::default()
            }),
            &mut s,
        );
        assert_eq!(slot.as_ref().unwrap().options().autoplay_wait_ms, 1234);
    }
}
