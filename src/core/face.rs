//! Face mapping for the rotating box.
//!
//! The box has four physical faces per axis. Which one points at the
//! viewer is derived from the signed quarter-turn accumulator, wrapped
//! into a four-entry table. The accumulator itself is never wrapped -
//! it keeps growing in whichever direction the box spins.

use serde::{Deserialize, Serialize};

/// Rotation axis, fixed for the lifetime of a flip box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Rotate around the vertical edge (faces pass left/right).
    #[default]
    Horizontal,
    /// Rotate around the horizontal edge (faces pass top/bottom).
    Vertical,
}

/// One of the box sides that can hold a panel.
///
/// Horizontal boxes use Front/Left/Back/Right, vertical ones
/// Front/Bottom/Back/Top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

/// Faces in the order a horizontal box cycles through them as the
/// accumulator increases.
const HORIZONTAL_FACES: [Face; 4] = [Face::Front, Face::Left, Face::Back, Face::Right];

/// Same for a vertical box.
const VERTICAL_FACES: [Face; 4] = [Face::Front, Face::Bottom, Face::Back, Face::Top];

/// Wrap a signed quarter-turn count into a table index.
///
/// Explicit double-modulo so negative accumulators wrap into [0, 3]
/// regardless of the sign convention of `%`.
fn wrap_quarter(rotation: i32) -> usize {
    ((rotation % 4 + 4) % 4) as usize
}

impl Axis {
    /// Face cycle table for this axis.
    fn faces(self) -> &'static [Face; 4] {
        match self {
            Axis::Horizontal => &HORIZONTAL_FACES,
            Axis::Vertical => &VERTICAL_FACES,
        }
    }

    /// Face currently pointing at the viewer for a given accumulator.
    pub fn current_face(self, rotation: i32) -> Face {
        self.faces()[wrap_quarter(rotation)]
    }

    /// Signed accumulator delta for one flip.
    ///
    /// The two axes rotate in opposite accumulator directions so the
    /// visual direction stays consistent: a forward flip decrements on
    /// the horizontal axis and increments on the vertical one.
    pub fn rotation_step(self, reverse: bool) -> i32 {
        let step = if reverse { -1 } else { 1 };
        match self {
            Axis::Horizontal => -step,
            Axis::Vertical => step,
        }
    }

    /// Face the next flip will land on, i.e. the slot that must receive
    /// the incoming panel before the rotation starts.
    pub fn next_face(self, rotation: i32, reverse: bool) -> Face {
        self.current_face(rotation + self.rotation_step(reverse))
    }
}
