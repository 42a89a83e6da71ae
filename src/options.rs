//! Flip box configuration.
//!
//! Options merge in layers: defaults, then whatever the caller passes
//! at construction, then later partial patches. The axis and box size
//! are locked once the component exists - the face geometry is built
//! around them - so patches to those fields are dropped after init.

use serde::{Deserialize, Serialize};

/// Full option set with the stock defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipOptions {
    /// Flip around the horizontal edge (top/bottom faces) instead of
    /// the vertical one. Locked after init.
    pub vertical: bool,
    /// Box width in points. Locked after init.
    pub width: f32,
    /// Box height in points. Locked after init.
    pub height: f32,
    pub animation_duration_ms: u64,
    /// CSS-style easing name: linear, ease, ease-in, ease-out,
    /// ease-in-out.
    pub animation_easing: String,
    pub autoplay: bool,
    pub autoplay_reverse: bool,
    pub autoplay_wait_ms: u64,
    pub autoplay_pause_on_hover: bool,
    /// Panel displayed at construction, clamped into bounds.
    pub index: usize,
}

impl Default for FlipOptions {
    fn default() -> Self {
        Self {
            vertical: false,
            width: 400.0,
            height: 300.0,
            animation_duration_ms: 400,
            animation_easing: "ease".to_string(),
            autoplay: false,
            autoplay_reverse: false,
            autoplay_wait_ms: 3000,
            autoplay_pause_on_hover: false,
            index: 0,
        }
    }
}

/// Partial options for post-init reconfiguration. Unset fields keep
/// their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipOptionsPatch {
    pub vertical: Option<bool>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub animation_duration_ms: Option<u64>,
    pub animation_easing: Option<String>,
    pub autoplay: Option<bool>,
    pub autoplay_reverse: Option<bool>,
    pub autoplay_wait_ms: Option<u64>,
    pub autoplay_pause_on_hover: Option<bool>,
}

impl FlipOptions {
    /// Merge a patch. With `locked`, axis and size fields are ignored.
    pub fn apply(&mut self, patch: &FlipOptionsPatch, locked: bool) {
        if !locked {
            if let Some(vertical) = patch.vertical {
                self.vertical = vertical;
            }
            if let Some(width) = patch.width {
                self.width = width;
            }
            if let Some(height) = patch.height {
                self.height = height;
            }
        }
        if let Some(ms) = patch.animation_duration_ms {
            self.animation_duration_ms = ms;
        }
        if let Some(ref easing) = patch.animation_easing {
            self.animation_easing = easing.clone();
        }
        if let Some(autoplay) = patch.autoplay {
            self.autoplay = autoplay;
        }
        if let Some(reverse) = patch.autoplay_reverse {
            self.autoplay_reverse = reverse;
        }
        if let Some(ms) = patch.autoplay_wait_ms {
            self.autoplay_wait_ms = ms;
        }
        if let Some(pause) = patch.autoplay_pause_on_hover {
            self.autoplay_pause_on_hover = pause;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlocked_patch_applies_everything() {
        let mut options = FlipOptions::default();
        let patch = FlipOptionsPatch {
            vertical: Some(true),
            width: Some(200.0),
            autoplay: Some(true),
            ..Default::default()
        };
        options.apply(&patch, false);
        assert!(options.vertical);
        assert_eq!(options.width, 200.0);
        assert!(options.autoplay);
        // Untouched fields keep defaults
        assert_eq!(options.height, 300.0);
    }

    #[test]
    fn test_locked_patch_skips_axis_and_size() {
        let mut options = FlipOptions::default();
        let patch = FlipOptionsPatch {
            vertical: Some(true),
            width: Some(10.0),
            height: Some(10.0),
            animation_duration_ms: Some(100),
            ..Default::default()
        };
        options.apply(&patch, true);
        assert!(!options.vertical);
        assert_eq!(options.width, 400.0);
        assert_eq!(options.height, 300.0);
        assert_eq!(options.animation_duration_ms, 100);
    }

    #[test]
    fn test_json_round_trip_with_defaults() {
        // A sparse config file fills in defaults
        let options: FlipOptions = serde_json::from_str(r#"{"autoplay": true}"#).unwrap();
        assert!(options.autoplay);
        assert_eq!(options.animation_easing, "ease");
        assert_eq!(options.autoplay_wait_ms, 3000);
    }
}
