//! GUI Configuration
//!
//! Defines limits for a script GUI and the render loop attached to it.
//! Configuration specifies constraints only; enforcement is handled by
//! `Gui` and the host's render loop.

use serde::Deserialize;

/// GUI Configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    /// Maximum number of widgets in one GUI, root box included
    pub max_widgets: usize,

    /// Maximum number of queued messages the render side applies per frame
    pub frame_message_budget: usize,

    /// Length at which widget text is ellipsised in `Display` output
    pub text_ellipsis: usize,
}

impl Default for GuiConfig {
    fn default() -> Self {
        GuiConfig {
            max_widgets: 1024,
            frame_message_budget: 256,
            text_ellipsis: 10,
        }
    }
}

impl GuiConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }
}
