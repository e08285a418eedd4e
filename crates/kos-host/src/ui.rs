//! Immediate-mode drawing surface
//!
//! The render loop redraws the whole tree every frame through this trait,
//! the way a host engine's immediate-mode GUI is driven. `ScriptedUi` is a
//! headless implementation whose user input is queued up front.

use std::collections::HashSet;

use log::debug;

use kos_core::{WidgetId, WidgetStyle};

pub trait ImmediateUi {
    fn begin_frame(&mut self) {}

    fn end_frame(&mut self) {}

    fn begin_box(&mut self, _id: WidgetId) {}

    fn end_box(&mut self, _id: WidgetId) {}

    fn label(&mut self, id: WidgetId, text: &str, style: WidgetStyle);

    /// Draw a pressable element currently showing `on`. Returns the state
    /// after this frame's input: `!on` if the user clicked it, else `on`.
    fn toggle(&mut self, id: WidgetId, on: bool, text: &str, style: WidgetStyle) -> bool;
}

/// One element drawn during the last frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Label {
        id: WidgetId,
        text: String,
    },
    Toggle {
        id: WidgetId,
        on: bool,
        text: String,
        style: WidgetStyle,
    },
}

/// Headless UI: clicks are scheduled with `click` and consumed by the next
/// frame that draws the widget.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    clicks: HashSet<WidgetId>,
    drawn: Vec<DrawCall>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(&mut self, id: WidgetId) {
        self.clicks.insert(id);
    }

    /// Elements drawn by the most recent frame, in draw order
    pub fn drawn(&self) -> &[DrawCall] {
        &self.drawn
    }
}

impl ImmediateUi for ScriptedUi {
    fn begin_frame(&mut self) {
        self.drawn.clear();
    }

    fn end_frame(&mut self) {
        for id in self.clicks.drain() {
            debug!("click on {} hit nothing drawn this frame", id);
        }
    }

    fn label(&mut self, id: WidgetId, text: &str, _style: WidgetStyle) {
        self.drawn.push(DrawCall::Label {
            id,
            text: text.to_string(),
        });
    }

    fn toggle(&mut self, id: WidgetId, on: bool, text: &str, style: WidgetStyle) -> bool {
        self.drawn.push(DrawCall::Toggle {
            id,
            on,
            text: text.to_string(),
            style,
        });
        if self.clicks.remove(&id) {
            !on
        } else {
            on
        }
    }
}
