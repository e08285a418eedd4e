//! Per-frame render loop
//!
//! Each frame applies at most `frame_message_budget` queued script changes,
//! then redraws the tree. Drawing is where user input enters: a click
//! changes visible state here and is posted to the script side.

use log::{debug, trace};

use kos_core::{GuiConfig, RenderPort, ToScript, WidgetId};

use crate::tree::{NodeKind, RenderTree};
use crate::ui::ImmediateUi;

/// What one frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frame: u64,
    /// Script messages applied before drawing
    pub applied: usize,
    /// Script messages left queued for later frames
    pub deferred: usize,
}

#[derive(Debug)]
pub struct RenderLoop {
    port: RenderPort,
    tree: RenderTree,
    budget: usize,
    frames: u64,
}

impl RenderLoop {
    pub fn new(config: &GuiConfig, port: RenderPort) -> Self {
        RenderLoop {
            port,
            tree: RenderTree::new(),
            budget: config.frame_message_budget,
            frames: 0,
        }
    }

    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply queued script changes, up to the per-frame budget
    pub fn apply_pending(&mut self) -> usize {
        let batch = self.port.inbox.drain(self.budget);
        let applied = batch.len();
        for msg in batch {
            trace!("apply {:?}", msg);
            self.tree.apply(msg, &self.port.outbox);
        }
        applied
    }

    pub fn frame<U: ImmediateUi>(&mut self, ui: &mut U) -> FrameStats {
        self.frames += 1;
        let applied = self.apply_pending();

        ui.begin_frame();
        if let Some(root) = self.tree.root() {
            self.draw(root, ui);
        }
        ui.end_frame();

        let stats = FrameStats {
            frame: self.frames,
            applied,
            deferred: self.port.inbox.pending(),
        };
        if stats.deferred > 0 {
            debug!(
                "frame {}: {} messages deferred past budget of {}",
                stats.frame, stats.deferred, self.budget
            );
        }
        stats
    }

    fn draw<U: ImmediateUi>(&mut self, id: WidgetId, ui: &mut U) {
        let Some(node) = self.tree.node(id) else {
            return;
        };
        match &node.kind {
            NodeKind::Box { children } => {
                let children = children.clone();
                ui.begin_box(id);
                for child in children {
                    self.draw(child, ui);
                }
                ui.end_box(id);
            }
            NodeKind::Label => ui.label(id, &node.text, node.style),
            NodeKind::Button(_) => self.draw_button(id, ui),
        }
    }

    fn draw_button<U: ImmediateUi>(&mut self, id: WidgetId, ui: &mut U) {
        let Some(node) = self.tree.node(id) else {
            return;
        };
        let NodeKind::Button(view) = node.kind else {
            return;
        };
        let parent = node.parent;
        let clicked = ui.toggle(id, view.pressed_visible, &node.text, node.style);
        let outbox = &self.port.outbox;

        if view.toggle {
            if view.exclusive {
                // An exclusive toggle can't be released by clicking it.
                if !clicked {
                    return;
                }
                if let Some(parent) = parent {
                    self.tree.unpress_visible_all_but(parent, id, outbox);
                }
            }
            if clicked != view.pressed_visible {
                if let Some(view) = self.tree.button_mut(id) {
                    view.pressed_visible = clicked;
                }
                outbox.post(ToScript::Toggled { id, on: clicked });
            }
        } else if clicked && !view.pressed_visible {
            if let Some(view) = self.tree.button_mut(id) {
                view.pressed_visible = true;
            }
            outbox.post(ToScript::Clicked { id });
        }
    }
}
