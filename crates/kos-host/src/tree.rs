//! Render-side widget mirror
//!
//! Built entirely from `ToRender` messages. The only state this side
//! originates is each button's visible-pressed flag; every change to it is
//! reported back to the script side as `ToScript::SyncPressed`.

use std::collections::HashMap;

use log::{debug, warn};

use kos_core::communicate::Outbox;
use kos_core::{ToRender, ToScript, WidgetId, WidgetKind, WidgetSpec, WidgetStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonView {
    pub pressed_visible: bool,
    pub toggle: bool,
    pub exclusive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Box { children: Vec<WidgetId> },
    Label,
    Button(ButtonView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: WidgetId,
    pub parent: Option<WidgetId>,
    pub text: String,
    pub style: WidgetStyle,
    pub kind: NodeKind,
}

impl Node {
    fn from_spec(spec: WidgetSpec) -> Self {
        let kind = match spec.kind {
            WidgetKind::Box => NodeKind::Box {
                children: Vec::new(),
            },
            WidgetKind::Label => NodeKind::Label,
            WidgetKind::Button {
                pressed,
                toggle,
                exclusive,
            } => NodeKind::Button(ButtonView {
                pressed_visible: pressed,
                toggle,
                exclusive,
            }),
        };
        Node {
            id: spec.id,
            parent: spec.parent,
            text: spec.text,
            style: spec.style,
            kind,
        }
    }
}

#[derive(Debug, Default)]
pub struct RenderTree {
    nodes: HashMap<WidgetId, Node>,
    root: Option<WidgetId>,
}

impl RenderTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: WidgetId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn button(&self, id: WidgetId) -> Option<&ButtonView> {
        match &self.nodes.get(&id)?.kind {
            NodeKind::Button(view) => Some(view),
            _ => None,
        }
    }

    pub(crate) fn button_mut(&mut self, id: WidgetId) -> Option<&mut ButtonView> {
        match &mut self.nodes.get_mut(&id)?.kind {
            NodeKind::Button(view) => Some(view),
            _ => None,
        }
    }

    pub fn is_pressed_visible(&self, id: WidgetId) -> bool {
        self.button(id).is_some_and(|view| view.pressed_visible)
    }

    /// Apply one message from the script side.
    pub fn apply(&mut self, msg: ToRender, outbox: &Outbox<ToScript>) {
        match msg {
            ToRender::Spawn(spec) => self.spawn(spec),
            ToRender::SetText { id, text } => match self.nodes.get_mut(&id) {
                Some(node) => node.text = text,
                None => warn!("SetText for unknown widget {}", id),
            },
            ToRender::Configure {
                id,
                toggle,
                exclusive,
            } => match self.button_mut(id) {
                Some(view) => {
                    view.toggle = toggle;
                    view.exclusive = exclusive;
                }
                None => warn!("Configure for non-button widget {}", id),
            },
            ToRender::SetPressedVisible { id, on } => self.show_pressed(id, on, outbox),
        }
    }

    fn spawn(&mut self, spec: WidgetSpec) {
        let id = spec.id;
        match spec.parent {
            Some(parent) => match self.nodes.get_mut(&parent) {
                Some(Node {
                    kind: NodeKind::Box { children },
                    ..
                }) => children.push(id),
                _ => warn!("widget {} spawned under missing box {}", id, parent),
            },
            None => self.root = Some(id),
        }
        self.nodes.insert(id, Node::from_spec(spec));
    }

    /// Change a button's visible-pressed state on the render side's own
    /// initiative. The script side is told about the change, and pressing an
    /// exclusive button releases its siblings.
    pub fn set_pressed_visible(&mut self, id: WidgetId, on: bool, outbox: &Outbox<ToScript>) {
        if self.update_visible(id, on, outbox) {
            outbox.post(ToScript::SyncPressed { id, on });
        }
    }

    /// Show the pressed state the script side asked for. The script already
    /// holds that state, so only released siblings are reported back.
    fn show_pressed(&mut self, id: WidgetId, on: bool, outbox: &Outbox<ToScript>) {
        self.update_visible(id, on, outbox);
    }

    /// Returns whether the visible state changed.
    fn update_visible(&mut self, id: WidgetId, on: bool, outbox: &Outbox<ToScript>) -> bool {
        let Some(view) = self.button_mut(id) else {
            warn!("SetPressedVisible for non-button widget {}", id);
            return false;
        };
        if view.pressed_visible == on {
            return false;
        }
        view.pressed_visible = on;
        let exclusive = view.exclusive;
        debug!("{} visible-pressed = {}", id, on);

        if exclusive && on {
            if let Some(parent) = self.nodes.get(&id).and_then(|node| node.parent) {
                self.unpress_visible_all_but(parent, id, outbox);
            }
        }
        true
    }

    /// Release every button directly under `parent` except `leave`.
    pub fn unpress_visible_all_but(&mut self, parent: WidgetId, leave: WidgetId, outbox: &Outbox<ToScript>) {
        let siblings: Vec<WidgetId> = match self.nodes.get(&parent) {
            Some(Node {
                kind: NodeKind::Box { children },
                ..
            }) => children
                .iter()
                .copied()
                .filter(|child| *child != leave && self.button(*child).is_some())
                .collect(),
            _ => return,
        };
        for sibling in siblings {
            self.set_pressed_visible(sibling, false, outbox);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kos_core::{link, Gui, GuiConfig, Value};

    #[test]
    fn spawn_links_children_to_parent() {
        let (script, render) = link();
        let mut gui = Gui::new(GuiConfig::new(), script);
        let a = gui.add_label(gui.root(), "Alt").unwrap();
        let b = gui.add_checkbox(gui.root(), "RCS", true).unwrap();

        let mut tree = RenderTree::new();
        for msg in render.inbox.drain(16) {
            tree.apply(msg, &render.outbox);
        }

        assert_eq!(tree.root(), Some(gui.root()));
        assert_eq!(
            tree.node(gui.root()).map(|n| n.kind.clone()),
            Some(NodeKind::Box { children: vec![a, b] })
        );
        assert!(tree.is_pressed_visible(b));
        assert_eq!(tree.node(a).map(|n| n.text.as_str()), Some("Alt"));
    }

    #[test]
    fn unchanged_visible_state_posts_nothing() {
        let (script, render) = link();
        let mut gui = Gui::new(GuiConfig::new(), script);
        let b = gui.add_button(gui.root(), "Go").unwrap();
        let mut tree = RenderTree::new();
        for msg in render.inbox.drain(16) {
            tree.apply(msg, &render.outbox);
        }

        tree.set_pressed_visible(b, false, &render.outbox);
        assert_eq!(gui.sync().unwrap(), 0);
        tree.set_pressed_visible(b, true, &render.outbox);
        assert_eq!(gui.sync().unwrap(), 1);
        assert!(gui.button(b).unwrap().is_pressed());
    }

    #[test]
    fn script_press_reports_only_released_siblings() {
        let (script, render) = link();
        let mut gui = Gui::new(GuiConfig::new(), script);
        let a = gui.add_radio_button(gui.root(), "Up", true).unwrap();
        let b = gui.add_radio_button(gui.root(), "Down", false).unwrap();
        gui.set_suffix(b, "PRESSED", Value::from(true)).unwrap();

        let mut tree = RenderTree::new();
        for msg in render.inbox.drain(16) {
            tree.apply(msg, &render.outbox);
        }

        assert!(tree.is_pressed_visible(b));
        assert!(!tree.is_pressed_visible(a));
        assert_eq!(gui.sync().unwrap(), 1);
        assert!(!gui.button(a).unwrap().is_pressed());
        assert_eq!(render.inbox.pending(), 0);
    }
}
