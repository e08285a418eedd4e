//! Script-side widgets
//!
//! Widgets live in a `Gui` arena and are addressed by `WidgetId`. The types
//! here hold the logical, script-owned half of each widget; the render side
//! keeps its own mirror built from `WidgetSpec`s.

pub mod button;
pub mod container;
pub mod label;

use std::fmt;

use crate::error::KosResult;
use crate::structure::Structure;
use crate::value::Value;

pub use button::Button;
pub use container::Container;
pub use label::Label;

/// Index of a widget in its `Gui`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u32);

impl WidgetId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named look of a widget, resolved by the host's skin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetStyle(&'static str);

impl WidgetStyle {
    pub const BOX: WidgetStyle = WidgetStyle("box");
    pub const LABEL: WidgetStyle = WidgetStyle("label");
    pub const BUTTON: WidgetStyle = WidgetStyle("button");
    pub const TOGGLE: WidgetStyle = WidgetStyle("toggle");

    const KNOWN: [WidgetStyle; 4] = [Self::BOX, Self::LABEL, Self::BUTTON, Self::TOGGLE];

    pub fn named(name: &str) -> Option<WidgetStyle> {
        Self::KNOWN
            .iter()
            .copied()
            .find(|style| style.0.eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        self.0
    }
}

/// Kind-specific part of a `WidgetSpec`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Box,
    Label,
    Button {
        pressed: bool,
        toggle: bool,
        exclusive: bool,
    },
}

/// Everything the render side needs to mirror a new widget
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSpec {
    pub id: WidgetId,
    pub parent: Option<WidgetId>,
    pub text: String,
    pub style: WidgetStyle,
    pub kind: WidgetKind,
}

#[derive(Debug)]
pub enum Widget {
    Box(Container),
    Label(Label),
    Button(Button),
}

impl Widget {
    pub fn id(&self) -> WidgetId {
        match self {
            Widget::Box(b) => b.id(),
            Widget::Label(l) => l.id(),
            Widget::Button(b) => b.label().id(),
        }
    }

    pub fn parent(&self) -> Option<WidgetId> {
        match self {
            Widget::Box(b) => b.parent(),
            Widget::Label(l) => l.parent(),
            Widget::Button(b) => b.label().parent(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Widget::Box(_) => Container::KOS_NAME,
            Widget::Label(_) => Label::KOS_NAME,
            Widget::Button(_) => Button::KOS_NAME,
        }
    }

    pub fn spec(&self) -> WidgetSpec {
        match self {
            Widget::Box(b) => b.spec(),
            Widget::Label(l) => l.spec(),
            Widget::Button(b) => b.spec(),
        }
    }

    pub fn get_suffix(&mut self, name: &str) -> KosResult<Value> {
        match self {
            Widget::Box(b) => b.get_suffix(name),
            Widget::Label(l) => l.get_suffix(name),
            Widget::Button(b) => b.get_suffix(name),
        }
    }

    pub fn set_suffix(&mut self, name: &str, value: Value) -> KosResult<()> {
        match self {
            Widget::Box(b) => b.set_suffix(name, value),
            Widget::Label(l) => l.set_suffix(name, value),
            Widget::Button(b) => b.set_suffix(name, value),
        }
    }

    pub fn call_suffix(&mut self, name: &str, args: &[Value]) -> KosResult<Value> {
        match self {
            Widget::Box(b) => b.call_suffix(name, args),
            Widget::Label(l) => l.call_suffix(name, args),
            Widget::Button(b) => b.call_suffix(name, args),
        }
    }
}

impl fmt::Display for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Widget::Box(b) => fmt::Display::fmt(b, f),
            Widget::Label(l) => fmt::Display::fmt(l, f),
            Widget::Button(b) => fmt::Display::fmt(b, f),
        }
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with "...".
pub(crate) fn ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max < 3 {
        return text.chars().take(max).collect();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ellipsis_keeps_short_text() {
        assert_eq!(ellipsis("Launch", 10), "Launch");
        assert_eq!(ellipsis("0123456789", 10), "0123456789");
    }

    #[test]
    fn ellipsis_cuts_long_text_to_max() {
        let cut = ellipsis("Stage separation", 10);
        assert_eq!(cut, "Stage s...");
        assert_eq!(cut.chars().count(), 10);
        assert_eq!(ellipsis("abcdef", 2), "ab");
    }

    #[test]
    fn style_lookup_ignores_case() {
        assert_eq!(WidgetStyle::named("Toggle"), Some(WidgetStyle::TOGGLE));
        assert_eq!(WidgetStyle::named("slider"), None);
    }
}
