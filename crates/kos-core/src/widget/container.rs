//! Box container holding an ordered list of child widgets.
//!
//! Adding children needs the owning `Gui` (it allocates ids), so the
//! `ADD*` suffixes are resolved there; this type only tracks membership.

use std::fmt;
use std::sync::OnceLock;

use crate::structure::{Structure, SuffixTable};

use super::{WidgetId, WidgetKind, WidgetSpec, WidgetStyle};

#[derive(Debug)]
pub struct Container {
    id: WidgetId,
    parent: Option<WidgetId>,
    style: WidgetStyle,
    children: Vec<WidgetId>,
}

impl Container {
    pub(crate) fn new(id: WidgetId, parent: Option<WidgetId>) -> Self {
        Container {
            id,
            parent,
            style: WidgetStyle::BOX,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// Resolve a style name for a child; unknown names inherit the box style.
    pub fn find_style(&self, name: &str) -> WidgetStyle {
        WidgetStyle::named(name).unwrap_or(self.style)
    }

    pub(crate) fn push_child(&mut self, child: WidgetId) {
        self.children.push(child);
    }

    pub(crate) fn spec(&self) -> WidgetSpec {
        WidgetSpec {
            id: self.id,
            parent: self.parent,
            text: String::new(),
            style: self.style,
            kind: WidgetKind::Box,
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BOX({} widgets)", self.children.len())
    }
}

impl Structure for Container {
    const KOS_NAME: &'static str = "Box";
    const INHERITANCE: &'static [&'static str] = &["Box", "Widget", "Structure"];

    fn suffix_table() -> &'static SuffixTable<Self> {
        static TABLE: OnceLock<SuffixTable<Container>> = OnceLock::new();
        TABLE.get_or_init(SuffixTable::new)
    }
}
