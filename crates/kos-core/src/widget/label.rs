//! Text label; also the text-bearing base of `Button`.

use std::fmt;
use std::sync::OnceLock;

use crate::communicate::{Outbox, ToRender};
use crate::error::KosResult;
use crate::structure::{Structure, Suffix, SuffixTable};
use crate::value::Value;

use super::{ellipsis, WidgetId, WidgetKind, WidgetSpec, WidgetStyle};

#[derive(Debug)]
pub struct Label {
    id: WidgetId,
    parent: Option<WidgetId>,
    text: String,
    style: WidgetStyle,
    ellipsis: usize,
    outbox: Outbox<ToRender>,
}

impl Label {
    pub(crate) fn new(
        id: WidgetId,
        parent: Option<WidgetId>,
        text: impl Into<String>,
        style: WidgetStyle,
        ellipsis: usize,
        outbox: Outbox<ToRender>,
    ) -> Self {
        Label {
            id,
            parent,
            text: text.into(),
            style,
            ellipsis,
            outbox,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    pub fn style(&self) -> WidgetStyle {
        self.style
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text.clone();
            self.communicate(ToRender::SetText { id: self.id, text });
        }
    }

    /// Text as it appears in summaries, cut to the configured length
    pub fn short_text(&self) -> String {
        ellipsis(&self.text, self.ellipsis)
    }

    pub(crate) fn communicate(&self, msg: ToRender) {
        self.outbox.post(msg);
    }

    pub(crate) fn spec(&self) -> WidgetSpec {
        self.spec_as(WidgetKind::Label)
    }

    pub(crate) fn spec_as(&self, kind: WidgetKind) -> WidgetSpec {
        WidgetSpec {
            id: self.id,
            parent: self.parent,
            text: self.text.clone(),
            style: self.style,
            kind,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LABEL({})", self.short_text())
    }
}

fn get_style(label: &mut Label) -> KosResult<Value> {
    Ok(Value::from(label.style().name()))
}

fn get_text(label: &mut Label) -> KosResult<Value> {
    Ok(Value::from(label.text()))
}

fn set_text(label: &mut Label, value: Value) -> KosResult<()> {
    label.set_text(value.expect_str()?);
    Ok(())
}

impl Structure for Label {
    const KOS_NAME: &'static str = "Label";
    const INHERITANCE: &'static [&'static str] = &["Label", "Widget", "Structure"];

    fn suffix_table() -> &'static SuffixTable<Self> {
        static TABLE: OnceLock<SuffixTable<Label>> = OnceLock::new();
        TABLE.get_or_init(|| {
            SuffixTable::<Label>::new()
                .with("TEXT", Suffix::GetSet(get_text, set_text))
                .with("STYLE", Suffix::Get(get_style))
        })
    }
}
