//! Script-side GUI
//!
//! `Gui` owns the logical half of a widget tree and the script end of the
//! communication link. Scripts reach widgets by id through the suffix
//! methods; render-side changes are folded in by `sync`.

use log::{debug, warn};

use crate::communicate::{Outbox, ScriptPort, ToRender};
use crate::config::GuiConfig;
use crate::error::{KosError, KosResult};
use crate::value::Value;
use crate::widget::{Button, Container, Label, Widget, WidgetId, WidgetStyle};

/// Suffixes a `Box` answers through its owning `Gui`
const BOX_SUFFIXES: [&str; 5] = ["ADDLABEL", "ADDBUTTON", "ADDCHECKBOX", "ADDRADIOBUTTON", "ADDVBOX"];

#[derive(Debug)]
pub struct Gui {
    config: GuiConfig,
    widgets: Vec<Widget>,
    port: ScriptPort,
}

impl Gui {
    /// Create a GUI with an empty root box
    pub fn new(config: GuiConfig, port: ScriptPort) -> Self {
        let mut gui = Gui {
            config,
            widgets: Vec::new(),
            port,
        };
        let root = Widget::Box(Container::new(WidgetId(0), None));
        gui.port.outbox.post(ToRender::Spawn(root.spec()));
        gui.widgets.push(root);
        gui
    }

    pub fn root(&self) -> WidgetId {
        WidgetId(0)
    }

    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    /// Number of widgets, root included
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn widget(&self, id: WidgetId) -> KosResult<&Widget> {
        self.widgets.get(id.index()).ok_or(KosError::UnknownWidget(id))
    }

    fn widget_mut(&mut self, id: WidgetId) -> KosResult<&mut Widget> {
        self.widgets
            .get_mut(id.index())
            .ok_or(KosError::UnknownWidget(id))
    }

    pub fn button(&self, id: WidgetId) -> KosResult<&Button> {
        match self.widget(id)? {
            Widget::Button(b) => Ok(b),
            other => Err(wrong_kind(id, "Button", other)),
        }
    }

    pub fn button_mut(&mut self, id: WidgetId) -> KosResult<&mut Button> {
        match self.widget_mut(id)? {
            Widget::Button(b) => Ok(b),
            other => Err(wrong_kind(id, "Button", other)),
        }
    }

    pub fn container(&self, id: WidgetId) -> KosResult<&Container> {
        match self.widget(id)? {
            Widget::Box(b) => Ok(b),
            other => Err(wrong_kind(id, "Box", other)),
        }
    }

    fn container_mut(&mut self, id: WidgetId) -> KosResult<&mut Container> {
        match self.widget_mut(id)? {
            Widget::Box(b) => Ok(b),
            other => Err(wrong_kind(id, "Box", other)),
        }
    }

    pub fn add_box(&mut self, parent: WidgetId) -> KosResult<WidgetId> {
        self.attach(parent, |id, _, _| Widget::Box(Container::new(id, Some(parent))))
    }

    pub fn add_label(&mut self, parent: WidgetId, text: &str) -> KosResult<WidgetId> {
        let style = self.container(parent)?.find_style("label");
        self.attach(parent, |id, ellipsis, outbox| {
            Widget::Label(Label::new(id, Some(parent), text, style, ellipsis, outbox))
        })
    }

    pub fn add_button(&mut self, parent: WidgetId, text: &str) -> KosResult<WidgetId> {
        let style = self.container(parent)?.find_style("button");
        self.attach(parent, |id, ellipsis, outbox| {
            Widget::Button(Button::new(Label::new(id, Some(parent), text, style, ellipsis, outbox)))
        })
    }

    pub fn add_checkbox(&mut self, parent: WidgetId, text: &str, on: bool) -> KosResult<WidgetId> {
        let style = self.container(parent)?.find_style("toggle");
        self.attach(parent, |id, ellipsis, outbox| {
            let label = Label::new(id, Some(parent), text, style, ellipsis, outbox);
            Widget::Button(Button::new_checkbox(label, on))
        })
    }

    pub fn add_radio_button(&mut self, parent: WidgetId, text: &str, on: bool) -> KosResult<WidgetId> {
        let style = self.container(parent)?.find_style("toggle");
        self.attach(parent, |id, ellipsis, outbox| {
            let label = Label::new(id, Some(parent), text, style, ellipsis, outbox);
            Widget::Button(Button::new_radio_button(label, on))
        })
    }

    fn attach<F>(&mut self, parent: WidgetId, build: F) -> KosResult<WidgetId>
    where
        F: FnOnce(WidgetId, usize, Outbox<ToRender>) -> Widget,
    {
        self.container(parent)?;
        let id = next_id(self.widgets.len(), self.config.max_widgets)?;
        let widget = build(id, self.config.text_ellipsis, self.port.outbox.clone());
        debug!("adding {} as {} under {}", widget, id, parent);
        self.port.outbox.post(ToRender::Spawn(widget.spec()));
        self.widgets.push(widget);
        self.container_mut(parent)?.push_child(id);
        Ok(id)
    }

    pub fn get_suffix(&mut self, id: WidgetId, name: &str) -> KosResult<Value> {
        if self.is_box_suffix(id, name) {
            return self.call_suffix(id, name, &[]);
        }
        self.widget_mut(id)?.get_suffix(name)
    }

    pub fn set_suffix(&mut self, id: WidgetId, name: &str, value: Value) -> KosResult<()> {
        if self.is_box_suffix(id, name) {
            return Err(KosError::ReadOnlySuffix {
                suffix: name.to_ascii_uppercase(),
                on: "Box",
            });
        }
        self.widget_mut(id)?.set_suffix(name, value)
    }

    pub fn call_suffix(&mut self, id: WidgetId, name: &str, args: &[Value]) -> KosResult<Value> {
        if !self.is_box_suffix(id, name) {
            if name.eq_ignore_ascii_case("HASSUFFIX") && self.container(id).is_ok() {
                if let [Value::Str(asked)] = args {
                    if BOX_SUFFIXES.iter().any(|s| s.eq_ignore_ascii_case(asked)) {
                        return Ok(Value::from(true));
                    }
                }
            }
            return self.widget_mut(id)?.call_suffix(name, args);
        }

        let key = name.to_ascii_uppercase();
        let arity = |expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(KosError::ArgumentCount {
                    suffix: key.clone(),
                    expected,
                    got: args.len(),
                })
            }
        };

        let child = match key.as_str() {
            "ADDLABEL" => {
                arity(1)?;
                self.add_label(id, args[0].expect_str()?)?
            }
            "ADDBUTTON" => {
                arity(1)?;
                self.add_button(id, args[0].expect_str()?)?
            }
            "ADDCHECKBOX" => {
                arity(2)?;
                self.add_checkbox(id, args[0].expect_str()?, args[1].expect_bool()?)?
            }
            "ADDRADIOBUTTON" => {
                arity(2)?;
                self.add_radio_button(id, args[0].expect_str()?, args[1].expect_bool()?)?
            }
            _ => {
                arity(0)?;
                self.add_box(id)?
            }
        };
        Ok(Value::Widget(child))
    }

    fn is_box_suffix(&self, id: WidgetId, name: &str) -> bool {
        self.container(id).is_ok() && BOX_SUFFIXES.iter().any(|s| s.eq_ignore_ascii_case(name))
    }

    /// Apply every message the render side has posted so far, in order.
    ///
    /// Returns the number of messages applied. If a delegate fails, the error
    /// is returned and later messages stay queued for the next call.
    pub fn sync(&mut self) -> KosResult<usize> {
        let mut applied = 0;
        while let Some(msg) = self.port.inbox.try_next() {
            applied += 1;
            match self.button_mut(msg.widget()) {
                Ok(button) => button.apply(msg)?,
                Err(err) => warn!("dropping {:?}: {}", msg, err),
            }
        }
        Ok(applied)
    }
}

/// Id for the widget after `count` existing ones, within `max_widgets` and
/// the id range.
fn next_id(count: usize, max_widgets: usize) -> KosResult<WidgetId> {
    if count >= max_widgets {
        return Err(KosError::TooManyWidgets(max_widgets));
    }
    u32::try_from(count)
        .map(WidgetId)
        .map_err(|_| KosError::TooManyWidgets(max_widgets))
}

fn wrong_kind(id: WidgetId, expected: &'static str, found: &Widget) -> KosError {
    KosError::WrongWidgetKind {
        id,
        expected,
        found: found.kind_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::communicate::{link, RenderPort, ToScript};
    use crate::widget::WidgetKind;

    fn gui() -> (Gui, RenderPort) {
        let (script, render) = link();
        (Gui::new(GuiConfig::new(), script), render)
    }

    #[test]
    fn root_is_spawned_first() {
        let (gui, render) = gui();
        assert_eq!(gui.len(), 1);
        match render.inbox.try_next() {
            Some(ToRender::Spawn(spec)) => {
                assert_eq!(spec.id, gui.root());
                assert_eq!(spec.kind, WidgetKind::Box);
                assert_eq!(spec.parent, None);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn children_are_recorded_in_order() {
        let (mut gui, _render) = gui();
        let root = gui.root();
        let a = gui.add_label(root, "Status").unwrap();
        let b = gui.add_button(root, "Go").unwrap();
        assert_eq!(gui.container(root).unwrap().children(), &[a, b]);
        assert_eq!(gui.button(b).unwrap().label().style(), WidgetStyle::BUTTON);
    }

    #[test]
    fn only_boxes_take_children() {
        let (mut gui, _render) = gui();
        let label = gui.add_label(gui.root(), "x").unwrap();
        let err = gui.add_button(label, "y").unwrap_err();
        assert_eq!(
            err,
            KosError::WrongWidgetKind {
                id: label,
                expected: "Box",
                found: "Label"
            }
        );
    }

    #[test]
    fn widget_limit_is_enforced() {
        let (script, _render) = link();
        let mut gui = Gui::new(
            GuiConfig {
                max_widgets: 2,
                ..GuiConfig::new()
            },
            script,
        );
        gui.add_button(gui.root(), "one").unwrap();
        assert_eq!(gui.add_button(gui.root(), "two"), Err(KosError::TooManyWidgets(2)));
    }

    #[test]
    fn ids_past_u32_range_hit_the_limit() {
        let max = u32::MAX as usize;
        assert_eq!(next_id(max, usize::MAX), Ok(WidgetId(u32::MAX)));
        assert_eq!(next_id(max + 1, usize::MAX), Err(KosError::TooManyWidgets(usize::MAX)));
        assert_eq!(next_id(3, 3), Err(KosError::TooManyWidgets(3)));
    }

    #[test]
    fn box_suffixes_create_children() {
        let (mut gui, _render) = gui();
        let root = gui.root();
        let radio = gui
            .call_suffix(root, "addradiobutton", &[Value::from("Prograde"), Value::from(true)])
            .unwrap()
            .expect_widget()
            .unwrap();
        assert!(gui.button(radio).unwrap().is_exclusive());
        let inner = gui.get_suffix(root, "ADDVBOX").unwrap().expect_widget().unwrap();
        assert!(gui.container(inner).is_ok());
        assert_eq!(
            gui.call_suffix(root, "HASSUFFIX", &[Value::from("addbutton")]).unwrap(),
            Value::from(true)
        );
        assert!(gui.call_suffix(root, "ADDCHECKBOX", &[Value::from("x")]).is_err());
    }

    #[test]
    fn sync_applies_clicks_and_drops_unknown_targets() {
        let (mut gui, render) = gui();
        let b = gui.add_button(gui.root(), "Stage").unwrap();
        render.outbox.post(ToScript::Clicked { id: b });
        render.outbox.post(ToScript::Clicked { id: WidgetId(99) });
        assert_eq!(gui.sync().unwrap(), 2);
        assert!(gui.button(b).unwrap().is_pressed());
        assert_eq!(gui.get_suffix(b, "PRESSED").unwrap(), Value::from(true));
        assert_eq!(gui.get_suffix(b, "PRESSED").unwrap(), Value::from(false));
    }
}
