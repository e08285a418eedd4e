//! Push, toggle and radio buttons (script side).
//!
//! A button has two pressed states. `pressed` is logical and written only
//! here, by script suffixes and by messages arriving from the render side.
//! The visible state belongs to the render loop; every change to `pressed`
//! that should show is posted as `ToRender::SetPressedVisible`.
//!
//! A push button (not toggle) latches: a click sets `pressed`, and the
//! first read of `PRESSED` consumes it.

use std::fmt;
use std::sync::OnceLock;

use log::debug;

use crate::communicate::{ToRender, ToScript};
use crate::delegate::Delegate;
use crate::error::KosResult;
use crate::structure::{Structure, Suffix, SuffixTable};
use crate::value::Value;

use super::{Label, WidgetKind, WidgetSpec};

#[derive(Debug)]
pub struct Button {
    label: Label,
    pressed: bool,
    is_toggle: bool,
    is_exclusive: bool,
    on_pressed: Option<Delegate>,
}

impl Button {
    pub(crate) fn new(label: Label) -> Self {
        Button {
            label,
            pressed: false,
            is_toggle: false,
            is_exclusive: false,
            on_pressed: None,
        }
    }

    /// Toggle-mode button showing a check box
    pub(crate) fn new_checkbox(label: Label, on: bool) -> Self {
        Button {
            pressed: on,
            is_toggle: true,
            ..Button::new(label)
        }
    }

    /// Checkbox that unpresses its siblings when pressed
    pub(crate) fn new_radio_button(label: Label, on: bool) -> Self {
        Button {
            is_exclusive: true,
            ..Button::new_checkbox(label, on)
        }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// Logical pressed state, without consuming a latched press
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_toggle(&self) -> bool {
        self.is_toggle
    }

    pub fn is_exclusive(&self) -> bool {
        self.is_exclusive
    }

    pub fn on_pressed(&self) -> Option<&Delegate> {
        self.on_pressed.as_ref()
    }

    pub fn set_on_pressed(&mut self, delegate: Option<Delegate>) {
        self.on_pressed = delegate;
    }

    pub fn set_toggle_mode(&mut self, on: bool) {
        if self.is_toggle != on {
            self.is_toggle = on;
            self.configure();
        }
    }

    pub fn set_exclusive(&mut self, on: bool) {
        if self.is_exclusive != on {
            self.is_exclusive = on;
            self.configure();
        }
    }

    pub fn set_pressed(&mut self, value: bool) {
        if self.pressed != value {
            self.pressed = value;
            self.label.communicate(ToRender::SetPressedVisible {
                id: self.label.id(),
                on: value,
            });
        }
    }

    /// Read the pressed state; a latched push-button press is cleared by the
    /// read and the button is shown released again.
    pub fn take_press(&mut self) -> bool {
        let was = self.pressed;
        if !self.is_toggle && self.pressed {
            self.pressed = false;
            self.label.communicate(ToRender::SetPressedVisible {
                id: self.label.id(),
                on: false,
            });
        }
        was
    }

    /// Apply a message from the render side.
    pub(crate) fn apply(&mut self, msg: ToScript) -> KosResult<()> {
        match msg {
            // Visible state already matches; nothing to post.
            ToScript::SyncPressed { on, .. } => {
                self.pressed = on;
                Ok(())
            }
            ToScript::Clicked { .. } => {
                self.pressed = true;
                self.fire_on_pressed()
            }
            ToScript::Toggled { on, .. } => {
                if self.pressed != on {
                    self.pressed = on;
                    if on {
                        return self.fire_on_pressed();
                    }
                }
                Ok(())
            }
        }
    }

    fn fire_on_pressed(&self) -> KosResult<()> {
        if let Some(delegate) = &self.on_pressed {
            debug!("{} firing ONPRESSED delegate '{}'", self, delegate.name());
            delegate.call(&[])?;
        }
        Ok(())
    }

    fn configure(&self) {
        self.label.communicate(ToRender::Configure {
            id: self.label.id(),
            toggle: self.is_toggle,
            exclusive: self.is_exclusive,
        });
    }

    pub(crate) fn spec(&self) -> WidgetSpec {
        self.label.spec_as(WidgetKind::Button {
            pressed: self.pressed,
            toggle: self.is_toggle,
            exclusive: self.is_exclusive,
        })
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BUTTON({})", self.label.short_text())
    }
}

fn take_press(button: &mut Button) -> KosResult<Value> {
    Ok(Value::from(button.take_press()))
}

fn set_pressed(button: &mut Button, value: Value) -> KosResult<()> {
    button.set_pressed(value.expect_bool()?);
    Ok(())
}

fn set_toggle(button: &mut Button, value: Value) -> KosResult<Value> {
    button.set_toggle_mode(value.expect_bool()?);
    Ok(Value::None)
}

fn get_exclusive(button: &mut Button) -> KosResult<Value> {
    Ok(Value::from(button.is_exclusive()))
}

fn set_exclusive(button: &mut Button, value: Value) -> KosResult<()> {
    button.set_exclusive(value.expect_bool()?);
    Ok(())
}

fn get_on_pressed(button: &mut Button) -> KosResult<Value> {
    Ok(button.on_pressed().cloned().map_or(Value::None, Value::Delegate))
}

fn set_on_pressed(button: &mut Button, value: Value) -> KosResult<()> {
    button.set_on_pressed(value.expect_delegate()?);
    Ok(())
}

fn get_style(button: &mut Button) -> KosResult<Value> {
    Ok(Value::from(button.label().style().name()))
}

fn get_text(button: &mut Button) -> KosResult<Value> {
    Ok(Value::from(button.label().text()))
}

fn set_text(button: &mut Button, value: Value) -> KosResult<()> {
    button.label_mut().set_text(value.expect_str()?);
    Ok(())
}

impl Structure for Button {
    const KOS_NAME: &'static str = "Button";
    const INHERITANCE: &'static [&'static str] = &["Button", "Label", "Widget", "Structure"];

    fn suffix_table() -> &'static SuffixTable<Self> {
        static TABLE: OnceLock<SuffixTable<Button>> = OnceLock::new();
        TABLE.get_or_init(|| {
            SuffixTable::<Button>::new()
                .with("PRESSED", Suffix::GetSet(take_press, set_pressed))
                .with("SETTOGGLE", Suffix::OneArg(set_toggle))
                .with("EXCLUSIVE", Suffix::GetSet(get_exclusive, set_exclusive))
                .with("ONPRESSED", Suffix::GetSet(get_on_pressed, set_on_pressed))
                .with("TEXT", Suffix::GetSet(get_text, set_text))
                .with("STYLE", Suffix::Get(get_style))
        })
    }
}
