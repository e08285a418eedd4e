//! Script Value Representation
//!
//! `Value` is the closed set of things a suffix can accept or return.
//! Each variant carries its kOS type name for error reporting.

pub mod boolean;
pub mod convert;

use std::fmt;

use crate::delegate::Delegate;
use crate::error::{KosError, KosResult};
use crate::widget::WidgetId;

pub use boolean::BooleanValue;
pub use convert::{Convertible, Primitive, PrimitiveKind};

/// Script value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Result of a suffix with nothing to return
    #[default]
    None,

    Bool(BooleanValue),

    /// Integral scalar
    Int(i32),

    /// Floating scalar
    Double(f64),

    Str(String),

    Delegate(Delegate),

    /// Handle to a widget owned by a `Gui`
    Widget(WidgetId),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "None",
            Value::Bool(_) => "Boolean",
            Value::Int(_) | Value::Double(_) => "Scalar",
            Value::Str(_) => "String",
            Value::Delegate(_) => "KOSDelegate",
            Value::Widget(_) => "Widget",
        }
    }

    pub fn expect_bool(&self) -> KosResult<bool> {
        match self {
            Value::Bool(b) => Ok(b.value()),
            other => Err(KosError::argument_type("Boolean", other.type_name())),
        }
    }

    pub fn expect_str(&self) -> KosResult<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(KosError::argument_type("String", other.type_name())),
        }
    }

    /// `None` clears a callback slot, so it is accepted alongside delegates.
    pub fn expect_delegate(&self) -> KosResult<Option<Delegate>> {
        match self {
            Value::Delegate(d) => Ok(Some(d.clone())),
            Value::None => Ok(None),
            other => Err(KosError::argument_type("KOSDelegate", other.type_name())),
        }
    }

    pub fn expect_widget(&self) -> KosResult<WidgetId> {
        match self {
            Value::Widget(id) => Ok(*id),
            other => Err(KosError::argument_type("Widget", other.type_name())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Delegate(d) => write!(f, "KOSDelegate({})", d.name()),
            Value::Widget(id) => write!(f, "Widget({})", id),
        }
    }
}

impl Convertible for Value {
    fn type_name(&self) -> &'static str {
        Value::type_name(self)
    }

    fn convert(&self, target: PrimitiveKind) -> KosResult<Primitive> {
        match self {
            Value::Bool(b) => b.convert(target),
            Value::Int(n) => convert::convert_scalar(f64::from(*n), target),
            Value::Double(n) => convert::convert_scalar(*n, target),
            other => match target {
                PrimitiveKind::String => Ok(Primitive::String(other.to_string())),
                _ => Err(KosError::cast(other.type_name(), target)),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(BooleanValue::new(b))
    }
}

impl From<BooleanValue> for Value {
    fn from(b: BooleanValue) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Delegate> for Value {
    fn from(d: Delegate) -> Self {
        Value::Delegate(d)
    }
}

impl From<WidgetId> for Value {
    fn from(id: WidgetId) -> Self {
        Value::Widget(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_variants_share_a_type_name() {
        assert_eq!(Value::Int(3).type_name(), "Scalar");
        assert_eq!(Value::Double(3.5).type_name(), "Scalar");
    }

    #[test]
    fn expect_bool_rejects_scalars() {
        let err = Value::Int(1).expect_bool().unwrap_err();
        assert_eq!(err, KosError::argument_type("Boolean", "Scalar"));
    }

    #[test]
    fn strings_only_convert_to_string() {
        let v = Value::from("hello");
        assert_eq!(v.to_primitive_string().unwrap(), "hello");
        assert_eq!(
            v.convert(PrimitiveKind::Int32).unwrap_err(),
            KosError::cast("String", PrimitiveKind::Int32)
        );
    }

    #[test]
    fn int_converts_to_double() {
        assert_eq!(
            Value::Int(7).convert(PrimitiveKind::Double).unwrap(),
            Primitive::Double(7.0)
        );
    }
}
