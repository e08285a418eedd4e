//! Boolean Value
//!
//! The script-visible boolean. Logical operators follow native `bool`
//! semantics; conversions go through the table in `convert`.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::OnceLock;

use crate::structure::{Structure, SuffixTable};
use super::Value;

/// Immutable boolean wrapper exposed to scripts as `Boolean`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BooleanValue(bool);

impl BooleanValue {
    pub const TRUE: BooleanValue = BooleanValue(true);
    pub const FALSE: BooleanValue = BooleanValue(false);

    pub const fn new(value: bool) -> Self {
        BooleanValue(value)
    }

    pub const fn value(self) -> bool {
        self.0
    }
}

impl fmt::Display for BooleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "True" } else { "False" })
    }
}

impl From<bool> for BooleanValue {
    fn from(value: bool) -> Self {
        BooleanValue(value)
    }
}

impl From<BooleanValue> for bool {
    fn from(value: BooleanValue) -> Self {
        value.0
    }
}

impl PartialEq<bool> for BooleanValue {
    fn eq(&self, other: &bool) -> bool {
        self.0 == *other
    }
}

impl PartialEq<BooleanValue> for bool {
    fn eq(&self, other: &BooleanValue) -> bool {
        *self == other.0
    }
}

/// Only another boolean can be equal; `True` never equals the scalar 1.
impl PartialEq<Value> for BooleanValue {
    fn eq(&self, other: &Value) -> bool {
        matches!(other, Value::Bool(b) if b == self)
    }
}

impl Not for BooleanValue {
    type Output = BooleanValue;

    fn not(self) -> BooleanValue {
        BooleanValue(!self.0)
    }
}

impl BitAnd for BooleanValue {
    type Output = bool;

    fn bitand(self, rhs: BooleanValue) -> bool {
        self.0 && rhs.0
    }
}

impl BitOr for BooleanValue {
    type Output = bool;

    fn bitor(self, rhs: BooleanValue) -> bool {
        self.0 || rhs.0
    }
}

/// Booleans carry no suffixes beyond the common ones.
impl Structure for BooleanValue {
    const KOS_NAME: &'static str = "Boolean";
    const INHERITANCE: &'static [&'static str] = &["Boolean", "Structure"];

    fn suffix_table() -> &'static SuffixTable<Self> {
        static TABLE: OnceLock<SuffixTable<BooleanValue>> = OnceLock::new();
        TABLE.get_or_init(SuffixTable::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_like_script_literals() {
        assert_eq!(BooleanValue::TRUE.to_string(), "True");
        assert_eq!(BooleanValue::FALSE.to_string(), "False");
    }

    #[test]
    fn equality_ignores_other_value_kinds() {
        assert_eq!(BooleanValue::TRUE, Value::Bool(BooleanValue::TRUE));
        assert_ne!(BooleanValue::TRUE, Value::Int(1));
        assert_ne!(BooleanValue::FALSE, Value::Str("False".into()));
    }
}
