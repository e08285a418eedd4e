//! Primitive Conversions
//!
//! Conversion of script values into host primitives. Each value kind keys
//! its conversions by target type and returns a typed `Primitive`, or a
//! cast error naming both sides.

use std::fmt;

use crate::error::{KosError, KosResult};
use super::boolean::BooleanValue;

/// Conversion target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    DateTime,
    Decimal,
    Double,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    String,
    UInt16,
    UInt32,
    UInt64,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 15] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::DateTime,
        PrimitiveKind::Decimal,
        PrimitiveKind::Double,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::SByte,
        PrimitiveKind::Single,
        PrimitiveKind::String,
        PrimitiveKind::UInt16,
        PrimitiveKind::UInt32,
        PrimitiveKind::UInt64,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::DateTime => "DateTime",
            PrimitiveKind::Decimal => "Decimal",
            PrimitiveKind::Double => "Double",
            PrimitiveKind::Int16 => "Int16",
            PrimitiveKind::Int32 => "Int32",
            PrimitiveKind::Int64 => "Int64",
            PrimitiveKind::SByte => "SByte",
            PrimitiveKind::Single => "Single",
            PrimitiveKind::String => "String",
            PrimitiveKind::UInt16 => "UInt16",
            PrimitiveKind::UInt32 => "UInt32",
            PrimitiveKind::UInt64 => "UInt64",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a successful conversion.
///
/// DateTime and Decimal targets have no representation here; nothing
/// converts to them.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Boolean(bool),
    Byte(u8),
    Char(char),
    Double(f64),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    SByte(i8),
    Single(f32),
    String(String),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Boolean(_) => PrimitiveKind::Boolean,
            Primitive::Byte(_) => PrimitiveKind::Byte,
            Primitive::Char(_) => PrimitiveKind::Char,
            Primitive::Double(_) => PrimitiveKind::Double,
            Primitive::Int16(_) => PrimitiveKind::Int16,
            Primitive::Int32(_) => PrimitiveKind::Int32,
            Primitive::Int64(_) => PrimitiveKind::Int64,
            Primitive::SByte(_) => PrimitiveKind::SByte,
            Primitive::Single(_) => PrimitiveKind::Single,
            Primitive::String(_) => PrimitiveKind::String,
            Primitive::UInt16(_) => PrimitiveKind::UInt16,
            Primitive::UInt32(_) => PrimitiveKind::UInt32,
            Primitive::UInt64(_) => PrimitiveKind::UInt64,
        }
    }
}

/// A script value that can be handed to host code as a primitive.
pub trait Convertible {
    /// kOS type name used in cast errors
    fn type_name(&self) -> &'static str;

    fn convert(&self, target: PrimitiveKind) -> KosResult<Primitive>;

    fn to_boolean(&self) -> KosResult<bool> {
        match self.convert(PrimitiveKind::Boolean)? {
            Primitive::Boolean(b) => Ok(b),
            _ => Err(KosError::cast(self.type_name(), PrimitiveKind::Boolean)),
        }
    }

    fn to_primitive_string(&self) -> KosResult<String> {
        match self.convert(PrimitiveKind::String)? {
            Primitive::String(s) => Ok(s),
            _ => Err(KosError::cast(self.type_name(), PrimitiveKind::String)),
        }
    }
}

type BoolConversion = fn(bool) -> Primitive;

/// Boolean conversions. `None` marks a target that always fails.
const BOOLEAN_CONVERSIONS: [(PrimitiveKind, Option<BoolConversion>); 15] = [
    (PrimitiveKind::Boolean, Some(Primitive::Boolean)),
    (PrimitiveKind::Byte, None),
    (PrimitiveKind::Char, None),
    (PrimitiveKind::DateTime, None),
    (PrimitiveKind::Decimal, None),
    (PrimitiveKind::Double, None),
    (PrimitiveKind::Int16, None),
    (PrimitiveKind::Int32, None),
    (PrimitiveKind::Int64, None),
    (PrimitiveKind::SByte, None),
    (PrimitiveKind::Single, None),
    (PrimitiveKind::String, Some(boolean_to_string)),
    (PrimitiveKind::UInt16, None),
    (PrimitiveKind::UInt32, None),
    (PrimitiveKind::UInt64, None),
];

fn boolean_to_string(b: bool) -> Primitive {
    Primitive::String(BooleanValue::new(b).to_string())
}

impl Convertible for BooleanValue {
    fn type_name(&self) -> &'static str {
        "Boolean"
    }

    fn convert(&self, target: PrimitiveKind) -> KosResult<Primitive> {
        BOOLEAN_CONVERSIONS
            .iter()
            .find(|(kind, _)| *kind == target)
            .and_then(|(_, conversion)| *conversion)
            .map(|conversion| conversion(self.value()))
            .ok_or_else(|| KosError::cast(self.type_name(), target))
    }
}

/// Convert a scalar to a numeric or string primitive.
///
/// Fractional values headed for integral targets round half to even.
pub(crate) fn convert_scalar(value: f64, target: PrimitiveKind) -> KosResult<Primitive> {
    let overflow = || KosError::Overflow {
        value: value.to_string(),
        to: target,
    };

    let integral = || -> KosResult<i64> {
        let rounded = value.round_ties_even();
        if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
            return Err(overflow());
        }
        Ok(rounded as i64)
    };

    match target {
        PrimitiveKind::Double => Ok(Primitive::Double(value)),
        PrimitiveKind::Single => {
            let narrowed = value as f32;
            if value.is_finite() && !narrowed.is_finite() {
                return Err(overflow());
            }
            Ok(Primitive::Single(narrowed))
        }
        PrimitiveKind::String => Ok(Primitive::String(value.to_string())),
        PrimitiveKind::Byte => u8::try_from(integral()?).map(Primitive::Byte).map_err(|_| overflow()),
        PrimitiveKind::SByte => i8::try_from(integral()?).map(Primitive::SByte).map_err(|_| overflow()),
        PrimitiveKind::Int16 => i16::try_from(integral()?).map(Primitive::Int16).map_err(|_| overflow()),
        PrimitiveKind::UInt16 => u16::try_from(integral()?).map(Primitive::UInt16).map_err(|_| overflow()),
        PrimitiveKind::Int32 => i32::try_from(integral()?).map(Primitive::Int32).map_err(|_| overflow()),
        PrimitiveKind::UInt32 => u32::try_from(integral()?).map(Primitive::UInt32).map_err(|_| overflow()),
        PrimitiveKind::Int64 => integral().map(Primitive::Int64),
        PrimitiveKind::UInt64 => u64::try_from(integral()?).map(Primitive::UInt64).map_err(|_| overflow()),
        PrimitiveKind::Boolean
        | PrimitiveKind::Char
        | PrimitiveKind::DateTime
        | PrimitiveKind::Decimal => Err(KosError::cast("Scalar", target)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_table_covers_every_target() {
        for kind in PrimitiveKind::ALL {
            assert!(
                BOOLEAN_CONVERSIONS.iter().any(|(k, _)| *k == kind),
                "missing table row for {kind}"
            );
        }
    }

    #[test]
    fn boolean_to_string_matches_display() {
        let converted = BooleanValue::TRUE.convert(PrimitiveKind::String).unwrap();
        assert_eq!(converted, Primitive::String("True".into()));
    }

    #[test]
    fn scalar_rounds_half_to_even() {
        assert_eq!(convert_scalar(2.5, PrimitiveKind::Int32).unwrap(), Primitive::Int32(2));
        assert_eq!(convert_scalar(3.5, PrimitiveKind::Int32).unwrap(), Primitive::Int32(4));
    }

    #[test]
    fn scalar_out_of_range_overflows() {
        let err = convert_scalar(300.0, PrimitiveKind::Byte).unwrap_err();
        assert!(matches!(err, KosError::Overflow { to: PrimitiveKind::Byte, .. }));
        assert!(convert_scalar(-1.0, PrimitiveKind::UInt32).is_err());
        assert!(convert_scalar(f64::NAN, PrimitiveKind::Int64).is_err());
    }

    #[test]
    fn scalar_never_becomes_boolean() {
        let err = convert_scalar(1.0, PrimitiveKind::Boolean).unwrap_err();
        assert_eq!(err, KosError::cast("Scalar", PrimitiveKind::Boolean));
    }
}
