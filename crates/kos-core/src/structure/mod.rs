//! Structures
//!
//! Everything a script can hold a reference to is a `Structure`: it has a
//! kOS type name, an inheritance chain and a suffix table. The common
//! suffixes below are answered by every structure.

pub mod suffix;

use std::fmt;

use crate::error::{KosError, KosResult};
use crate::value::Value;

pub use suffix::{Suffix, SuffixTable};

/// Suffixes answered by every structure, after its own table
pub const COMMON_SUFFIXES: [&str; 5] = ["TOSTRING", "TYPENAME", "INHERITANCE", "HASSUFFIX", "ISTYPE"];

pub trait Structure: Sized + fmt::Display + 'static {
    const KOS_NAME: &'static str;

    /// Type names from most derived to `Structure`
    const INHERITANCE: &'static [&'static str];

    fn suffix_table() -> &'static SuffixTable<Self>;

    fn has_suffix(name: &str) -> bool {
        Self::suffix_table().lookup(name).is_some()
            || COMMON_SUFFIXES.iter().any(|s| s.eq_ignore_ascii_case(name))
    }

    fn is_type(name: &str) -> bool {
        Self::INHERITANCE.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    fn get_suffix(&mut self, name: &str) -> KosResult<Value> {
        match Self::suffix_table().lookup(name) {
            Some(suffix) => suffix.get(self, name),
            None => common_suffix(self, name, &[]),
        }
    }

    fn set_suffix(&mut self, name: &str, value: Value) -> KosResult<()> {
        match Self::suffix_table().lookup(name) {
            Some(suffix) => suffix.set(self, name, value, Self::KOS_NAME),
            None if Self::has_suffix(name) => Err(KosError::ReadOnlySuffix {
                suffix: name.to_ascii_uppercase(),
                on: Self::KOS_NAME,
            }),
            None => Err(not_found::<Self>(name)),
        }
    }

    fn call_suffix(&mut self, name: &str, args: &[Value]) -> KosResult<Value> {
        match Self::suffix_table().lookup(name) {
            Some(suffix) => suffix.call(self, name, args),
            None => common_suffix(self, name, args),
        }
    }
}

fn not_found<S: Structure>(name: &str) -> KosError {
    KosError::SuffixNotFound {
        suffix: name.to_ascii_uppercase(),
        on: S::KOS_NAME,
    }
}

fn common_suffix<S: Structure>(target: &S, name: &str, args: &[Value]) -> KosResult<Value> {
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

    match key.as_str() {
        "TOSTRING" => {
            arity(0)?;
            Ok(Value::Str(target.to_string()))
        }
        "TYPENAME" => {
            arity(0)?;
            Ok(Value::from(S::KOS_NAME))
        }
        "INHERITANCE" => {
            arity(0)?;
            Ok(Value::Str(S::INHERITANCE.join(" derived from ")))
        }
        "HASSUFFIX" => {
            arity(1)?;
            Ok(Value::from(S::has_suffix(args[0].expect_str()?)))
        }
        "ISTYPE" => {
            arity(1)?;
            Ok(Value::from(S::is_type(args[0].expect_str()?)))
        }
        _ => Err(not_found::<S>(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::BooleanValue;

    #[test]
    fn common_suffixes_answer_on_empty_table() {
        let mut b = BooleanValue::TRUE;
        assert_eq!(b.get_suffix("tostring").unwrap(), Value::from("True"));
        assert_eq!(b.get_suffix("TYPENAME").unwrap(), Value::from("Boolean"));
        assert_eq!(
            b.get_suffix("inheritance").unwrap(),
            Value::from("Boolean derived from Structure")
        );
    }

    #[test]
    fn hassuffix_and_istype_take_one_argument() {
        let mut b = BooleanValue::FALSE;
        assert_eq!(
            b.call_suffix("HASSUFFIX", &[Value::from("tostring")]).unwrap(),
            Value::from(true)
        );
        assert_eq!(
            b.call_suffix("ISTYPE", &[Value::from("structure")]).unwrap(),
            Value::from(true)
        );
        assert!(matches!(
            b.get_suffix("ISTYPE"),
            Err(KosError::ArgumentCount { expected: 1, got: 0, .. })
        ));
    }

    #[test]
    fn common_suffixes_are_read_only() {
        let mut b = BooleanValue::FALSE;
        assert!(matches!(
            b.set_suffix("TYPENAME", Value::from("x")),
            Err(KosError::ReadOnlySuffix { .. })
        ));
        assert!(matches!(
            b.set_suffix("NOPE", Value::None),
            Err(KosError::SuffixNotFound { on: "Boolean", .. })
        ));
    }
}
