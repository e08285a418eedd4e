//! Suffix tables
//!
//! A suffix is a named attribute or method on a structure. Each structure
//! type builds one `SuffixTable` and shares it between all instances.

use crate::error::{KosError, KosResult};
use crate::value::Value;

pub type Getter<T> = fn(&mut T) -> KosResult<Value>;
pub type Setter<T> = fn(&mut T, Value) -> KosResult<()>;
pub type OneArgMethod<T> = fn(&mut T, Value) -> KosResult<Value>;

/// Suffix kinds
pub enum Suffix<T> {
    /// Read-only attribute
    Get(Getter<T>),

    /// Attribute that scripts may also `SET`
    GetSet(Getter<T>, Setter<T>),

    /// Method taking exactly one argument
    OneArg(OneArgMethod<T>),
}

impl<T> Suffix<T> {
    pub fn get(&self, target: &mut T, name: &str) -> KosResult<Value> {
        match self {
            Suffix::Get(get) | Suffix::GetSet(get, _) => get(target),
            Suffix::OneArg(_) => Err(KosError::ArgumentCount {
                suffix: name.to_ascii_uppercase(),
                expected: 1,
                got: 0,
            }),
        }
    }

    pub fn set(&self, target: &mut T, name: &str, value: Value, on: &'static str) -> KosResult<()> {
        match self {
            Suffix::GetSet(_, set) => set(target, value),
            _ => Err(KosError::ReadOnlySuffix {
                suffix: name.to_ascii_uppercase(),
                on,
            }),
        }
    }

    pub fn call(&self, target: &mut T, name: &str, args: &[Value]) -> KosResult<Value> {
        let expected = match self {
            Suffix::OneArg(_) => 1,
            _ => 0,
        };
        if args.len() != expected {
            return Err(KosError::ArgumentCount {
                suffix: name.to_ascii_uppercase(),
                expected,
                got: args.len(),
            });
        }

        match self {
            Suffix::OneArg(method) => method(target, args[0].clone()),
            _ => self.get(target, name),
        }
    }
}

/// Name-keyed suffix lookup (names are stored upper case, matched
/// case-insensitively)
pub struct SuffixTable<T> {
    entries: Vec<(&'static str, Suffix<T>)>,
}

impl<T> SuffixTable<T> {
    pub fn new() -> Self {
        SuffixTable { entries: Vec::new() }
    }

    pub fn with(mut self, name: &'static str, suffix: Suffix<T>) -> Self {
        debug_assert!(
            name.chars().all(|c| !c.is_ascii_lowercase()),
            "suffix names are upper case"
        );
        self.entries.push((name, suffix));
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&Suffix<T>> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, suffix)| suffix)
    }
}

impl<T> Default for SuffixTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        n: i32,
    }

    fn table() -> SuffixTable<Counter> {
        SuffixTable::<Counter>::new()
            .with("N", Suffix::GetSet(|c| Ok(Value::Int(c.n)), |c, v| {
                c.n = match v {
                    Value::Int(n) => n,
                    other => return Err(KosError::argument_type("Scalar", other.type_name())),
                };
                Ok(())
            }))
            .with("DOUBLED", Suffix::Get(|c| Ok(Value::Int(c.n * 2))))
            .with("ADD", Suffix::OneArg(|c, v| {
                if let Value::Int(n) = v {
                    c.n += n;
                }
                Ok(Value::None)
            }))
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let t = table();
        assert!(t.lookup("doubled").is_some());
        assert!(t.lookup("Add").is_some());
        assert!(t.lookup("missing").is_none());
    }

    #[test]
    fn method_requires_exact_arity() {
        let t = table();
        let mut c = Counter { n: 0 };
        let add = t.lookup("ADD").unwrap();
        let err = add.call(&mut c, "add", &[]).unwrap_err();
        assert_eq!(
            err,
            KosError::ArgumentCount {
                suffix: "ADD".into(),
                expected: 1,
                got: 0
            }
        );
        add.call(&mut c, "add", &[Value::Int(5)]).unwrap();
        assert_eq!(c.n, 5);
    }

    #[test]
    fn only_get_set_suffixes_accept_set() {
        let t = table();
        let mut c = Counter { n: 0 };
        t.lookup("N").unwrap().set(&mut c, "n", Value::Int(9), "Counter").unwrap();
        assert_eq!(c.n, 9);
        let doubled = t.lookup("DOUBLED").unwrap();
        assert_eq!(doubled.get(&mut c, "doubled").unwrap(), Value::Int(18));
        let err = doubled.set(&mut c, "doubled", Value::Int(1), "Counter").unwrap_err();
        assert!(matches!(err, KosError::ReadOnlySuffix { .. }));
    }
}
