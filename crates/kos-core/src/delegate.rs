//! Script delegates
//!
//! A `Delegate` is a callable handle a script stores in a callback slot such
//! as a button's `ONPRESSED`. The runtime invokes it on the script side only.

use std::fmt;
use std::sync::Arc;

use crate::error::KosResult;
use crate::value::Value;

type DelegateFn = dyn Fn(&[Value]) -> KosResult<Value> + Send + Sync;

#[derive(Clone)]
pub struct Delegate {
    name: Arc<str>,
    func: Arc<DelegateFn>,
}

impl Delegate {
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&[Value]) -> KosResult<Value> + Send + Sync + 'static,
    {
        Delegate {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, args: &[Value]) -> KosResult<Value> {
        (self.func)(args)
    }
}

/// Delegates compare by identity: two handles are equal only if they share
/// the same callable.
impl PartialEq for Delegate {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Delegate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate").field("name", &self.name).finish()
    }
}
