use core::fmt::Debug;
use std::collections::HashMap;

use crate::{symbol::Symbol, value::Value};

/// Every variable lives in a single map, so assigning a name
/// simply replaces whatever value (and type) it had before.
#[derive(Default)]
pub struct Variables(HashMap<Symbol, Value>);

impl Debug for Variables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Variables {
    pub fn get<T: AsRef<str>>(&self, name: T) -> Option<&Value> {
        self.0.get(name.as_ref())
    }

    /// Assigns the value, returning whatever was previously stored
    /// under the name.
    pub fn set(&mut self, name: Symbol, value: Value) -> Option<Value> {
        self.0.insert(name, value)
    }

    pub fn has<T: AsRef<str>>(&self, name: T) -> bool {
        self.0.contains_key(name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
