use std::{fmt::Display, rc::Rc};

/// This is a newtype for a variable name.
///
/// Names are shared between the variable store and any errors or
/// warnings that mention them, so they're reference-counted to keep
/// cloning cheap.
#[derive(Debug, PartialEq, Clone, Hash, Eq)]
pub struct Symbol(Rc<str>);

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Symbol(Rc::from(value))
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}
