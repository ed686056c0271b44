use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Text(String),
}

impl Value {
    /// Classifies a literal: if the whole string is an optionally signed
    /// base-10 integer that fits in an `i64`, it's an integer, otherwise
    /// it's stored verbatim as text.
    ///
    /// Note that no trimming happens here, so `" 5"` is text.
    pub fn infer<T: AsRef<str>>(literal: T) -> Self {
        match try_parse_integer(literal.as_ref()) {
            Some(number) => Value::Integer(number),
            None => Value::Text(literal.as_ref().to_string()),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Text(_) => "string",
        }
    }
}

/// Returns the integer the whole string represents, if any.
pub fn try_parse_integer(literal: &str) -> Option<i64> {
    literal.parse::<i64>().ok()
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(number) => write!(f, "{}", number),
            Value::Text(string) => write!(f, "{}", string),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}
