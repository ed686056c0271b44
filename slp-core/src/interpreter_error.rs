use std::{
    backtrace::{Backtrace, BacktraceStatus},
    error::Error,
    fmt::Display,
};

use crate::symbol::Symbol;

#[derive(Debug)]
pub struct TracedInterpreterError {
    pub error: InterpreterError,
    pub line: Option<usize>,
    backtrace: Backtrace,
}

impl TracedInterpreterError {
    pub fn set_line_number(&mut self, line: usize) {
        self.line = Some(line);
    }
}

#[derive(Debug, PartialEq)]
pub enum InterpreterError {
    UnknownCommand(String),
    MissingValue(Symbol),
    VariableNotFound(Symbol),
    DivisionByZero(Symbol),
    /// The second argument of an arithmetic statement was absent
    /// (represented by an empty string) or wasn't an integer.
    InvalidOperand(&'static str, String),
    MissingVariableName(&'static str),
}

impl From<InterpreterError> for TracedInterpreterError {
    fn from(value: InterpreterError) -> Self {
        TracedInterpreterError {
            error: value,
            line: None,
            backtrace: Backtrace::capture(),
        }
    }
}

impl Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpreterError::UnknownCommand(verb) => {
                write!(f, "Error: Unknown command '{}'", verb)
            }
            InterpreterError::MissingValue(name) => {
                write!(f, "Error: No value provided for variable '{}'", name)
            }
            InterpreterError::VariableNotFound(name) => {
                write!(f, "Error: Variable '{}' not found!", name)
            }
            InterpreterError::DivisionByZero(name) => {
                write!(f, "Error: Division by zero in '{}'!", name)
            }
            InterpreterError::InvalidOperand(verb, token) => {
                write!(f, "Error: Invalid integer operand '{}' for '{}'", token, verb)
            }
            InterpreterError::MissingVariableName(verb) => {
                write!(f, "Error: Missing variable name for '{}'", verb)
            }
        }
    }
}

impl Error for TracedInterpreterError {}

impl Display for TracedInterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        if self.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\nBacktrace:\n{}", self.backtrace)?;
        }
        Ok(())
    }
}
