use std::fmt::Display;

use crate::interpreter_error::TracedInterpreterError;

#[derive(Debug)]
pub enum InterpreterOutput {
    /// A line meant for standard output, without its trailing newline.
    Print(String),
    Error(TracedInterpreterError),
    Warning(String, Option<usize>),
    Trace(usize),
    Break(Option<usize>),
}

impl InterpreterOutput {
    fn get_line_number_suffix(line: &Option<usize>) -> String {
        line.map(|line| format!(" (line {})", line))
            .unwrap_or_default()
    }

    /// Whether this belongs on standard error rather than standard output.
    pub fn is_diagnostic(&self) -> bool {
        !matches!(self, InterpreterOutput::Print(_))
    }
}

impl Display for InterpreterOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterpreterOutput::Print(string) => string.fmt(f),
            InterpreterOutput::Error(err) => err.fmt(f),
            InterpreterOutput::Warning(message, line) => {
                write!(
                    f,
                    "Warning{}: {}",
                    InterpreterOutput::get_line_number_suffix(line),
                    message
                )
            }
            InterpreterOutput::Break(line) => {
                write!(
                    f,
                    "BREAK{}",
                    InterpreterOutput::get_line_number_suffix(line)
                )
            }
            InterpreterOutput::Trace(line) => write!(f, "#{}", line),
        }
    }
}
