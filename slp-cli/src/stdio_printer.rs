use std::io::{stderr, stdout, IsTerminal, Write};

use colored::*;
use slp_core::InterpreterOutput;

/// Writes interpreter output to the standard streams, one line per
/// item. Diagnostics go to stderr, coloured if it's a terminal.
pub struct StdioPrinter {
    colorize: bool,
}

impl StdioPrinter {
    pub fn new() -> Self {
        StdioPrinter {
            colorize: stderr().is_terminal(),
        }
    }

    pub fn println<T: AsRef<str>>(&mut self, value: T) {
        let mut out = stdout().lock();
        // Ignore write errors, e.g. from a closed pipe.
        let _ = writeln!(out, "{}", value.as_ref());
    }

    /// Flushes stdout first, so that anything the script already printed
    /// shows up before the diagnostic.
    pub fn eprintln<T: AsRef<str>>(&mut self, value: T, color: Color) {
        let _ = stdout().flush();
        let message = if self.colorize {
            value.as_ref().color(color).to_string()
        } else {
            value.as_ref().to_string()
        };
        let _ = writeln!(stderr().lock(), "{}", message);
    }

    pub fn show(&mut self, output: InterpreterOutput) {
        match output {
            InterpreterOutput::Print(string) => self.println(string),
            InterpreterOutput::Error(_) => self.eprintln(output.to_string(), Color::Red),
            InterpreterOutput::Trace(_) => self.eprintln(output.to_string(), Color::Blue),
            InterpreterOutput::Warning(..) | InterpreterOutput::Break(_) => {
                self.eprintln(output.to_string(), Color::Yellow)
            }
        }
    }
}
