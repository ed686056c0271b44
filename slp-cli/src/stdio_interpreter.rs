use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

use crate::cli_args::CliArgs;
use crate::stdio_printer::StdioPrinter;
use colored::Color;
use rustyline::{error::ReadlineError, DefaultEditor};
use slp_core::{Interpreter, InterpreterOutput, InterpreterState, TracedInterpreterError};

const HISTORY_FILENAME: &'static str = ".slp-history.txt";

fn get_history_path() -> Option<PathBuf> {
    // std::env::home_dir() is deprecated because it's wrong on some
    // Windows shells, but history is optional anyways.
    #[allow(deprecated)]
    if let Some(path) = std::env::home_dir() {
        if path.exists() {
            Some(path.join(HISTORY_FILENAME))
        } else {
            None
        }
    } else {
        None
    }
}

pub struct StdioInterpreter {
    args: CliArgs,
    printer: StdioPrinter,
    interpreter: Interpreter,
}

impl StdioInterpreter {
    pub fn new(args: CliArgs) -> Self {
        let interpreter = args.create_interpreter();
        StdioInterpreter {
            args,
            printer: StdioPrinter::new(),
            interpreter,
        }
    }

    fn show_interpreter_output(&mut self) {
        for output in self.interpreter.take_output() {
            self.printer.show(output);
        }
    }

    fn show_error(&mut self, err: TracedInterpreterError) {
        self.printer.show(InterpreterOutput::Error(err));
    }

    fn read_source_file(&mut self) -> Result<String, i32> {
        let Some(filename) = &self.args.source_filename else {
            self.printer.eprintln(
                "Error: No file provided. Usage: slp <filename>.slp",
                Color::Red,
            );
            return Err(1);
        };
        let Ok(bytes) = std::fs::read(filename) else {
            self.printer.eprintln(
                format!("Error: Could not open file '{}'!", filename),
                Color::Red,
            );
            return Err(1);
        };
        // Scripts aren't required to be UTF-8; invalid bytes become U+FFFD.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Runs the whole script, checking for Ctrl-C between lines.
    ///
    /// Errors on individual lines are reported but never stop the script.
    fn run_source_file(&mut self, code: String, interrupted: &Receiver<()>) -> Result<(), i32> {
        self.interpreter.start_evaluating(code);
        while self.interpreter.get_state() == InterpreterState::Running {
            let result = self.interpreter.continue_evaluating();

            // Regardless of whether an error occurred, show any buffered output.
            self.show_interpreter_output();

            if let Err(err) = result {
                self.show_error(err);
            }

            if interrupted.try_recv().is_ok()
                && self.interpreter.get_state() == InterpreterState::Running
            {
                self.interpreter.break_at_current_location();
                self.show_interpreter_output();
                if !self.args.interactive {
                    return Err(1);
                }
            }
        }
        Ok(())
    }

    fn run_prompt(&mut self, rl: &mut DefaultEditor) -> Result<(), i32> {
        println!(
            "Welcome to the slp interpreter v{}.",
            env!("CARGO_PKG_VERSION")
        );
        println!("Press CTRL-C to exit.");

        loop {
            match rl.readline("] ") {
                Ok(line) => {
                    if let Err(err) = rl.add_history_entry(line.as_str()) {
                        eprintln!("WARNING: Failed to add history entry ({:?}).", err);
                    }
                    let result = self.interpreter.evaluate_line(&line);
                    self.show_interpreter_output();
                    if let Err(err) = result {
                        self.show_error(err);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    self.printer
                        .eprintln("CTRL-C pressed, exiting.", Color::Yellow);
                    return Ok(());
                }
                Err(ReadlineError::Eof) => {
                    return Ok(());
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    return Err(1);
                }
            }
        }
    }

    pub fn run(&mut self) -> i32 {
        match self.run_impl() {
            Ok(_) => 0,
            Err(exit_code) => exit_code,
        }
    }

    fn run_impl(&mut self) -> Result<(), i32> {
        let code = self.read_source_file()?;

        let (tx, rx) = channel();
        if let Err(err) = ctrlc::set_handler(move || {
            let _ = tx.send(());
        }) {
            eprintln!("WARNING: Error setting Ctrl-C handler ({}).", err);
        }

        self.run_source_file(code, &rx)?;

        if !self.args.interactive {
            return Ok(());
        }

        let Ok(mut rl) = DefaultEditor::new() else {
            eprintln!("Initializing DefaultEditor failed!");
            return Err(1);
        };

        let history_path = get_history_path();

        // Note that we're ignoring the result here, which is generally OK--if it
        // errors, it's probably because the file doesn't exist, and even then
        // history is optional anyways.
        history_path.clone().map(|path| rl.load_history(&path));

        let prompt_result = self.run_prompt(&mut rl);

        // Again, we're ignoring the result here, see above for rationale.
        history_path.map(|path| rl.save_history(&path));

        prompt_result
    }
}
