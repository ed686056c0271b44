mod cli_args;
mod stdio_interpreter;
mod stdio_printer;

use std::process::ExitCode;

use clap::Parser;
use cli_args::CliArgs;
use stdio_interpreter::StdioInterpreter;

fn main() -> ExitCode {
    let mut interpreter = StdioInterpreter::new(CliArgs::parse());
    match interpreter.run() {
        0 => ExitCode::SUCCESS,
        exit_code => ExitCode::from(exit_code as u8),
    }
}
