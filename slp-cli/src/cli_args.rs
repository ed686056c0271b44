use clap::Parser;
use slp_core::Interpreter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Script file to execute (conventionally ending in `.slp`).
    pub source_filename: Option<String>,

    /// Enter interactive mode after running the script.
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable warnings (e.g. ignored extra words, variables changing type).
    #[arg(short, long)]
    pub warnings: bool,

    /// Enable line number tracing.
    #[arg(short, long)]
    pub tracing: bool,
}

impl CliArgs {
    pub fn create_interpreter(&self) -> Interpreter {
        let mut interpreter = Interpreter::default();
        interpreter.enable_warnings = self.warnings;
        interpreter.enable_tracing = self.tracing;
        interpreter
    }
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_valid() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn flags_configure_interpreter() {
        let args = CliArgs::parse_from(["slp", "-w", "-t", "script.slp"]);
        assert_eq!(args.source_filename.as_deref(), Some("script.slp"));
        assert!(!args.interactive);
        let interpreter = args.create_interpreter();
        assert!(interpreter.enable_warnings);
        assert!(interpreter.enable_tracing);
    }

    #[test]
    fn filename_is_optional_at_parse_time() {
        let args = CliArgs::parse_from(["slp"]);
        assert_eq!(args.source_filename, None);
    }
}
