use crate::{
    interpreter_error::{InterpreterError, TracedInterpreterError},
    interpreter_output::InterpreterOutput,
    operators::ArithmeticOperator,
    program::Program,
    symbol::Symbol,
    tokenizer::{trim_slp_whitespace, Tokenizer},
    value::{try_parse_integer, Value},
    variables::Variables,
};

#[derive(Default, Debug, PartialEq, Copy, Clone)]
pub enum InterpreterState {
    #[default]
    Idle,
    Running,
}

#[derive(Default)]
pub struct Interpreter {
    output: Vec<InterpreterOutput>,
    program: Program,
    pub enable_warnings: bool,
    pub enable_tracing: bool,
    state: InterpreterState,
    current_line: Option<usize>,
    variables: Variables,
}

impl core::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
            .field("output", &self.output)
            .field("program", &self.program)
            .field("enable_warnings", &self.enable_warnings)
            .field("enable_tracing", &self.enable_tracing)
            .field("state", &self.state)
            .field("current_line", &self.current_line)
            .field("variables", &self.variables)
            .finish()
    }
}

impl Interpreter {
    pub fn take_output(&mut self) -> Vec<InterpreterOutput> {
        std::mem::take(&mut self.output)
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn get_state(&self) -> InterpreterState {
        self.state
    }

    fn print(&mut self, string: String) {
        self.output.push(InterpreterOutput::Print(string));
    }

    fn warn<T: AsRef<str>>(&mut self, message: T) {
        if self.enable_warnings {
            self.output.push(InterpreterOutput::Warning(
                message.as_ref().to_string(),
                self.current_line,
            ));
        }
    }

    fn warn_about_extra_words(&mut self, tokenizer: &mut Tokenizer) {
        if tokenizer.discard_remaining_words() {
            self.warn("EXTRA IGNORED");
        }
    }

    fn expect_variable_name(
        verb: &'static str,
        tokenizer: &mut Tokenizer,
    ) -> Result<Symbol, TracedInterpreterError> {
        match tokenizer.next() {
            Some(name) => Ok(name.into()),
            None => Err(InterpreterError::MissingVariableName(verb).into()),
        }
    }

    fn assign_value(&mut self, name: Symbol, value: Value) {
        let new_type = value.type_name();
        if let Some(previous) = self.variables.set(name.clone(), value) {
            if previous.type_name() != new_type {
                self.warn(format!(
                    "Variable '{}' changed type from {} to {}.",
                    name,
                    previous.type_name(),
                    new_type
                ));
            }
        }
    }

    fn evaluate_set_statement(
        &mut self,
        tokenizer: &mut Tokenizer,
    ) -> Result<(), TracedInterpreterError> {
        let name = Interpreter::expect_variable_name("set", tokenizer)?;
        // Unlike every other statement, the value is the rest of the line,
        // so it may contain spaces (or be empty).
        let value = Value::infer(trim_slp_whitespace(tokenizer.remainder()));
        self.assign_value(name, value);
        Ok(())
    }

    fn evaluate_var_statement(
        &mut self,
        tokenizer: &mut Tokenizer,
    ) -> Result<(), TracedInterpreterError> {
        let name = Interpreter::expect_variable_name("var", tokenizer)?;
        let Some(literal) = tokenizer.next() else {
            return Err(InterpreterError::MissingValue(name).into());
        };
        self.warn_about_extra_words(tokenizer);
        let value = Value::infer(literal);
        let confirmation = match &value {
            Value::Integer(number) => {
                format!("Integer variable '{}' initialized to {}", name, number)
            }
            Value::Text(string) => {
                format!("String variable '{}' initialized to \"{}\"", name, string)
            }
        };
        self.assign_value(name, value);
        self.print(confirmation);
        Ok(())
    }

    fn evaluate_print_statement(
        &mut self,
        tokenizer: &mut Tokenizer,
    ) -> Result<(), TracedInterpreterError> {
        let name = Interpreter::expect_variable_name("print", tokenizer)?;
        self.warn_about_extra_words(tokenizer);
        let Some(value) = self.variables.get(&name).map(Value::to_string) else {
            return Err(InterpreterError::VariableNotFound(name).into());
        };
        self.print(value);
        Ok(())
    }

    fn evaluate_arithmetic_statement(
        &mut self,
        operator: ArithmeticOperator,
        tokenizer: &mut Tokenizer,
    ) -> Result<(), TracedInterpreterError> {
        let name = Interpreter::expect_variable_name(operator.verb(), tokenizer)?;

        // A text variable of the same name counts as missing.
        let Some(&Value::Integer(current)) = self.variables.get(&name) else {
            return Err(InterpreterError::VariableNotFound(name).into());
        };

        let operand_token = tokenizer.next().unwrap_or_default();
        let Some(operand) = try_parse_integer(operand_token) else {
            return Err(
                InterpreterError::InvalidOperand(operator.verb(), operand_token.to_string()).into(),
            );
        };
        self.warn_about_extra_words(tokenizer);

        let Some(result) = operator.evaluate(current, operand) else {
            return Err(InterpreterError::DivisionByZero(name).into());
        };
        self.variables.set(name, Value::Integer(result));
        Ok(())
    }

    fn evaluate_statement<T: AsRef<str>>(&mut self, line: T) -> Result<(), TracedInterpreterError> {
        let mut tokenizer = Tokenizer::new(line.as_ref());

        // Blank lines are skipped rather than reported as an unknown
        // command with an empty name.
        let Some(verb) = tokenizer.next() else {
            return Ok(());
        };

        match verb {
            "set" => self.evaluate_set_statement(&mut tokenizer),
            "var" => self.evaluate_var_statement(&mut tokenizer),
            "print" => self.evaluate_print_statement(&mut tokenizer),
            _ => match ArithmeticOperator::from_verb(verb) {
                Some(operator) => self.evaluate_arithmetic_statement(operator, &mut tokenizer),
                None => Err(InterpreterError::UnknownCommand(verb.to_string()).into()),
            },
        }
    }

    fn run_next_line(&mut self) -> Result<(), TracedInterpreterError> {
        let Some((line_number, line)) = self.program.next_line() else {
            self.return_to_idle_state();
            return Ok(());
        };
        self.current_line = Some(line_number);
        if self.enable_tracing && Tokenizer::new(&line).next().is_some() {
            self.output.push(InterpreterOutput::Trace(line_number));
        }

        let result = self.evaluate_statement(&line).map_err(|mut err| {
            err.set_line_number(line_number);
            err
        });

        if !self.program.has_next_line() {
            self.return_to_idle_state();
        }

        result
    }

    fn return_to_idle_state(&mut self) {
        self.program = Program::default();
        self.current_line = None;
        self.state = InterpreterState::Idle;
    }

    /// Stop a running program, noting the line we stopped after.
    pub fn break_at_current_location(&mut self) {
        self.output.push(InterpreterOutput::Break(self.current_line));
        self.return_to_idle_state();
    }

    /// Start running the given program text.
    ///
    /// This only *starts* evaluation. In order to keep running it to completion,
    /// the caller must also call `continue_evaluating` for as long as the
    /// interpreter's state is `InterpreterState::Running`.
    pub fn start_evaluating<T: AsRef<str>>(&mut self, program: T) {
        assert_eq!(self.state, InterpreterState::Idle);
        self.program = Program::new(program);
        self.state = InterpreterState::Running;
    }

    /// Runs exactly one line of the current program.
    ///
    /// An error only applies to the line that raised it; the interpreter
    /// stays in the `Running` state if there are more lines to run.
    pub fn continue_evaluating(&mut self) -> Result<(), TracedInterpreterError> {
        assert_eq!(self.state, InterpreterState::Running);
        self.run_next_line()
    }

    /// Immediately evaluate a single line outside of any program.
    pub fn evaluate_line<T: AsRef<str>>(&mut self, line: T) -> Result<(), TracedInterpreterError> {
        assert_eq!(self.state, InterpreterState::Idle);
        self.evaluate_statement(line)
    }

    /// Runs every line of the program to completion. Any errors are queued
    /// as output alongside everything else the program printed.
    pub fn execute<T: AsRef<str>>(&mut self, program: T) {
        self.start_evaluating(program);
        while self.state == InterpreterState::Running {
            if let Err(err) = self.continue_evaluating() {
                self.output.push(InterpreterOutput::Error(err));
            }
        }
    }
}
