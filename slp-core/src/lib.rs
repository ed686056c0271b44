mod interpreter;
mod interpreter_error;
mod interpreter_output;
mod operators;
mod program;
mod symbol;
mod tokenizer;
mod value;
mod variables;

pub use interpreter::{Interpreter, InterpreterState};
pub use interpreter_error::{InterpreterError, TracedInterpreterError};
pub use interpreter_output::InterpreterOutput;
pub use operators::ArithmeticOperator;
pub use symbol::Symbol;
pub use value::Value;
pub use variables::Variables;
