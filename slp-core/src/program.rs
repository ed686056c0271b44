/// The lines of a script that's being executed, along with a cursor
/// pointing at the next one to run.
#[derive(Default, Debug)]
pub struct Program {
    lines: Vec<String>,
    next_index: usize,
}

impl Program {
    pub fn new<T: AsRef<str>>(source: T) -> Self {
        Program {
            lines: source.as_ref().split('\n').map(str::to_owned).collect(),
            next_index: 0,
        }
    }

    pub fn has_next_line(&self) -> bool {
        self.next_index < self.lines.len()
    }

    /// Advances the cursor, returning the 1-based line number and
    /// contents of the line it was pointing at.
    pub fn next_line(&mut self) -> Option<(usize, String)> {
        let line = self.lines.get(self.next_index)?.clone();
        self.next_index += 1;
        Some((self.next_index, line))
    }
}

#[cfg(test)]
mod tests {
    use super::Program;

    #[test]
    fn lines_are_numbered_from_one() {
        let mut program = Program::new("set a 1\nprint a");
        assert_eq!(program.next_line(), Some((1, "set a 1".to_string())));
        assert!(program.has_next_line());
        assert_eq!(program.next_line(), Some((2, "print a".to_string())));
        assert!(!program.has_next_line());
        assert_eq!(program.next_line(), None);
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        let mut program = Program::new("print a\n");
        program.next_line();
        assert_eq!(program.next_line(), Some((2, String::new())));
    }

    #[test]
    fn default_program_is_empty() {
        assert!(!Program::default().has_next_line());
    }
}
