/// The characters that separate words on a line, and that are trimmed
/// from the value of a `set` statement.
///
/// This is the same set as C's `isspace()` in the default locale, which
/// notably includes vertical tab (unlike `u8::is_ascii_whitespace`).
pub fn is_slp_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

pub fn trim_slp_whitespace(value: &str) -> &str {
    value.trim_matches(is_slp_whitespace)
}

/// Splits a single line into whitespace-delimited words, while still
/// allowing clients to grab everything that hasn't been consumed yet.
pub struct Tokenizer<'a> {
    line: &'a str,
    index: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(line: &'a str) -> Self {
        Tokenizer { line, index: 0 }
    }

    /// Returns everything after the last word consumed, untrimmed.
    pub fn remainder(&self) -> &'a str {
        &self.line[self.index..]
    }

    /// Consumes all remaining words, returning true if there were any.
    pub fn discard_remaining_words(&mut self) -> bool {
        let had_words = self.next().is_some();
        self.index = self.line.len();
        had_words
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remainder();
        let Some(start) = remaining.find(|ch| !is_slp_whitespace(ch)) else {
            self.index = self.line.len();
            return None;
        };
        let word = &remaining[start..];
        let end = word.find(is_slp_whitespace).unwrap_or(word.len());
        self.index += start + end;
        Some(&word[..end])
    }
}
