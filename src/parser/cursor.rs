use crate::error::EvalError;

/// Scan position over the expression text.
///
/// `position` is a byte offset that only moves forward and never passes the
/// end of the input.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    input: &'src str,
    position: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(input: &'src str) -> Self {
        Self { input, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remainder(&self) -> &'src str {
        &self.input[self.position..]
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.remainder().chars().nth(n)
    }

    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes `expected` if it is the next character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.position += 1;
        }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.position += c.len_utf8();
        }
    }

    /// Scans a maximal run of ASCII alphanumerics and underscores. The caller
    /// has already checked that the run starts with a letter.
    pub fn scan_identifier(&mut self) -> &'src str {
        let start = self.position;
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        &self.input[start..self.position]
    }

    /// Scans a numeric literal: digits with at most one decimal point, then an
    /// optional exponent made of `e`/`E`, an optional sign and one or more
    /// digits.
    pub fn scan_number(&mut self) -> Result<&'src str, EvalError> {
        let start = self.position;
        let mut seen_dot = false;

        while let Some(c) = self.peek() {
            if c == '.' {
                if seen_dot {
                    self.advance_while(|c| c.is_ascii_digit() || c == '.');
                    return Err(EvalError::InvalidNumberFormat(
                        self.input[start..self.position].to_string(),
                    ));
                }
                seen_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            self.position += 1;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let digits_at = match self.peek_nth(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if !self.peek_nth(digits_at).is_some_and(|c| c.is_ascii_digit()) {
                self.position += digits_at.min(self.remainder().len());
                return Err(EvalError::InvalidNumberFormat(
                    self.input[start..self.position].to_string(),
                ));
            }
            self.position += digits_at;
            self.advance_while(|c| c.is_ascii_digit());
        }

        Ok(&self.input[start..self.position])
    }
}
