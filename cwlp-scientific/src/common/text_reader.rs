use cwlp_core::prelude::{Float, ModelError, ModelResult};
use std::io::{BufReader, Read};

pub(crate) fn read_text<R: Read>(reader: &mut BufReader<R>) -> ModelResult<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    Ok(content)
}

/// A token with its one-based source line used to report located parse errors.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub line: usize,
}

/// A sequential cursor over input tokens. Lines starting with `#` are treated as comments
/// and skipped without affecting line numbering of the rest.
pub(crate) struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over whitespace separated tokens.
    pub fn whitespace(text: &'a str) -> Self {
        Self::create(text, false)
    }

    /// Creates a stream which additionally emits `=[](),;` characters as own tokens.
    pub fn punctuated(text: &'a str) -> Self {
        Self::create(text, true)
    }

    fn create(text: &'a str, punctuated: bool) -> Self {
        let tokens = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with('#'))
            .flat_map(|(idx, line)| split_line(line, punctuated).into_iter().map(move |text| Token { text, line: idx + 1 }))
            .collect();

        Self { tokens, position: 0 }
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).copied()
    }

    /// Consumes and returns the next token, reporting the expectation when input ends.
    pub fn next_token(&mut self, expectation: &str) -> ModelResult<Token<'a>> {
        let token = self.tokens.get(self.position).copied().ok_or_else(|| ModelError::Parse {
            line: self.tokens.last().map(|token| token.line),
            message: format!("unexpected end of input, expected {expectation}"),
        })?;
        self.position += 1;

        Ok(token)
    }

    /// Consumes the next token and requires it to match the given text.
    pub fn expect(&mut self, text: &str) -> ModelResult<Token<'a>> {
        let token = self.next_token(&format!("'{text}'"))?;
        if token.text == text {
            Ok(token)
        } else {
            Err(ModelError::parse_at(token.line, format!("expected '{text}', got '{}'", token.text)))
        }
    }

    /// Reads a positive integer.
    pub fn next_count(&mut self, expectation: &str) -> ModelResult<usize> {
        let token = self.next_token(expectation)?;
        match token.text.parse::<usize>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ModelError::parse_at(token.line, format!("expected {expectation} as a positive integer, got '{}'", token.text))),
        }
    }

    /// Reads a non-negative number.
    pub fn next_non_negative(&mut self, expectation: &str) -> ModelResult<Float> {
        let token = self.next_token(expectation)?;
        match token.text.parse::<Float>() {
            Ok(value) if value >= 0. => Ok(value),
            Ok(value) => Err(ModelError::parse_at(token.line, format!("{expectation} must be non-negative, got {value}"))),
            Err(_) => Err(ModelError::parse_at(token.line, format!("expected {expectation} as a number, got '{}'", token.text))),
        }
    }
}

fn split_line(line: &str, punctuated: bool) -> Vec<&str> {
    if !punctuated {
        return line.split_whitespace().collect();
    }

    let mut tokens = Vec::new();
    let mut start = None;
    for (idx, c) in line.char_indices() {
        if c.is_whitespace() || is_punctuation(c) {
            if let Some(from) = start.take() {
                tokens.push(&line[from..idx]);
            }
            if is_punctuation(c) {
                tokens.push(&line[idx..idx + c.len_utf8()]);
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(from) = start {
        tokens.push(&line[from..]);
    }

    tokens
}

fn is_punctuation(c: char) -> bool {
    matches!(c, '=' | '[' | ']' | '(' | ')' | ',' | ';')
}
