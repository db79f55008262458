//! Sources of choice tokens: a fixed script or an interactive reader.

use std::io::BufRead;

use crate::error::{FictionError, FictionResult};

/// Normalize a raw token for matching: trimmed and upper-cased.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Something that hands the engine one token per decision.
pub trait ChoiceSource {
    /// Fetch the next raw token for the decision at `node`.
    ///
    /// `Ok(None)` means the source is closed (end of input).
    fn next_token(&mut self, node: &str) -> FictionResult<Option<String>>;

    /// Whether a person is answering. Interactive sources are re-prompted
    /// after an invalid token; scripted sources fail instead.
    fn is_interactive(&self) -> bool;
}

impl<S: ChoiceSource + ?Sized> ChoiceSource for &mut S {
    fn next_token(&mut self, node: &str) -> FictionResult<Option<String>> {
        (**self).next_token(node)
    }

    fn is_interactive(&self) -> bool {
        (**self).is_interactive()
    }
}

/// A predetermined list of tokens, used for smoke-testing playthroughs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    tokens: Vec<String>,
    position: usize,
}

impl ScriptedChoices {
    /// Create a script from a list of tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            position: 0,
        }
    }
}

impl ChoiceSource for ScriptedChoices {
    fn next_token(&mut self, node: &str) -> FictionResult<Option<String>> {
        let token = self
            .tokens
            .get(self.position)
            .cloned()
            .ok_or_else(|| FictionError::ScriptExhausted {
                node: node.to_string(),
            })?;
        self.position += 1;
        Ok(Some(token))
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Line-oriented input from a reader, usually locked stdin.
#[derive(Debug)]
pub struct InteractiveInput<R> {
    reader: R,
}

impl<R: BufRead> InteractiveInput<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ChoiceSource for InteractiveInput<R> {
    fn next_token(&mut self, _node: &str) -> FictionResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
