//! Multi-line source helpers.
//!
//! A [`Document`] is the text currently held by an editor. It is split on
//! `\n` only; a `\r` before the newline stays part of its line and is
//! tokenized like any other character.

use std::ops::RangeInclusive;

use log::trace;

use crate::{lexer::tokenize_line, tokens::Token};

/// Number of lines in `text`, as shown by an editor gutter.
///
/// Empty text counts as a single empty line, and a trailing newline starts
/// a new, empty line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// One-based gutter numbers for `text`.
pub fn line_numbers(text: &str) -> RangeInclusive<usize> {
    1..=line_count(text)
}

/// A borrowed view of multi-line diagram source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'src> {
    text: &'src str,
}

impl<'src> Document<'src> {
    pub fn new(text: &'src str) -> Self {
        Self { text }
    }

    /// Iterate over the lines without their `\n` separators.
    pub fn lines(&self) -> impl Iterator<Item = &'src str> + use<'src> {
        self.text.split('\n')
    }

    pub fn line_count(&self) -> usize {
        line_count(self.text)
    }

    pub fn line_numbers(&self) -> RangeInclusive<usize> {
        line_numbers(self.text)
    }

    /// Tokenize every line independently.
    ///
    /// Yields one token list per line, in order. Spans are relative to the
    /// start of their own line.
    pub fn tokens(&self) -> impl Iterator<Item = Vec<Token<'src>>> + use<'src> {
        trace!(lines = self.line_count(); "Tokenizing document");
        self.lines().map(tokenize_line)
    }
}

impl<'src> From<&'src str> for Document<'src> {
    fn from(text: &'src str) -> Self {
        Self::new(text)
    }
}
