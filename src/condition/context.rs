//! Clause-wide parameter accumulator and placeholder numbering.

use std::fmt;

use super::ScalarValue;

/// Positional parameter marker (`$1`, `$2`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placeholder(pub usize);

impl Placeholder {
    /// Returns the 1-based parameter index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Clause-wide accumulator shared by every condition of one WHERE clause.
///
/// Holds the bound parameters in placeholder order and the cursor naming the
/// next unused placeholder. Conditions of a clause must be mutated strictly in
/// sequence against the same context.
#[derive(Clone, Debug, PartialEq)]
pub struct ClauseContext {
    params: Vec<ScalarValue>,
    offset: usize,
}

impl ClauseContext {
    /// Creates an empty context numbering placeholders from `$1`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_offset(1)
    }

    /// Creates an empty context whose next placeholder is `$offset`.
    #[must_use]
    pub fn with_offset(offset: usize) -> Self {
        Self {
            params: Vec::new(),
            offset,
        }
    }

    /// Next unused placeholder index.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Parameters bound so far, in placeholder order.
    #[must_use]
    pub fn params(&self) -> &[ScalarValue] {
        &self.params
    }

    /// Consumes the context, returning the bound parameters.
    #[must_use]
    pub fn into_params(self) -> Vec<ScalarValue> {
        self.params
    }

    /// Appends a parameter without touching the offset.
    pub fn push_param<V>(&mut self, value: V)
    where
        V: Into<ScalarValue>,
    {
        self.params.push(value.into());
    }

    /// Placeholder at the current offset, without consuming it.
    #[must_use]
    pub fn current_placeholder(&self) -> Placeholder {
        Placeholder(self.offset)
    }

    /// Consumes the placeholder at the current offset.
    pub fn next_placeholder(&mut self) -> Placeholder {
        let placeholder = Placeholder(self.offset);
        self.offset += 1;
        placeholder
    }

    /// Moves the offset forward by `slots`.
    ///
    /// The single-placeholder mutators leave the offset in place; callers that
    /// continue the clause afterwards advance it here.
    pub fn advance(&mut self, slots: usize) {
        self.offset += slots;
    }
}

impl Default for ClauseContext {
    fn default() -> Self {
        Self::new()
    }
}
