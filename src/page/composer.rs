//! Pending note input

use crate::operations::parse_content;

/// The text typed in the note input, not yet submitted
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    input: String,
}

impl Composer {
    /// Composer holding previously typed text
    pub fn with_input(input: String) -> Self {
        Self { input }
    }

    /// Raw text, as typed
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Is the submit control enabled?
    ///
    /// Blank or whitespace-only input keeps it disabled
    pub fn can_submit(&self) -> bool {
        self.submission().is_some()
    }

    /// Trimmed text that a submit would send
    pub fn submission(&self) -> Option<&str> {
        parse_content(&self.input).ok()
    }
}
