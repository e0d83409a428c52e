use std::fmt;

use crate::id::*;

/// An autocomplete prediction for a partially typed address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSuggestion {
    pub id: Id,
    pub main_text: String,
    pub secondary_text: String,
    /// The full address text that is geocoded on selection.
    pub description: String,
}

impl fmt::Display for SearchSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.secondary_text.is_empty() {
            f.write_str(&self.main_text)
        } else {
            write!(f, "{} {}", self.main_text, self.secondary_text)
        }
    }
}
