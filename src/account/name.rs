//! Account name input filtering.

/// Message shown when typed input contained characters that were dropped.
pub const INVALID_NAME_MESSAGE: &str = "Please enter only letters without spaces.";

/// Result of filtering a typed name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SanitizedName {
    /// The input with every non-letter removed.
    pub name: String,
    /// Whether anything was removed.
    pub had_invalid: bool,
}

impl SanitizedName {
    /// Inline error for the name field, if any.
    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.had_invalid.then_some(INVALID_NAME_MESSAGE)
    }
}

/// Whether `c` may appear in an account name.
///
/// ASCII letters, Latin-1 Supplement through Latin Extended-B letters,
/// Latin Extended Additional, and schwa.
#[must_use]
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{00C0}'..='\u{024F}').contains(&c)
        || ('\u{1E00}'..='\u{1EFF}').contains(&c)
        || c == '\u{0259}'
}

/// Drop every character that may not appear in a name.
#[must_use]
pub fn sanitize_name(input: &str) -> SanitizedName {
    let name: String = input.chars().filter(|&c| is_name_char(c)).collect();
    let had_invalid = name.len() != input.len();
    SanitizedName { name, had_invalid }
}
