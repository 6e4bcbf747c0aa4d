//! String helpers for length- and charset-bounded fields.
//!
//! Lengths are counted in Unicode scalar values, not bytes, so "Écho" is four
//! characters long.

/// Number of characters in `value`.
///
/// # Examples
///
/// ```
/// use guildhall_domain::common::char_len;
///
/// assert_eq!(char_len("Écho"), 4);
/// assert_eq!(char_len(""), 0);
/// ```
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Returns true if `value` is empty or only whitespace.
///
/// # Examples
///
/// ```
/// use guildhall_domain::common::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank(" \t "));
/// assert!(!is_blank(" a "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns true if `value` is non-empty and made only of ASCII letters and spaces.
pub fn is_letters_and_spaces(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Extension trait for checking character-length bounds fluently.
///
/// # Examples
///
/// ```
/// use guildhall_domain::common::StringExt;
///
/// assert!("Ember".char_len_within(3, 20));
/// assert!(!"Ed".char_len_within(3, 20));
/// ```
pub trait StringExt {
    /// Returns true if the character count lies in `min..=max`.
    fn char_len_within(&self, min: usize, max: usize) -> bool;
}

impl StringExt for str {
    fn char_len_within(&self, min: usize, max: usize) -> bool {
        (min..=max).contains(&char_len(self))
    }
}
