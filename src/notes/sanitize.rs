//! Filename validation for the note sandbox.
//!
//! Pure string checks, no filesystem access. A name that passes here is safe
//! to join onto the notes root as a single path segment.

use thiserror::Error;

/// Maximum accepted filename length in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Why a filename was rejected. Display strings are the caller-facing reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Filename cannot be empty.")]
    Empty,
    #[error(
        "Filename cannot contain path separators (/, \\) or directory navigation (..). Use only simple filenames like 'mynote.txt'."
    )]
    Traversal,
    #[error(
        "Filename contains invalid characters. Only letters, numbers, dots, dashes, and underscores are allowed."
    )]
    InvalidChars,
    #[error("Filename is too long. Maximum length is 255 characters.")]
    TooLong,
}

/// Validate an untrusted filename.
///
/// Checks run in order and short-circuit: empty, traversal tokens, character
/// whitelist, length. The whitelist already excludes separators, but the
/// traversal check stays independent so a future whitelist change (say,
/// allowing Unicode) cannot silently reopen an escape hole.
pub fn validate(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(NameError::Traversal);
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(NameError::InvalidChars);
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(NameError::TooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_filenames() {
        assert_eq!(validate("note_1.txt"), Ok(()));
        assert_eq!(validate("mynote.txt"), Ok(()));
        assert_eq!(validate("UPPER-lower.09"), Ok(()));
        assert_eq!(validate("a"), Ok(()));
        assert_eq!(validate(&"x".repeat(255)), Ok(()));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate(""), Err(NameError::Empty));
    }

    #[test]
    fn test_rejects_traversal() {
        assert_eq!(validate("../../etc/passwd"), Err(NameError::Traversal));
        assert_eq!(validate("notes/sub.txt"), Err(NameError::Traversal));
        assert_eq!(validate("a\\b.txt"), Err(NameError::Traversal));
        assert_eq!(validate(".."), Err(NameError::Traversal));
        // ".." anywhere is a traversal, even embedded in an otherwise valid name
        assert_eq!(validate("a..b.txt"), Err(NameError::Traversal));
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(validate("my note.txt"), Err(NameError::InvalidChars));
        assert_eq!(validate("note!.txt"), Err(NameError::InvalidChars));
        assert_eq!(validate("ünïcode.txt"), Err(NameError::InvalidChars));
        assert_eq!(validate("null\0byte"), Err(NameError::InvalidChars));
    }

    #[test]
    fn test_rejects_too_long() {
        assert_eq!(validate(&"x".repeat(256)), Err(NameError::TooLong));
    }

    #[test]
    fn test_traversal_wins_over_charset() {
        // Contains both a space and a slash; the traversal check fires first.
        assert_eq!(validate("my dir/note.txt"), Err(NameError::Traversal));
    }

    #[test]
    fn test_single_dot_is_allowed_by_charset() {
        // "." is charset-valid and has no traversal token; the store joins it
        // as a single segment, which still cannot leave the root.
        assert_eq!(validate("."), Ok(()));
        assert_eq!(validate(".hidden"), Ok(()));
    }
}
