//! Prose rendering of store outcomes.
//!
//! The store speaks in tagged enums; the agent and REST boundaries speak in
//! human-readable strings. All user-facing wording lives here so error kinds
//! stay testable independent of phrasing.

use super::store::{ReadOutcome, StoreError};

/// Which operation failed, for operation-specific wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteOp {
    Read,
    Write,
    List,
    Delete,
}

pub fn describe_read(name: &str, outcome: &ReadOutcome) -> String {
    match outcome {
        ReadOutcome::Content(content) => format!("Contents of '{}':\n\n{}", name, content),
        ReadOutcome::Blank => format!("Note '{}' exists but is empty.", name),
    }
}

pub fn describe_write(name: &str, chars: usize) -> String {
    format!("Successfully wrote {} characters to '{}'.", chars, name)
}

pub fn describe_list(names: &[String]) -> String {
    match names.len() {
        0 => "No notes found. The notes folder is empty.".to_string(),
        1 => format!("Found 1 note: {}", names[0]),
        n => {
            let listing: Vec<String> = names.iter().map(|n| format!("  - {}", n)).collect();
            format!("Found {} notes:\n{}", n, listing.join("\n"))
        }
    }
}

pub fn describe_delete(name: &str) -> String {
    format!("Successfully deleted '{}'.", name)
}

pub fn describe_error(op: NoteOp, err: &StoreError) -> String {
    match (op, err) {
        (_, StoreError::Name(e)) => format!("Error: {}", e),

        (NoteOp::Delete, StoreError::NotFound { name, .. }) => format!(
            "Error: Note '{}' does not exist. Cannot delete a file that doesn't exist.",
            name
        ),
        (_, StoreError::NotFound { name, available }) => {
            if available.is_empty() {
                format!("Error: Note '{}' not found. The notes folder is empty.", name)
            } else {
                format!(
                    "Error: Note '{}' not found. Available notes: {}",
                    name,
                    available.join(", ")
                )
            }
        }

        (NoteOp::List, StoreError::Permission { .. }) => {
            "Error: Permission denied. Cannot access the notes folder.".to_string()
        }
        (NoteOp::Read, StoreError::Permission { name }) => {
            format!("Error: Permission denied. Cannot read '{}'.", name)
        }
        (NoteOp::Write, StoreError::Permission { name }) => {
            format!("Error: Permission denied. Cannot write to '{}'.", name)
        }
        (NoteOp::Delete, StoreError::Permission { name }) => {
            format!("Error: Permission denied. Cannot delete '{}'.", name)
        }

        (_, StoreError::NotUtf8 { name }) => format!(
            "Error: Cannot read '{}'. The file contains invalid characters.",
            name
        ),

        (NoteOp::Read, StoreError::Io { name, source }) => {
            format!("Error reading '{}': {}", name, source)
        }
        (NoteOp::Write, StoreError::Io { name, source }) => {
            format!("Error: Cannot write to '{}'. {}", name, source)
        }
        (NoteOp::List, StoreError::Io { source, .. }) => format!("Error listing notes: {}", source),
        (NoteOp::Delete, StoreError::Io { name, source }) => {
            format!("Error deleting '{}': {}", name, source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::sanitize::NameError;

    #[test]
    fn test_describe_read() {
        assert_eq!(
            describe_read("x.txt", &ReadOutcome::Content("hi".to_string())),
            "Contents of 'x.txt':\n\nhi"
        );
        assert_eq!(
            describe_read("x.txt", &ReadOutcome::Blank),
            "Note 'x.txt' exists but is empty."
        );
    }

    #[test]
    fn test_describe_list() {
        assert_eq!(describe_list(&[]), "No notes found. The notes folder is empty.");
        assert_eq!(
            describe_list(&["a.txt".to_string()]),
            "Found 1 note: a.txt"
        );
        assert_eq!(
            describe_list(&["a.txt".to_string(), "b.txt".to_string()]),
            "Found 2 notes:\n  - a.txt\n  - b.txt"
        );
    }

    #[test]
    fn test_not_found_wording_differs_per_op() {
        let err = StoreError::NotFound {
            name: "x.txt".to_string(),
            available: vec!["a.txt".to_string()],
        };
        assert_eq!(
            describe_error(NoteOp::Read, &err),
            "Error: Note 'x.txt' not found. Available notes: a.txt"
        );
        assert_eq!(
            describe_error(NoteOp::Delete, &err),
            "Error: Note 'x.txt' does not exist. Cannot delete a file that doesn't exist."
        );
    }

    #[test]
    fn test_validation_wording_passes_through() {
        let err = StoreError::Name(NameError::Traversal);
        let msg = describe_error(NoteOp::Write, &err);
        assert!(msg.starts_with("Error: Filename cannot contain path separators"));
    }
}
