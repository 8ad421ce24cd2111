mod delete_note;
mod list_notes;
mod read_note;
mod write_note;

pub use delete_note::DeleteNoteTool;
pub use list_notes::ListNotesTool;
pub use read_note::ReadNoteTool;
pub use write_note::WriteNoteTool;
