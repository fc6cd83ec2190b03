//! Server operations on notes
//!
//! The only code allowed to reach the storage. Both the API and the page go
//! through here, so validation happens once.

use core::fmt;

use crate::notes::Note;
use crate::notes::NoteId;
use crate::storage;
use crate::storage::CreateNoteValues;
use crate::storage::Storage;

/// Operation errors
#[derive(Debug)]
pub enum Error {
    /// Input did not pass validation
    Validation(&'static str),

    /// The referenced note does not exist
    NotFound(NoteId),

    /// Storage failed, passed through unchanged
    Storage(storage::Error),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Validation(message) => write!(f, "Validation error: {message}"),
            Error::NotFound(id) => write!(f, "Note {id} not found"),
            Error::Storage(error) => write!(f, "Storage error: {error}"),
        }
    }
}

impl From<storage::Error> for Error {
    fn from(error: storage::Error) -> Self {
        match error {
            storage::Error::NotFound(id) => Error::NotFound(id),
            error @ storage::Error::Connection(_) => Error::Storage(error),
        }
    }
}

/// Result type for all operations
pub type Result<T> = core::result::Result<T, Error>;

/// Trim and validate the content of a note
///
/// ```rust
/// assert_eq!(parse_content("  buy milk ").unwrap(), "buy milk");
/// ```
pub fn parse_content(content: &str) -> Result<&str> {
    let content = content.trim();

    if content.is_empty() {
        return Err(Error::Validation("Content can not be empty"));
    }

    Ok(content)
}

/// List all notes, newest first
pub async fn list<S: Storage>(storage: &S) -> Result<Vec<Note>> {
    let notes = storage.find_all_notes().await?;

    tracing::debug!("Listed {} notes", notes.len());

    Ok(notes)
}

/// Create a note from user input
///
/// The storage is not touched when the content is blank
pub async fn create<S: Storage>(storage: &S, content: &str) -> Result<Note> {
    let content = parse_content(content)?;

    let note = storage.create_note(&CreateNoteValues { content }).await?;

    tracing::info!(note_id = note.id, "Created note");

    Ok(note)
}

/// Delete a note by its ID, returning the removed note
pub async fn delete<S: Storage>(storage: &S, id: NoteId) -> Result<Note> {
    let note = storage.delete_note(id).await?;

    tracing::info!(note_id = note.id, "Deleted note");

    Ok(note)
}
