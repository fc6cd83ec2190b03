//! All things related to the storage of notes

use core::fmt;

use sqlx::PgPool;

pub use memory::Memory;
pub use postgres::Postgres;

use crate::notes::Note;
use crate::notes::NoteId;

mod memory;
mod postgres;

/// Storage errors
#[derive(Debug)]
pub enum Error {
    /// A connection error with the storage
    Connection(String),

    /// No note exists with the given ID
    NotFound(NoteId),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Connection(error) => write!(f, "Connection error: {error}"),
            Error::NotFound(id) => write!(f, "Note {id} not found"),
        }
    }
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Storage configuration
pub enum Config {
    /// Detect configuration from environment
    ///
    /// Uses Postgres when `DATABASE_URL` is set, memory otherwise
    DetectConfig,

    /// Use existing Postgres connection
    #[allow(dead_code)] // used by tests
    ExistingConnection(PgPool),

    /// Use the in-memory storage
    #[allow(dead_code)] // used by tests
    Memory,
}

/// Values to create a Note
pub struct CreateNoteValues<'a> {
    /// Content of the note
    ///
    /// Already validated and trimmed
    pub content: &'a str,
}

/// Storage with all supported operations
pub trait Storage: Clone + Send + Sync + 'static {
    /// Find all notes, newest first
    fn find_all_notes(&self) -> impl Future<Output = Result<Vec<Note>>> + Send;

    /// Create a note
    ///
    /// ID and creation date are assigned by the storage
    fn create_note(
        &self,
        values: &CreateNoteValues<'_>,
    ) -> impl Future<Output = Result<Note>> + Send;

    /// Delete a note, returning the removed record
    ///
    /// Fails with [`Error::NotFound`] when the note does not exist
    fn delete_note(&self, id: NoteId) -> impl Future<Output = Result<Note>> + Send;
}

/// Convert any backend error to a storage connection error
fn connection_error<E>(err: E) -> Error
where
    E: std::error::Error,
{
    Error::Connection(err.to_string())
}
