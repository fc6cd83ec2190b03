//! Memory storage
//!
//! Will be destroyed on system shutdown

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::notes::Note;
use crate::notes::NoteId;

use super::CreateNoteValues;
use super::Error;
use super::Result;
use super::Storage;

/// An in-memory storage
///
/// Will be destroyed on system shutdown
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Notes and the ID counter, behind one lock
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    /// Last assigned ID
    last_id: NoteId,

    /// All notes in storage, in insertion order
    notes: Vec<Note>,
}

impl Memory {
    /// Create a new empty Memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for Memory {
    async fn find_all_notes(&self) -> Result<Vec<Note>> {
        let mut notes = self.state.lock().await.notes.clone();

        notes.sort_by(Note::newest_first);

        Ok(notes)
    }

    async fn create_note(&self, values: &CreateNoteValues<'_>) -> Result<Note> {
        let mut state = self.state.lock().await;

        state.last_id += 1;

        let note = Note {
            id: state.last_id,
            content: values.content.to_string(),
            created_at: Utc::now().naive_utc(),
        };

        state.notes.push(note.clone());

        Ok(note)
    }

    async fn delete_note(&self, id: NoteId) -> Result<Note> {
        let mut state = self.state.lock().await;

        let position = state
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(Error::NotFound(id))?;

        Ok(state.notes.remove(position))
    }
}
