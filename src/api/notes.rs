//! Notes API endpoints

use axum::Extension;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde::Serialize;

use crate::notes::Note;
use crate::notes::NoteId;
use crate::operations;
use crate::storage::Storage;

use super::Error;
use super::Form;
use super::PathParameters;
use super::Success;

/// Note response going to the client
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    /// Note ID
    pub id: NoteId,

    /// Content of the note
    pub content: String,

    /// Creation date
    pub created_at: NaiveDateTime,
}

impl NoteResponse {
    fn from_note(note: Note) -> Self {
        Self {
            id: note.id,
            content: note.content,
            created_at: note.created_at,
        }
    }

    fn from_note_multiple(notes: Vec<Note>) -> Vec<Self> {
        notes.into_iter().map(Self::from_note).collect()
    }
}

/// List all notes, newest first
///
/// Request:
/// ```sh
/// curl -v http://localhost:3000/api/notes
/// ```
///
/// Response:
/// ```json
/// { "data": [ { "id": 2, "content": "call bob", "createdAt": "..." } ] }
/// ```
pub async fn list<S: Storage>(
    Extension(storage): Extension<S>,
) -> Result<Success<Vec<NoteResponse>>, Error> {
    let notes = operations::list(&storage).await?;

    Ok(Success::ok(NoteResponse::from_note_multiple(notes)))
}

/// Create note form
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteForm {
    /// Content of the note, trimmed before it is stored
    content: String,
}

/// Create a note based on the [`CreateNoteForm`](CreateNoteForm) form
///
/// Request:
/// ```sh
/// curl -v -H 'Content-Type: application/json' \
///     -d '{ "content": "buy milk" }' \
///     http://localhost:3000/api/notes
/// ```
///
/// Response:
/// ```json
/// { "data": { "id": 1, "content": "buy milk", "createdAt": "..." } }
/// ```
pub async fn create<S: Storage>(
    Extension(storage): Extension<S>,
    Form(form): Form<CreateNoteForm>,
) -> Result<Success<NoteResponse>, Error> {
    let note = operations::create(&storage, &form.content).await?;

    Ok(Success::created(NoteResponse::from_note(note)))
}

/// Delete a note, responding with the removed note
///
/// Request:
/// ```sh
/// curl -v -XDELETE http://localhost:3000/api/notes/1
/// ```
pub async fn delete<S: Storage>(
    Extension(storage): Extension<S>,
    PathParameters(note_id): PathParameters<NoteId>,
) -> Result<Success<NoteResponse>, Error> {
    let note = operations::delete(&storage, note_id).await?;

    Ok(Success::ok(NoteResponse::from_note(note)))
}
