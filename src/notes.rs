//! Notes

use chrono::naive::NaiveDateTime;

/// Identifier of a note, assigned by the storage
pub type NoteId = i64;

/// A single note
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
    /// Note ID
    pub id: NoteId,

    /// Trimmed, non-empty content
    pub content: String,

    /// Creation date, the sort key of every listing
    pub created_at: NaiveDateTime,
}

impl Note {
    /// Ordering used by every listing: newest first, latest insert wins a tie
    pub fn newest_first(a: &Note, b: &Note) -> core::cmp::Ordering {
        b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
    }
}
