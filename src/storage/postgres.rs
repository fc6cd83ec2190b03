//! Postgres storage

use std::time::Duration;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use crate::notes::Note;
use crate::notes::NoteId;

use super::CreateNoteValues;
use super::Error;
use super::Result;
use super::Storage;
use super::connection_error;

/// Migrator to run migrations on startup
static MIGRATOR: Migrator = sqlx::migrate!();

/// Postgres storage
#[derive(Clone, Debug)]
pub struct Postgres {
    /// Pool of connections
    connection_pool: PgPool,
}

impl Postgres {
    /// Create Postgres storage from a connection string
    ///
    /// Migrations will be run
    pub async fn connect(database_connection_string: &str) -> Result<Self> {
        let connection_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_connection_string)
            .await
            .map_err(connection_error)?;

        Self::from_pool(connection_pool).await
    }

    /// Create Postgres storage with existing pool
    ///
    /// Migrations will be run
    pub async fn from_pool(connection_pool: PgPool) -> Result<Self> {
        MIGRATOR
            .run(&connection_pool)
            .await
            .map_err(|err| Error::Connection(format!("Migrations could not run: {err}")))?;

        Ok(Self { connection_pool })
    }
}

impl Storage for Postgres {
    async fn find_all_notes(&self) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r"
            SELECT id, content, created_at
            FROM notes
            ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(notes)
    }

    async fn create_note(&self, values: &CreateNoteValues<'_>) -> Result<Note> {
        let note = sqlx::query_as::<_, Note>(
            r"
            INSERT INTO notes (content)
            VALUES ($1)
            RETURNING id, content, created_at",
        )
        .bind(values.content)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(connection_error)?;

        Ok(note)
    }

    async fn delete_note(&self, id: NoteId) -> Result<Note> {
        sqlx::query_as::<_, Note>(
            r"
            DELETE FROM notes
            WHERE id = $1
            RETURNING id, content, created_at",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await
        .map_err(connection_error)?
        .ok_or(Error::NotFound(id))
    }
}
