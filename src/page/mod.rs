//! The notes page
//!
//! Rendered on the server. Every mutation answers with a redirect back to
//! the page, so the browser always refetches the full list afterwards.

use axum::Extension;
use axum::Form;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use serde::Deserialize;

pub use composer::Composer;

use crate::api;
use crate::notes::NoteId;
use crate::operations;
use crate::storage::Storage;
use render::render_error;
use render::render_page;

mod composer;
mod render;

/// Get the Axum router for the page
pub fn router<S: Storage>() -> Router {
    Router::new()
        .route("/", get(show::<S>).post(create::<S>))
        .route("/notes/{note}/delete", post(delete::<S>))
}

/// Show the page with an empty composer
pub async fn show<S: Storage>(Extension(storage): Extension<S>) -> Response {
    respond_with_page(&storage, StatusCode::OK, &Composer::default()).await
}

/// Form posted by the composer
#[derive(Debug, Deserialize)]
pub struct ComposeForm {
    #[serde(default)]
    content: String,
}

/// Create a note from the composer
///
/// On success the browser is sent back to the page, which clears the input.
/// On failure the error is logged and the page is shown again with the
/// typed text untouched.
pub async fn create<S: Storage>(
    Extension(storage): Extension<S>,
    Form(form): Form<ComposeForm>,
) -> Response {
    match operations::create(&storage, &form.content).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => {
            tracing::warn!("Could not create note: {err}");

            let status_code = api::Error::from(err).status_code();
            let composer = Composer::with_input(form.content);

            respond_with_page(&storage, status_code, &composer).await
        }
    }
}

/// Delete a note, then send the browser back to the page
///
/// Failures are only logged, the page stays as it was
pub async fn delete<S: Storage>(
    Extension(storage): Extension<S>,
    Path(note_id): Path<String>,
) -> Redirect {
    match note_id.parse::<NoteId>() {
        Ok(note_id) => {
            if let Err(err) = operations::delete(&storage, note_id).await {
                tracing::warn!("Could not delete note {note_id}: {err}");
            }
        }
        Err(err) => tracing::warn!("Could not delete note {note_id:?}: invalid ID, {err}"),
    }

    Redirect::to("/")
}

/// Fetch the current notes and render the page
async fn respond_with_page<S: Storage>(
    storage: &S,
    status_code: StatusCode,
    composer: &Composer,
) -> Response {
    match operations::list(storage).await {
        Ok(notes) => (status_code, Html(render_page(&notes, composer))).into_response(),
        Err(err) => {
            tracing::error!("Could not list notes: {err}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(render_error("The notes could not be loaded")),
            )
                .into_response()
        }
    }
}
