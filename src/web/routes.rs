//! Route table and handlers for the journal page

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Form, Router};
use chrono::Local;
use tracing::{error, warn};

use crate::application::{record_entry, EntrySubmission, WeeklyViewService};
use crate::error::JournalError;
use crate::web::render::{self, PageContext};
use crate::web::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(create_entry))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let weeks = state.with_store(|store| WeeklyViewService::new(store).execute(None, None))?;
    Ok(Html(render::page(&weeks, &PageContext::default())))
}

async fn create_entry(
    State(state): State<AppState>,
    Form(submission): Form<EntrySubmission>,
) -> Result<Response, WebError> {
    let today = Local::now().date_naive();

    match state.with_store(|store| record_entry(store, &submission, today)) {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(WebError::Journal(err)) if err.is_validation() => {
            warn!(error = %err, "rejected entry submission");
            let weeks =
                state.with_store(|store| WeeklyViewService::new(store).execute(None, None))?;
            let ctx = PageContext {
                error: Some(err.to_string()),
                submission: Some(&submission),
            };
            Ok((StatusCode::BAD_REQUEST, Html(render::page(&weeks, &ctx))).into_response())
        }
        Err(err) => Err(err),
    }
}

#[derive(Debug)]
pub enum WebError {
    Journal(JournalError),
    StorePoisoned,
}

impl From<JournalError> for WebError {
    fn from(err: JournalError) -> Self {
        WebError::Journal(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Journal(err) if err.is_validation() => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            WebError::Journal(err) => {
                error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
            WebError::StorePoisoned => {
                error!("entry store lock poisoned");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
