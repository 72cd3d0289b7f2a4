//! HTTP handlers for the upload / select / download flow.

use std::sync::Arc;

use axum::extract::{Multipart, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use refsift_core::partition;
use refsift_ingest::load_named;
use refsift_model::Table;
use refsift_output::to_csv_bytes;
use refsift_session::{ColumnChoice, SessionId};

use crate::{ApiError, AppState, pages};

/// GET /: the upload form.
pub async fn upload_page() -> Html<&'static str> {
    Html(pages::UPLOAD_HTML)
}

/// POST /: multipart upload of one reference file and N data files.
///
/// Loads every file by its extension-derived format, merges the data tables
/// into one, persists both sides under a fresh session, and responds with
/// the column-selection page.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, ApiError> {
    let mut reference: Option<Table> = None;
    let mut data_tables: Vec<Table> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(part) = field.name().map(str::to_string) else {
            continue;
        };
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        match part.as_str() {
            "reference" => {
                reference = Some(load_named(&bytes, &file_name)?);
            }
            "data_files" => {
                data_tables.push(load_named(&bytes, &file_name)?);
            }
            other => {
                tracing::debug!(part = other, "ignoring unexpected multipart field");
            }
        }
    }

    let reference = reference.ok_or_else(|| {
        ApiError::BadRequest("please upload a reference file".to_string())
    })?;
    if data_tables.is_empty() {
        return Err(ApiError::BadRequest(
            "please upload at least one data file".to_string(),
        ));
    }
    // Merging and persisting are CPU and file work; keep them off the
    // async runtime.
    let store = Arc::clone(&state.store);
    let page = tokio::task::spawn_blocking(move || {
        let data = refsift_core::merge(&data_tables)?;
        let session = store.create(&data, &reference)?;
        tracing::info!(
            session = %session,
            data_rows = data.n_rows(),
            reference_rows = reference.n_rows(),
            "upload complete"
        );
        Ok::<String, ApiError>(pages::select_columns(
            session,
            data.columns(),
            reference.columns(),
        ))
    })
    .await??;
    Ok(Html(page))
}

#[derive(Debug, Deserialize)]
pub struct ProcessForm {
    pub session_id: String,
    pub data_column: String,
    pub reference_column: String,
}

/// POST /process: store the chosen column pair for a session.
pub async fn process(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ProcessForm>,
) -> Result<Html<String>, ApiError> {
    let session: SessionId = form.session_id.parse()?;
    let choice = ColumnChoice {
        data_column: form.data_column,
        reference_column: form.reference_column,
    };
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || store.set_columns(session, choice)).await??;
    Ok(Html(pages::download_links(session)))
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub session: String,
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Missing,
    Existing,
}

impl Side {
    fn file_name(self) -> &'static str {
        match self {
            Self::Missing => "missing_records.csv",
            Self::Existing => "existing_records.csv",
        }
    }
}

/// GET /download/missing: rows absent from the reference column.
pub async fn download_missing(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    download(&state, &query.session, Side::Missing).await
}

/// GET /download/existing: rows present in the reference column.
pub async fn download_existing(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    download(&state, &query.session, Side::Existing).await
}

async fn download(state: &AppState, session: &str, side: Side) -> Result<Response, ApiError> {
    let session: SessionId = session.parse()?;
    // Store reads hit the filesystem and the partition scans every row;
    // run both on the blocking pool.
    let store = Arc::clone(&state.store);
    let bytes = tokio::task::spawn_blocking(move || {
        let (data, reference) = store.get_tables(session)?;
        let choice = store.get_columns(session)?;

        let result = partition(
            &data,
            &choice.data_column,
            &reference,
            &choice.reference_column,
        )?;
        let table = match side {
            Side::Missing => &result.missing,
            Side::Existing => &result.existing,
        };
        let bytes = to_csv_bytes(table)?;
        tracing::info!(
            session = %session,
            file = side.file_name(),
            rows = table.n_rows(),
            "serving partition download"
        );
        Ok::<Vec<u8>, ApiError>(bytes)
    })
    .await??;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", side.file_name()),
            ),
        ],
        bytes,
    )
        .into_response())
}
