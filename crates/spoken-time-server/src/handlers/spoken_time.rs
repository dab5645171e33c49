//! Spoken time endpoints.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Multipart, Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use spoken_time_common_log::spans;
use spoken_time_core::{SpokenResult, TimeError};
use tracing::{debug, info, info_span};

/// Multipart part carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Query for `GET /spoken-time`.
#[derive(Debug, Default, Deserialize)]
pub struct TimeQuery {
    /// Time as `HH:mm`.
    pub time: Option<String>,
    /// Formatter key; the configured default when absent.
    pub locale: Option<String>,
}

/// Query accepted by the path and upload endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}

/// `GET /api/v1/spoken-time?time=HH:mm`
pub async fn spoken_time(
    State(state): State<AppState>,
    query: Result<Query<TimeQuery>, QueryRejection>,
) -> ApiResult<Json<SpokenResult>> {
    let Query(query) = query.map_err(|e| TimeError::MalformedTime(e.body_text()))?;

    let result = state
        .spoken_time
        .from_text(query.time.as_deref(), query.locale.as_deref())?;
    Ok(Json(result))
}

/// `GET /api/v1/spoken-time/{hour}/{minute}`
pub async fn spoken_time_parts(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
    query: Result<Query<LocaleQuery>, QueryRejection>,
) -> ApiResult<Json<SpokenResult>> {
    let Path((hour, minute)) = path.map_err(|e| {
        debug!(error = %e.body_text(), "Rejected path parameters");
        TimeError::bad_number()
    })?;
    let Query(query) = query.map_err(|e| TimeError::MalformedTime(e.body_text()))?;

    let result = state
        .spoken_time
        .from_parts(hour, minute, query.locale.as_deref())?;
    Ok(Json(result))
}

/// `POST /api/v1/spoken-time/upload` with a multipart `file` part.
pub async fn upload(
    State(state): State<AppState>,
    query: Result<Query<LocaleQuery>, QueryRejection>,
    multipart: Result<Multipart, axum::extract::multipart::MultipartRejection>,
) -> ApiResult<Json<Vec<SpokenResult>>> {
    let Query(query) = query.map_err(|e| TimeError::MalformedTime(e.body_text()))?;
    let mut multipart = multipart.map_err(|e| ApiError::invalid_file(e.body_text()))?;

    let content = spans::instrument_future(
        read_file_field(&mut multipart),
        info_span!("read_upload", field = FILE_FIELD),
    )
    .await?;
    let results = state
        .spoken_time
        .from_batch(&content, query.locale.as_deref())?;

    info!(count = results.len(), "Converted uploaded file");
    Ok(Json(results))
}

async fn read_file_field(multipart: &mut Multipart) -> ApiResult<String> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(ToString::to_string);
        let bytes = field.bytes().await?;
        debug!(file_name = ?file_name, bytes = bytes.len(), "Received upload");

        return String::from_utf8(bytes.to_vec())
            .map_err(|_| ApiError::invalid_file("file is not valid UTF-8 text"));
    }

    Err(ApiError::invalid_file(format!("missing '{}' part", FILE_FIELD)))
}
