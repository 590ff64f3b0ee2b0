use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use crate::AppState;
use shiftsheet::acquire;
use shiftsheet::extract::extract_schedule;
use shiftsheet::model::StoredSchedule;
use shiftsheet::week;

/// Handler for the index page
pub async fn index_handler() -> impl IntoResponse {
    Html(include_str!("../assets/index.html"))
}

/// Handler for API health check
pub async fn health_handler() -> &'static str {
    "OK"
}

/// Upload outcome, distinguishing "saved" from "nothing found".
///
/// An empty extraction is a valid result the user needs to see as such, not
/// a server error.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum UploadResponse {
    #[serde(rename = "saved")]
    Saved { record: StoredSchedule },
    #[serde(rename = "noSchedule")]
    NoSchedule { message: String },
}

/// Handler for timesheet uploads
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, String)> {
    let mut timesheet = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| (StatusCode::BAD_REQUEST, "Malformed upload".to_string()))?
    {
        if field.name() != Some("timesheet") {
            continue;
        }

        let declared_pdf = field.content_type() == Some("application/pdf")
            || field
                .file_name()
                .is_some_and(|name| name.to_lowercase().ends_with(".pdf"));

        if !declared_pdf {
            return Err((
                StatusCode::BAD_REQUEST,
                "Only PDF timesheets are accepted".to_string(),
            ));
        }

        let data = field
            .bytes()
            .await
            .map_err(|_| (StatusCode::BAD_REQUEST, "Could not read upload".to_string()))?;
        timesheet = Some(data);
    }

    let Some(data) = timesheet else {
        return Err((
            StatusCode::BAD_REQUEST,
            "Missing timesheet file".to_string(),
        ));
    };

    info!("Processing {} byte timesheet upload", data.len());

    let text = acquire::document_text(&data).map_err(|e| {
        error!("Failed to acquire document text: {}", e);
        (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    let schedule = extract_schedule(&text, &state.config.target_name);

    if schedule.days.is_empty() {
        info!(
            "No schedule found for {} in uploaded document",
            state.config.target_name
        );
        return Ok(Json(UploadResponse::NoSchedule {
            message: format!(
                "{} was not found in the uploaded document",
                state.config.target_name
            ),
        }));
    }

    let is_current = week::is_current_week(&schedule.week_ending);
    let record = StoredSchedule::new(schedule, is_current);

    state.store.save(&record).await.map_err(|e| {
        error!("Failed to store schedule: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to store schedule".to_string(),
        )
    })?;

    Ok(Json(UploadResponse::Saved { record }))
}

/// Handler listing every stored schedule, newest first
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredSchedule>>, (StatusCode, String)> {
    state.store.list_all().await.map(Json).map_err(|e| {
        error!("Failed to list schedules: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to list schedules".to_string(),
        )
    })
}

/// Handler clearing the whole store
pub async fn clear_handler(
    State(state): State<AppState>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.store.clear_all().await.map_err(|e| {
        error!("Failed to clear schedules: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to clear schedules".to_string(),
        )
    })?;
    Ok(StatusCode::NO_CONTENT)
}
