use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use serde_json::Value;
use crate::AppState;
use crate::models::{ErrorResponse, IngestResponse};
use crate::storage;

type HandlerError = (StatusCode, Json<ErrorResponse>);

// Presence-only check, the value itself is never verified.
// This is a test fixture standing in for a real collector.
fn validate_api_key(headers: &HeaderMap) -> Result<(), HandlerError> {

    if headers.get("x-api-key").is_none() {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Invalid API Key"))
        ));
    }

    Ok(())

}

fn is_json_content_type(headers: &HeaderMap) -> bool {

    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };

    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    // ignore parameters like "; charset=utf-8"
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim();

    mime.eq_ignore_ascii_case("application/json") || mime.to_ascii_lowercase().ends_with("+json")

}

pub async fn ingest_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes
) -> Result<Json<IngestResponse>, HandlerError> {

    // checks run strictly in order: auth, then content type, then parse
    validate_api_key(&headers)?;

    if !is_json_content_type(&headers) {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Content-Type must be application/json"))
        ));
    }

    let data: Value = match serde_json::from_slice(&body) {
        Ok(Value::Null) | Err(_) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("Invalid JSON"))
            ));
        }
        Ok(data) => data
    };

    storage::append_entries(&state.output_path, &data).map_err(|e| {
        eprintln!("Error processing request: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Internal server error"))
        )
    })?;

    Ok(Json(IngestResponse::success()))

}
