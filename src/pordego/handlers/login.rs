use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::{error, instrument};

use crate::pordego::{account, handlers::Credentials, store::CustomerStore};

#[utoipa::path(
    post,
    path = "/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login successful", content_type = "application/json"),
        (status = 401, description = "Invalid email or password", content_type = "application/json"),
    ),
    tag = "login"
)]
// axum handler for login
#[instrument(skip(store, payload))]
pub async fn login(
    Extension(store): Extension<CustomerStore>,
    payload: Option<Json<Credentials>>,
) -> impl IntoResponse {
    let credentials = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Missing payload"})),
            )
        }
    };

    match account::sign_in(&store, &credentials.email, &credentials.password).await {
        Ok(true) => (
            StatusCode::OK,
            Json(json!({"message": "Login successful"})),
        ),
        Ok(false) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Invalid email or password"})),
        ),
        Err(error) => {
            error!("Error checking credentials: {error}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal server error"})),
            )
        }
    }
}
