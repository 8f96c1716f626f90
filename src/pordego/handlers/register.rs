use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::{error, instrument};

use crate::pordego::{
    account::{self, SignUp},
    handlers::Credentials,
    store::CustomerStore,
};

#[utoipa::path(
    post,
    path = "/register",
    request_body = Credentials,
    responses(
        (status = 201, description = "Registration successful", content_type = "application/json"),
        (status = 409, description = "Email already registered", content_type = "application/json"),
        (status = 422, description = "Validation failed", content_type = "application/json"),
    ),
    tag = "register"
)]
// axum handler for register
#[instrument(skip(store, payload))]
pub async fn register(
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

    match account::sign_up(&store, &credentials.email, &credentials.password).await {
        Ok(SignUp::Created) => (
            StatusCode::CREATED,
            Json(json!({"message": "Registration successful"})),
        ),
        Ok(SignUp::Rejected(reason)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": reason})),
        ),
        Ok(SignUp::Duplicate) => (
            StatusCode::CONFLICT,
            Json(json!({"error": "Email already registered"})),
        ),
        Err(error) => {
            error!("Error registering customer: {error}");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal server error"})),
            )
        }
    }
}
