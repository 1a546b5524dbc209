//! HTTP handlers.

use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::coach::Coach;
use crate::error::CoachError;
use crate::web::dto::{ErrorResponse, PlanForm, PlanRequest};
use crate::web::page::{error_page, form_page, plan_page};

/// Shared state: one coach for every request.
#[derive(Clone)]
pub struct AppState {
    coach: Arc<dyn Coach>,
    default_age: u32,
}

impl AppState {
    pub fn new(coach: Arc<dyn Coach>, default_age: u32) -> Self {
        Self { coach, default_age }
    }
}

/// GET / - Empty form
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(form_page(&PlanForm::prefilled(state.default_age)))
}

/// POST / - Form submission
pub async fn submit_form(State(state): State<AppState>, Form(form): Form<PlanForm>) -> Response {
    let result = match form.to_input() {
        Ok(input) => state.coach.advise(&input).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(advice) => Html(plan_page(&form, &advice)).into_response(),
        Err(CoachError::InvalidInput(message)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(error_page(&form, &message)),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "form plan failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(error_page(&form, "internal error, please try again")),
            )
                .into_response()
        }
    }
}

/// POST /api/plan - JSON plan
pub async fn api_plan(
    State(state): State<AppState>,
    body: std::result::Result<Json<PlanRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    let result = match request.to_input() {
        Ok(input) => state.coach.advise(&input).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(advice) => (StatusCode::OK, Json(advice)).into_response(),
        Err(CoachError::InvalidInput(message)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(message)),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "api plan failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal error")),
            )
                .into_response()
        }
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
