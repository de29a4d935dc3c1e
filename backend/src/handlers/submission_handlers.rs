use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::handlers::error::AppError;
use crate::handlers::submission_dtos::{
    NewContactMessage, NewRegistration, NewStatusCheck, RootResponse,
};
use crate::models::submission_models::{ContactMessage, Registration, StatusCheck};
use crate::repositories::submission_repository::LIST_LIMIT;
use crate::AppState;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World",
    })
}

pub async fn create_status_check(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewStatusCheck>, JsonRejection>,
) -> Result<Json<StatusCheck>, AppError> {
    let Json(input) = payload?;
    let stored = state.status_checks.insert(StatusCheck::from(input)).await?;
    info!(collection = state.status_checks.collection(), id = %stored.id, "Stored status check");
    Ok(Json(stored))
}

pub async fn get_status_checks(State(state): State<Arc<AppState>>) -> Json<Vec<StatusCheck>> {
    Json(state.status_checks.list(LIST_LIMIT).await)
}

pub async fn create_contact_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewContactMessage>, JsonRejection>,
) -> Result<Json<ContactMessage>, AppError> {
    let Json(input) = payload?;
    let stored = state.contact_messages.insert(ContactMessage::from(input)).await?;
    info!(collection = state.contact_messages.collection(), id = %stored.id, "Stored contact message");
    Ok(Json(stored))
}

pub async fn get_contact_messages(State(state): State<Arc<AppState>>) -> Json<Vec<ContactMessage>> {
    Json(state.contact_messages.list(LIST_LIMIT).await)
}

pub async fn create_registration(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewRegistration>, JsonRejection>,
) -> Result<Json<Registration>, AppError> {
    let Json(input) = payload?;
    let stored = state.registrations.insert(Registration::from(input)).await?;
    info!(
        collection = state.registrations.collection(),
        id = %stored.id,
        class_type = %stored.class_type,
        "Stored registration"
    );
    Ok(Json(stored))
}

pub async fn get_registrations(State(state): State<Arc<AppState>>) -> Json<Vec<Registration>> {
    Json(state.registrations.list(LIST_LIMIT).await)
}
