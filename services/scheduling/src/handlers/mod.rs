pub mod agendamento;
pub mod cliente;
pub mod pet;
pub mod usuario;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use vetclinic_core::alert::EntityAlert;

use crate::domain::types::Entity;

/// 201 with `Location: /api/{collection}/{id}`, the creation alert and the stored record.
pub(crate) fn created<D: Entity>(
    alert: &EntityAlert,
    collection: &str,
    id: D::Key,
    body: impl Serialize,
) -> Response {
    let mut headers = alert.created(D::NAME, id);
    if let Ok(location) = HeaderValue::from_str(&format!("/api/{collection}/{id}")) {
        headers.insert(LOCATION, location);
    }
    (StatusCode::CREATED, headers, Json(body)).into_response()
}

pub(crate) fn updated<D: Entity>(alert: &EntityAlert, id: D::Key, body: impl Serialize) -> Response {
    (StatusCode::OK, alert.updated(D::NAME, id), Json(body)).into_response()
}

pub(crate) fn deleted<D: Entity>(alert: &EntityAlert, id: D::Key) -> Response {
    (StatusCode::NO_CONTENT, alert.deleted(D::NAME, id)).into_response()
}
