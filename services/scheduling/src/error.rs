use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Scheduling service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum SchedulingServiceError {
    #[error("a new record cannot already have an id")]
    IdAlreadySet,
    #[error("invalid id")]
    MissingId,
    #[error("cliente not found")]
    ClienteNotFound,
    #[error("pet not found")]
    PetNotFound,
    #[error("usuario not found")]
    UsuarioNotFound,
    #[error("agendamento not found")]
    AgendamentoNotFound,
    #[error("referenced record not found")]
    ReferenceNotFound,
    #[error("pet already has an agendamento")]
    PetAlreadyScheduled,
    #[error("usuario already has an agendamento")]
    UsuarioAlreadyScheduled,
    #[error("record is still referenced")]
    StillReferenced,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl SchedulingServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IdAlreadySet => "ID_EXISTS",
            Self::MissingId => "ID_NULL",
            Self::ClienteNotFound => "CLIENTE_NOT_FOUND",
            Self::PetNotFound => "PET_NOT_FOUND",
            Self::UsuarioNotFound => "USUARIO_NOT_FOUND",
            Self::AgendamentoNotFound => "AGENDAMENTO_NOT_FOUND",
            Self::ReferenceNotFound => "REFERENCE_NOT_FOUND",
            Self::PetAlreadyScheduled => "PET_ALREADY_SCHEDULED",
            Self::UsuarioAlreadyScheduled => "USUARIO_ALREADY_SCHEDULED",
            Self::StillReferenced => "STILL_REFERENCED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for SchedulingServiceError {
    fn into_response(self) -> Response {
        // Conflicts share 400 with validation failures; clients tell them apart by `kind`.
        let status = match &self {
            Self::ClienteNotFound
            | Self::PetNotFound
            | Self::UsuarioNotFound
            | Self::AgendamentoNotFound
            | Self::ReferenceNotFound => StatusCode::NOT_FOUND,
            Self::IdAlreadySet
            | Self::MissingId
            | Self::PetAlreadyScheduled
            | Self::UsuarioAlreadyScheduled
            | Self::StillReferenced => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // TraceLayer records the status of every response; only the cause of a 500 is logged here.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
