use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vetclinic_domain::id::UsuarioId;
use vetclinic_domain::usuario::UsuarioTipo;

use crate::domain::types::{Usuario, UsuarioData};
use crate::error::SchedulingServiceError;
use crate::handlers::{created, deleted, updated};
use crate::state::AppState;
use crate::usecase::crud::{DeleteUseCase, GetUseCase, ListUseCase};
use crate::usecase::usuario::{CreateUsuarioUseCase, UpdateUsuarioUseCase, UsuarioInput};

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioRequest {
    pub id: Option<UsuarioId>,
    #[serde(default, deserialize_with = "vetclinic_core::serde::from_opt_timestamp")]
    pub data_cadastro: Option<DateTime<Utc>>,
    pub nome: Option<String>,
    pub usuario_tipo: Option<UsuarioTipo>,
}

impl UsuarioRequest {
    fn into_parts(self) -> (Option<UsuarioId>, UsuarioInput) {
        let input = UsuarioInput {
            data_cadastro: self.data_cadastro,
            nome: self.nome,
            usuario_tipo: self.usuario_tipo,
        };
        (self.id, input)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioResponse {
    pub id: UsuarioId,
    #[serde(serialize_with = "vetclinic_core::serde::to_rfc3339_ms")]
    pub data_cadastro: DateTime<Utc>,
    pub nome: Option<String>,
    pub usuario_tipo: Option<UsuarioTipo>,
}

impl From<Usuario> for UsuarioResponse {
    fn from(usuario: Usuario) -> Self {
        Self {
            id: usuario.id,
            data_cadastro: usuario.data.data_cadastro,
            nome: usuario.data.nome,
            usuario_tipo: usuario.data.usuario_tipo,
        }
    }
}

// ── POST /api/usuarios ───────────────────────────────────────────────────────

pub async fn create_usuario(
    State(state): State<AppState>,
    Json(body): Json<UsuarioRequest>,
) -> Result<Response, SchedulingServiceError> {
    debug!(request = ?body, "REST request to save Usuario");
    let (id, input) = body.into_parts();
    let usecase = CreateUsuarioUseCase {
        repo: state.usuario_repo(),
    };
    let usuario = usecase.execute(id, input).await?;
    Ok(created::<UsuarioData>(
        &state.alert,
        "usuarios",
        usuario.id,
        UsuarioResponse::from(usuario),
    ))
}

// ── PUT /api/usuarios ────────────────────────────────────────────────────────

pub async fn update_usuario(
    State(state): State<AppState>,
    Json(body): Json<UsuarioRequest>,
) -> Result<Response, SchedulingServiceError> {
    debug!(request = ?body, "REST request to update Usuario");
    let (id, input) = body.into_parts();
    let usecase = UpdateUsuarioUseCase {
        repo: state.usuario_repo(),
    };
    let usuario = usecase.execute(id, input).await?;
    Ok(updated::<UsuarioData>(
        &state.alert,
        usuario.id,
        UsuarioResponse::from(usuario),
    ))
}

// ── GET /api/usuarios ────────────────────────────────────────────────────────

pub async fn get_usuarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<UsuarioResponse>>, SchedulingServiceError> {
    debug!("REST request to get all Usuarios");
    let usecase = ListUseCase {
        repo: state.usuario_repo(),
    };
    let usuarios = usecase.execute::<UsuarioData>().await?;
    Ok(Json(usuarios.into_iter().map(UsuarioResponse::from).collect()))
}

// ── GET /api/usuarios/{id} ───────────────────────────────────────────────────

pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<UsuarioId>,
) -> Result<Json<UsuarioResponse>, SchedulingServiceError> {
    debug!(%id, "REST request to get Usuario");
    let usecase = GetUseCase {
        repo: state.usuario_repo(),
    };
    let usuario = usecase.execute::<UsuarioData>(id).await?;
    Ok(Json(usuario.into()))
}

// ── DELETE /api/usuarios/{id} ────────────────────────────────────────────────

pub async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<UsuarioId>,
) -> Result<Response, SchedulingServiceError> {
    debug!(%id, "REST request to delete Usuario");
    let usecase = DeleteUseCase {
        repo: state.usuario_repo(),
    };
    usecase.execute::<UsuarioData>(id).await?;
    Ok(deleted::<UsuarioData>(&state.alert, id))
}
