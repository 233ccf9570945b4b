use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vetclinic_domain::id::{AgendamentoId, ClienteId, PetId, UsuarioId};

use crate::domain::types::{Agendamento, AgendamentoData};
use crate::error::SchedulingServiceError;
use crate::handlers::{created, deleted, updated};
use crate::infra::db::{
    DbAgendamentoRepository, DbClienteRepository, DbPetRepository, DbUsuarioRepository,
};
use crate::state::AppState;
use crate::usecase::agendamento::{
    AgendamentoRepos, CreateAgendamentoUseCase, UpdateAgendamentoUseCase,
};
use crate::usecase::crud::{DeleteUseCase, GetUseCase, ListUseCase};

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AgendamentoRequest {
    pub id: Option<AgendamentoId>,
    #[serde(deserialize_with = "vetclinic_core::serde::from_timestamp")]
    pub data: DateTime<Utc>,
    pub cliente: ClienteId,
    pub pet: PetId,
    pub usuario: UsuarioId,
}

impl AgendamentoRequest {
    fn into_parts(self) -> (Option<AgendamentoId>, AgendamentoData) {
        let data = AgendamentoData {
            data: self.data,
            cliente: self.cliente,
            pet: self.pet,
            usuario: self.usuario,
        };
        (self.id, data)
    }
}

#[derive(Serialize)]
pub struct AgendamentoResponse {
    pub id: AgendamentoId,
    #[serde(serialize_with = "vetclinic_core::serde::to_rfc3339_ms")]
    pub data: DateTime<Utc>,
    pub cliente: ClienteId,
    pub pet: PetId,
    pub usuario: UsuarioId,
}

impl From<Agendamento> for AgendamentoResponse {
    fn from(agendamento: Agendamento) -> Self {
        Self {
            id: agendamento.id,
            data: agendamento.data.data,
            cliente: agendamento.data.cliente,
            pet: agendamento.data.pet,
            usuario: agendamento.data.usuario,
        }
    }
}

type DbAgendamentoRepos = AgendamentoRepos<
    DbAgendamentoRepository,
    DbClienteRepository,
    DbPetRepository,
    DbUsuarioRepository,
>;

fn repos(state: &AppState) -> DbAgendamentoRepos {
    AgendamentoRepos {
        agendamentos: state.agendamento_repo(),
        clientes: state.cliente_repo(),
        pets: state.pet_repo(),
        usuarios: state.usuario_repo(),
    }
}

// ── POST /api/agendamentos ───────────────────────────────────────────────────

pub async fn create_agendamento(
    State(state): State<AppState>,
    Json(body): Json<AgendamentoRequest>,
) -> Result<Response, SchedulingServiceError> {
    debug!(request = ?body, "REST request to save Agendamento");
    let (id, data) = body.into_parts();
    let usecase = CreateAgendamentoUseCase {
        repos: repos(&state),
    };
    let agendamento = usecase.execute(id, data).await?;
    Ok(created::<AgendamentoData>(
        &state.alert,
        "agendamentos",
        agendamento.id,
        AgendamentoResponse::from(agendamento),
    ))
}

// ── PUT /api/agendamentos ────────────────────────────────────────────────────

pub async fn update_agendamento(
    State(state): State<AppState>,
    Json(body): Json<AgendamentoRequest>,
) -> Result<Response, SchedulingServiceError> {
    debug!(request = ?body, "REST request to update Agendamento");
    let (id, data) = body.into_parts();
    let usecase = UpdateAgendamentoUseCase {
        repos: repos(&state),
    };
    let agendamento = usecase.execute(id, data).await?;
    Ok(updated::<AgendamentoData>(
        &state.alert,
        agendamento.id,
        AgendamentoResponse::from(agendamento),
    ))
}

// ── GET /api/agendamentos ────────────────────────────────────────────────────

pub async fn get_agendamentos(
    State(state): State<AppState>,
) -> Result<Json<Vec<AgendamentoResponse>>, SchedulingServiceError> {
    debug!("REST request to get all Agendamentos");
    let usecase = ListUseCase {
        repo: state.agendamento_repo(),
    };
    let agendamentos = usecase.execute::<AgendamentoData>().await?;
    Ok(Json(
        agendamentos
            .into_iter()
            .map(AgendamentoResponse::from)
            .collect(),
    ))
}

// ── GET /api/agendamentos/{id} ───────────────────────────────────────────────

pub async fn get_agendamento(
    State(state): State<AppState>,
    Path(id): Path<AgendamentoId>,
) -> Result<Json<AgendamentoResponse>, SchedulingServiceError> {
    debug!(%id, "REST request to get Agendamento");
    let usecase = GetUseCase {
        repo: state.agendamento_repo(),
    };
    let agendamento = usecase
        .execute::<AgendamentoData>(id)
        .await?;
    Ok(Json(agendamento.into()))
}

// ── DELETE /api/agendamentos/{id} ────────────────────────────────────────────

pub async fn delete_agendamento(
    State(state): State<AppState>,
    Path(id): Path<AgendamentoId>,
) -> Result<Response, SchedulingServiceError> {
    debug!(%id, "REST request to delete Agendamento");
    let usecase = DeleteUseCase {
        repo: state.agendamento_repo(),
    };
    usecase
        .execute::<AgendamentoData>(id)
        .await?;
    Ok(deleted::<AgendamentoData>(&state.alert, id))
}
