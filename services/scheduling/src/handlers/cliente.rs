use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vetclinic_domain::id::ClienteId;

use crate::domain::types::{Cliente, ClienteData};
use crate::error::SchedulingServiceError;
use crate::handlers::agendamento::AgendamentoResponse;
use crate::handlers::pet::PetResponse;
use crate::handlers::{created, deleted, updated};
use crate::state::AppState;
use crate::usecase::agendamento::ListClienteAgendamentosUseCase;
use crate::usecase::crud::{CreateUseCase, DeleteUseCase, GetUseCase, ListUseCase, UpdateUseCase};
use crate::usecase::pet::ListClientePetsUseCase;

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteRequest {
    pub id: Option<ClienteId>,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub cpf: Option<String>,
}

impl ClienteRequest {
    fn into_parts(self) -> (Option<ClienteId>, ClienteData) {
        let data = ClienteData {
            nome: self.nome,
            email: self.email,
            endereco: self.endereco,
            telefone: self.telefone,
            cpf: self.cpf,
        };
        (self.id, data)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteResponse {
    pub id: ClienteId,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub cpf: Option<String>,
}

impl From<Cliente> for ClienteResponse {
    fn from(cliente: Cliente) -> Self {
        Self {
            id: cliente.id,
            nome: cliente.data.nome,
            email: cliente.data.email,
            endereco: cliente.data.endereco,
            telefone: cliente.data.telefone,
            cpf: cliente.data.cpf,
        }
    }
}

// ── POST /api/clientes ───────────────────────────────────────────────────────

pub async fn create_cliente(
    State(state): State<AppState>,
    Json(body): Json<ClienteRequest>,
) -> Result<Response, SchedulingServiceError> {
    debug!(request = ?body, "REST request to save Cliente");
    let (id, data) = body.into_parts();
    let usecase = CreateUseCase {
        repo: state.cliente_repo(),
    };
    let cliente = usecase.execute(id, data).await?;
    Ok(created::<ClienteData>(
        &state.alert,
        "clientes",
        cliente.id,
        ClienteResponse::from(cliente),
    ))
}

// ── PUT /api/clientes ────────────────────────────────────────────────────────

pub async fn update_cliente(
    State(state): State<AppState>,
    Json(body): Json<ClienteRequest>,
) -> Result<Response, SchedulingServiceError> {
    debug!(request = ?body, "REST request to update Cliente");
    let (id, data) = body.into_parts();
    let usecase = UpdateUseCase {
        repo: state.cliente_repo(),
    };
    let cliente = usecase.execute(id, data).await?;
    Ok(updated::<ClienteData>(
        &state.alert,
        cliente.id,
        ClienteResponse::from(cliente),
    ))
}

// ── GET /api/clientes ────────────────────────────────────────────────────────

pub async fn get_clientes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClienteResponse>>, SchedulingServiceError> {
    debug!("REST request to get all Clientes");
    let usecase = ListUseCase {
        repo: state.cliente_repo(),
    };
    let clientes = usecase.execute::<ClienteData>().await?;
    Ok(Json(clientes.into_iter().map(ClienteResponse::from).collect()))
}

// ── GET /api/clientes/{id} ───────────────────────────────────────────────────

pub async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<ClienteId>,
) -> Result<Json<ClienteResponse>, SchedulingServiceError> {
    debug!(%id, "REST request to get Cliente");
    let usecase = GetUseCase {
        repo: state.cliente_repo(),
    };
    let cliente = usecase.execute::<ClienteData>(id).await?;
    Ok(Json(cliente.into()))
}

// ── DELETE /api/clientes/{id} ────────────────────────────────────────────────

pub async fn delete_cliente(
    State(state): State<AppState>,
    Path(id): Path<ClienteId>,
) -> Result<Response, SchedulingServiceError> {
    debug!(%id, "REST request to delete Cliente");
    let usecase = DeleteUseCase {
        repo: state.cliente_repo(),
    };
    usecase.execute::<ClienteData>(id).await?;
    Ok(deleted::<ClienteData>(&state.alert, id))
}

// ── GET /api/clientes/{id}/pets ──────────────────────────────────────────────

pub async fn get_cliente_pets(
    State(state): State<AppState>,
    Path(id): Path<ClienteId>,
) -> Result<Json<Vec<PetResponse>>, SchedulingServiceError> {
    debug!(%id, "REST request to get Pets of Cliente");
    let usecase = ListClientePetsUseCase {
        pets: state.pet_repo(),
        clientes: state.cliente_repo(),
    };
    let pets = usecase.execute(id).await?;
    Ok(Json(pets.into_iter().map(PetResponse::from).collect()))
}

// ── GET /api/clientes/{id}/agendamentos ──────────────────────────────────────

pub async fn get_cliente_agendamentos(
    State(state): State<AppState>,
    Path(id): Path<ClienteId>,
) -> Result<Json<Vec<AgendamentoResponse>>, SchedulingServiceError> {
    debug!(%id, "REST request to get Agendamentos of Cliente");
    let usecase = ListClienteAgendamentosUseCase {
        agendamentos: state.agendamento_repo(),
        clientes: state.cliente_repo(),
    };
    let agendamentos = usecase.execute(id).await?;
    Ok(Json(
        agendamentos
            .into_iter()
            .map(AgendamentoResponse::from)
            .collect(),
    ))
}
