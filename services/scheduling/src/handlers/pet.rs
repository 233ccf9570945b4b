use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use vetclinic_domain::id::{ClienteId, PetId};

use crate::domain::types::{Pet, PetData};
use crate::error::SchedulingServiceError;
use crate::handlers::{created, deleted, updated};
use crate::state::AppState;
use crate::usecase::crud::{DeleteUseCase, GetUseCase, ListUseCase};
use crate::usecase::pet::{CreatePetUseCase, UpdatePetUseCase};

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRequest {
    pub id: Option<PetId>,
    pub nome: Option<String>,
    pub especie_animal: Option<String>,
    pub raca: Option<String>,
    pub cliente: Option<ClienteId>,
}

impl PetRequest {
    fn into_parts(self) -> (Option<PetId>, PetData) {
        let data = PetData {
            nome: self.nome,
            especie_animal: self.especie_animal,
            raca: self.raca,
            cliente: self.cliente,
        };
        (self.id, data)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetResponse {
    pub id: PetId,
    pub nome: Option<String>,
    pub especie_animal: Option<String>,
    pub raca: Option<String>,
    pub cliente: Option<ClienteId>,
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        Self {
            id: pet.id,
            nome: pet.data.nome,
            especie_animal: pet.data.especie_animal,
            raca: pet.data.raca,
            cliente: pet.data.cliente,
        }
    }
}

// ── POST /api/pets ───────────────────────────────────────────────────────────

pub async fn create_pet(
    State(state): State<AppState>,
    Json(body): Json<PetRequest>,
) -> Result<Response, SchedulingServiceError> {
    debug!(request = ?body, "REST request to save Pet");
    let (id, data) = body.into_parts();
    let usecase = CreatePetUseCase {
        pets: state.pet_repo(),
        clientes: state.cliente_repo(),
    };
    let pet = usecase.execute(id, data).await?;
    Ok(created::<PetData>(
        &state.alert,
        "pets",
        pet.id,
        PetResponse::from(pet),
    ))
}

// ── PUT /api/pets ────────────────────────────────────────────────────────────

pub async fn update_pet(
    State(state): State<AppState>,
    Json(body): Json<PetRequest>,
) -> Result<Response, SchedulingServiceError> {
    debug!(request = ?body, "REST request to update Pet");
    let (id, data) = body.into_parts();
    let usecase = UpdatePetUseCase {
        pets: state.pet_repo(),
        clientes: state.cliente_repo(),
    };
    let pet = usecase.execute(id, data).await?;
    Ok(updated::<PetData>(&state.alert, pet.id, PetResponse::from(pet)))
}

// ── GET /api/pets ────────────────────────────────────────────────────────────

pub async fn get_pets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetResponse>>, SchedulingServiceError> {
    debug!("REST request to get all Pets");
    let usecase = ListUseCase {
        repo: state.pet_repo(),
    };
    let pets = usecase.execute::<PetData>().await?;
    Ok(Json(pets.into_iter().map(PetResponse::from).collect()))
}

// ── GET /api/pets/{id} ───────────────────────────────────────────────────────

pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<PetId>,
) -> Result<Json<PetResponse>, SchedulingServiceError> {
    debug!(%id, "REST request to get Pet");
    let usecase = GetUseCase {
        repo: state.pet_repo(),
    };
    let pet = usecase.execute::<PetData>(id).await?;
    Ok(Json(pet.into()))
}

// ── DELETE /api/pets/{id} ────────────────────────────────────────────────────

pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<PetId>,
) -> Result<Response, SchedulingServiceError> {
    debug!(%id, "REST request to delete Pet");
    let usecase = DeleteUseCase {
        repo: state.pet_repo(),
    };
    usecase.execute::<PetData>(id).await?;
    Ok(deleted::<PetData>(&state.alert, id))
}
