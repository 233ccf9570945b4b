use vetclinic_domain::id::{ClienteId, PetId};

use crate::domain::repository::{CrudRepository, PetRepository};
use crate::domain::types::{ClienteData, Pet, PetData};
use crate::error::SchedulingServiceError;
use crate::usecase::crud::ensure_exists;

async fn check_owner<C>(clientes: &C, data: &PetData) -> Result<(), SchedulingServiceError>
where
    C: CrudRepository<ClienteData>,
{
    match data.cliente {
        Some(cliente) => ensure_exists::<ClienteData, _>(clientes, cliente).await,
        None => Ok(()),
    }
}

// ── CreatePet ────────────────────────────────────────────────────────────────

pub struct CreatePetUseCase<P: PetRepository, C: CrudRepository<ClienteData>> {
    pub pets: P,
    pub clientes: C,
}

impl<P: PetRepository, C: CrudRepository<ClienteData>> CreatePetUseCase<P, C> {
    pub async fn execute(
        &self,
        id: Option<PetId>,
        data: PetData,
    ) -> Result<Pet, SchedulingServiceError> {
        if id.is_some() {
            return Err(SchedulingServiceError::IdAlreadySet);
        }
        check_owner(&self.clientes, &data).await?;
        self.pets.insert(&data).await
    }
}

// ── UpdatePet ────────────────────────────────────────────────────────────────

pub struct UpdatePetUseCase<P: PetRepository, C: CrudRepository<ClienteData>> {
    pub pets: P,
    pub clientes: C,
}

impl<P: PetRepository, C: CrudRepository<ClienteData>> UpdatePetUseCase<P, C> {
    pub async fn execute(
        &self,
        id: Option<PetId>,
        data: PetData,
    ) -> Result<Pet, SchedulingServiceError> {
        let id = id.ok_or(SchedulingServiceError::MissingId)?;
        check_owner(&self.clientes, &data).await?;
        self.pets.save(Some(id), &data).await
    }
}

// ── ListClientePets ──────────────────────────────────────────────────────────

pub struct ListClientePetsUseCase<P: PetRepository, C: CrudRepository<ClienteData>> {
    pub pets: P,
    pub clientes: C,
}

impl<P: PetRepository, C: CrudRepository<ClienteData>> ListClientePetsUseCase<P, C> {
    pub async fn execute(&self, cliente: ClienteId) -> Result<Vec<Pet>, SchedulingServiceError> {
        ensure_exists::<ClienteData, _>(&self.clientes, cliente).await?;
        self.pets.find_by_cliente(cliente).await
    }
}
