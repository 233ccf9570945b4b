use vetclinic_domain::id::{AgendamentoId, ClienteId};

use crate::domain::repository::{AgendamentoRepository, CrudRepository, PetRepository};
use crate::domain::types::{Agendamento, AgendamentoData, ClienteData, PetData, UsuarioData};
use crate::error::SchedulingServiceError;
use crate::usecase::crud::ensure_exists;

/// Repositories an appointment write has to consult.
pub struct AgendamentoRepos<A, C, P, U> {
    pub agendamentos: A,
    pub clientes: C,
    pub pets: P,
    pub usuarios: U,
}

impl<A, C, P, U> AgendamentoRepos<A, C, P, U>
where
    A: AgendamentoRepository,
    C: CrudRepository<ClienteData>,
    P: PetRepository,
    U: CrudRepository<UsuarioData>,
{
    /// The pet and usuario uniqueness rules are left to storage.
    async fn check_references(&self, data: &AgendamentoData) -> Result<(), SchedulingServiceError> {
        ensure_exists::<ClienteData, _>(&self.clientes, data.cliente).await?;
        ensure_exists::<PetData, _>(&self.pets, data.pet).await?;
        ensure_exists::<UsuarioData, _>(&self.usuarios, data.usuario).await
    }
}

// ── CreateAgendamento ────────────────────────────────────────────────────────

pub struct CreateAgendamentoUseCase<A, C, P, U> {
    pub repos: AgendamentoRepos<A, C, P, U>,
}

impl<A, C, P, U> CreateAgendamentoUseCase<A, C, P, U>
where
    A: AgendamentoRepository,
    C: CrudRepository<ClienteData>,
    P: PetRepository,
    U: CrudRepository<UsuarioData>,
{
    pub async fn execute(
        &self,
        id: Option<AgendamentoId>,
        data: AgendamentoData,
    ) -> Result<Agendamento, SchedulingServiceError> {
        if id.is_some() {
            return Err(SchedulingServiceError::IdAlreadySet);
        }
        self.repos.check_references(&data).await?;
        self.repos.agendamentos.insert(&data).await
    }
}

// ── UpdateAgendamento ────────────────────────────────────────────────────────

pub struct UpdateAgendamentoUseCase<A, C, P, U> {
    pub repos: AgendamentoRepos<A, C, P, U>,
}

impl<A, C, P, U> UpdateAgendamentoUseCase<A, C, P, U>
where
    A: AgendamentoRepository,
    C: CrudRepository<ClienteData>,
    P: PetRepository,
    U: CrudRepository<UsuarioData>,
{
    pub async fn execute(
        &self,
        id: Option<AgendamentoId>,
        data: AgendamentoData,
    ) -> Result<Agendamento, SchedulingServiceError> {
        let id = id.ok_or(SchedulingServiceError::MissingId)?;
        self.repos.check_references(&data).await?;
        self.repos.agendamentos.save(Some(id), &data).await
    }
}

// ── ListClienteAgendamentos ──────────────────────────────────────────────────

pub struct ListClienteAgendamentosUseCase<A: AgendamentoRepository, C: CrudRepository<ClienteData>> {
    pub agendamentos: A,
    pub clientes: C,
}

impl<A: AgendamentoRepository, C: CrudRepository<ClienteData>>
    ListClienteAgendamentosUseCase<A, C>
{
    pub async fn execute(
        &self,
        cliente: ClienteId,
    ) -> Result<Vec<Agendamento>, SchedulingServiceError> {
        ensure_exists::<ClienteData, _>(&self.clientes, cliente).await?;
        self.agendamentos.find_by_cliente(cliente).await
    }
}
