use std::fmt::{Debug, Display};

use chrono::{DateTime, Utc};

use vetclinic_domain::id::{AgendamentoId, ClienteId, PetId, UsuarioId};
use vetclinic_domain::usuario::UsuarioTipo;

use crate::error::SchedulingServiceError;

/// Field set of a storable entity, keyed by a surrogate key once persisted.
pub trait Entity: Debug + Clone + Send + Sync + 'static {
    type Key: Debug + Display + Copy + Eq + Send + Sync + 'static;

    /// Lower-case singular name, used in alert headers and log lines.
    const NAME: &'static str;

    /// The error returned when no row has the requested key.
    fn not_found() -> SchedulingServiceError;
}

/// A persisted entity: the database-assigned key plus the entity's fields.
///
/// Equality is identity: two records are equal iff their keys are equal,
/// whatever their fields hold.
#[derive(Debug, Clone)]
pub struct Record<D: Entity> {
    pub id: D::Key,
    pub data: D,
}

impl<D: Entity> PartialEq for Record<D> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<D: Entity> Eq for Record<D> {}

pub type Cliente = Record<ClienteData>;
pub type Pet = Record<PetData>;
pub type Usuario = Record<UsuarioData>;
pub type Agendamento = Record<AgendamentoData>;

/// Customer (pet owner). Every field is optional free text.
///
/// The customer's pets and appointments are not stored here; they are read
/// from the owning side on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClienteData {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub cpf: Option<String>,
}

impl Entity for ClienteData {
    type Key = ClienteId;
    const NAME: &'static str = "cliente";

    fn not_found() -> SchedulingServiceError {
        SchedulingServiceError::ClienteNotFound
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetData {
    pub nome: Option<String>,
    pub especie_animal: Option<String>,
    pub raca: Option<String>,
    /// Owning customer, many pets per customer.
    pub cliente: Option<ClienteId>,
}

impl Entity for PetData {
    type Key = PetId;
    const NAME: &'static str = "pet";

    fn not_found() -> SchedulingServiceError {
        SchedulingServiceError::PetNotFound
    }
}

/// Staff member who conducts appointments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsuarioData {
    pub data_cadastro: DateTime<Utc>,
    pub nome: Option<String>,
    pub usuario_tipo: Option<UsuarioTipo>,
}

impl Entity for UsuarioData {
    type Key = UsuarioId;
    const NAME: &'static str = "usuario";

    fn not_found() -> SchedulingServiceError {
        SchedulingServiceError::UsuarioNotFound
    }
}

/// Appointment linking one customer, one pet and one staff member.
///
/// `cliente` is many-to-one. `pet` and `usuario` are one-to-one: storage
/// rejects a second appointment for the same pet or staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendamentoData {
    pub data: DateTime<Utc>,
    pub cliente: ClienteId,
    pub pet: PetId,
    pub usuario: UsuarioId,
}

impl Entity for AgendamentoData {
    type Key = AgendamentoId;
    const NAME: &'static str = "agendamento";

    fn not_found() -> SchedulingServiceError {
        SchedulingServiceError::AgendamentoNotFound
    }
}
