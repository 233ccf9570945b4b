#![allow(async_fn_in_trait)]

use vetclinic_domain::id::ClienteId;

use crate::domain::types::{Agendamento, AgendamentoData, Entity, Pet, PetData, Record};
use crate::error::SchedulingServiceError;

/// Keyed create/read/update/delete over one entity table.
pub trait CrudRepository<D: Entity>: Send + Sync {
    /// Insert a new row; storage assigns the key.
    async fn insert(&self, data: &D) -> Result<Record<D>, SchedulingServiceError>;

    /// Overwrite every field of the row keyed by `record.id`.
    /// Fails with the entity's not-found error when no such row exists; never inserts.
    async fn update(&self, record: &Record<D>) -> Result<Record<D>, SchedulingServiceError>;

    /// Every row, in key order.
    async fn find_all(&self) -> Result<Vec<Record<D>>, SchedulingServiceError>;

    async fn find_one(&self, id: D::Key) -> Result<Option<Record<D>>, SchedulingServiceError>;

    /// Delete by key. Returns `true` if a row was deleted; a missing key is not an error.
    async fn delete(&self, id: D::Key) -> Result<bool, SchedulingServiceError>;

    /// Insert when `id` is `None`, otherwise overwrite the row with that key.
    async fn save(
        &self,
        id: Option<D::Key>,
        data: &D,
    ) -> Result<Record<D>, SchedulingServiceError> {
        match id {
            None => self.insert(data).await,
            Some(id) => {
                self.update(&Record {
                    id,
                    data: data.clone(),
                })
                .await
            }
        }
    }
}

/// Pets, plus the customer-to-pets view.
pub trait PetRepository: CrudRepository<PetData> {
    async fn find_by_cliente(&self, cliente: ClienteId) -> Result<Vec<Pet>, SchedulingServiceError>;
}

/// Appointments, plus the customer-to-appointments view.
pub trait AgendamentoRepository: CrudRepository<AgendamentoData> {
    async fn find_by_cliente(
        &self,
        cliente: ClienteId,
    ) -> Result<Vec<Agendamento>, SchedulingServiceError>;
}
