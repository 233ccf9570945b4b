//! Create/update/list/get/delete usecases shared by every entity.
//!
//! Entities with references (pet, agendamento) or derived fields (usuario)
//! wrap these with their own checks; cliente uses them as they are.

use crate::domain::repository::CrudRepository;
use crate::domain::types::{Entity, Record};
use crate::error::SchedulingServiceError;

/// Fails with the entity's not-found error unless a row keyed `id` exists.
pub(crate) async fn ensure_exists<D, R>(repo: &R, id: D::Key) -> Result<(), SchedulingServiceError>
where
    D: Entity,
    R: CrudRepository<D>,
{
    match repo.find_one(id).await? {
        Some(_) => Ok(()),
        None => Err(D::not_found()),
    }
}

// ── Create ───────────────────────────────────────────────────────────────────

pub struct CreateUseCase<R> {
    pub repo: R,
}

impl<R> CreateUseCase<R> {
    /// `id` is whatever key the client sent; a new record must not carry one.
    pub async fn execute<D>(
        &self,
        id: Option<D::Key>,
        data: D,
    ) -> Result<Record<D>, SchedulingServiceError>
    where
        D: Entity,
        R: CrudRepository<D>,
    {
        if id.is_some() {
            return Err(SchedulingServiceError::IdAlreadySet);
        }
        self.repo.save(None, &data).await
    }
}

// ── Update ───────────────────────────────────────────────────────────────────

pub struct UpdateUseCase<R> {
    pub repo: R,
}

impl<R> UpdateUseCase<R> {
    pub async fn execute<D>(
        &self,
        id: Option<D::Key>,
        data: D,
    ) -> Result<Record<D>, SchedulingServiceError>
    where
        D: Entity,
        R: CrudRepository<D>,
    {
        let id = id.ok_or(SchedulingServiceError::MissingId)?;
        self.repo.save(Some(id), &data).await
    }
}

// ── List ─────────────────────────────────────────────────────────────────────

pub struct ListUseCase<R> {
    pub repo: R,
}

impl<R> ListUseCase<R> {
    pub async fn execute<D>(&self) -> Result<Vec<Record<D>>, SchedulingServiceError>
    where
        D: Entity,
        R: CrudRepository<D>,
    {
        self.repo.find_all().await
    }
}

// ── Get ──────────────────────────────────────────────────────────────────────

pub struct GetUseCase<R> {
    pub repo: R,
}

impl<R> GetUseCase<R> {
    pub async fn execute<D>(&self, id: D::Key) -> Result<Record<D>, SchedulingServiceError>
    where
        D: Entity,
        R: CrudRepository<D>,
    {
        self.repo.find_one(id).await?.ok_or_else(D::not_found)
    }
}

// ── Delete ───────────────────────────────────────────────────────────────────

pub struct DeleteUseCase<R> {
    pub repo: R,
}

impl<R> DeleteUseCase<R> {
    /// Deleting a key that does not exist succeeds.
    pub async fn execute<D>(&self, id: D::Key) -> Result<(), SchedulingServiceError>
    where
        D: Entity,
        R: CrudRepository<D>,
    {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            tracing::debug!(entity = D::NAME, %id, "delete of missing record ignored");
        }
        Ok(())
    }
}
