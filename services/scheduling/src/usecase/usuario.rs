use chrono::{DateTime, Utc};

use vetclinic_domain::id::UsuarioId;
use vetclinic_domain::usuario::UsuarioTipo;

use crate::domain::repository::CrudRepository;
use crate::domain::types::{Usuario, UsuarioData};
use crate::error::SchedulingServiceError;

/// Usuario fields as sent by a client; `data_cadastro` may be left out.
pub struct UsuarioInput {
    pub data_cadastro: Option<DateTime<Utc>>,
    pub nome: Option<String>,
    pub usuario_tipo: Option<UsuarioTipo>,
}

// ── CreateUsuario ────────────────────────────────────────────────────────────

pub struct CreateUsuarioUseCase<R: CrudRepository<UsuarioData>> {
    pub repo: R,
}

impl<R: CrudRepository<UsuarioData>> CreateUsuarioUseCase<R> {
    pub async fn execute(
        &self,
        id: Option<UsuarioId>,
        input: UsuarioInput,
    ) -> Result<Usuario, SchedulingServiceError> {
        if id.is_some() {
            return Err(SchedulingServiceError::IdAlreadySet);
        }
        let data = UsuarioData {
            data_cadastro: input.data_cadastro.unwrap_or_else(Utc::now),
            nome: input.nome,
            usuario_tipo: input.usuario_tipo,
        };
        self.repo.insert(&data).await
    }
}

// ── UpdateUsuario ────────────────────────────────────────────────────────────

pub struct UpdateUsuarioUseCase<R: CrudRepository<UsuarioData>> {
    pub repo: R,
}

impl<R: CrudRepository<UsuarioData>> UpdateUsuarioUseCase<R> {
    /// A missing `data_cadastro` keeps the stored registration time.
    pub async fn execute(
        &self,
        id: Option<UsuarioId>,
        input: UsuarioInput,
    ) -> Result<Usuario, SchedulingServiceError> {
        let id = id.ok_or(SchedulingServiceError::MissingId)?;
        let data_cadastro = match input.data_cadastro {
            Some(at) => at,
            None => {
                self.repo
                    .find_one(id)
                    .await?
                    .ok_or(SchedulingServiceError::UsuarioNotFound)?
                    .data
                    .data_cadastro
            }
        };
        let data = UsuarioData {
            data_cadastro,
            nome: input.nome,
            usuario_tipo: input.usuario_tipo,
        };
        self.repo.save(Some(id), &data).await
    }
}
