use sea_orm::DatabaseConnection;

use vetclinic_core::alert::EntityAlert;

use crate::infra::db::{
    DbAgendamentoRepository, DbClienteRepository, DbPetRepository, DbUsuarioRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub alert: EntityAlert,
}

impl AppState {
    pub fn cliente_repo(&self) -> DbClienteRepository {
        DbClienteRepository {
            db: self.db.clone(),
        }
    }

    pub fn pet_repo(&self) -> DbPetRepository {
        DbPetRepository {
            db: self.db.clone(),
        }
    }

    pub fn usuario_repo(&self) -> DbUsuarioRepository {
        DbUsuarioRepository {
            db: self.db.clone(),
        }
    }

    pub fn agendamento_repo(&self) -> DbAgendamentoRepository {
        DbAgendamentoRepository {
            db: self.db.clone(),
        }
    }
}
