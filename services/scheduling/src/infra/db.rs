use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};

use vetclinic_domain::id::{AgendamentoId, ClienteId, PetId, UsuarioId};
use vetclinic_domain::usuario::UsuarioTipo;
use vetclinic_scheduling_schema::{agendamento, cliente, pet, usuario};

use crate::domain::repository::{AgendamentoRepository, CrudRepository, PetRepository};
use crate::domain::types::{
    Agendamento, AgendamentoData, Cliente, ClienteData, Entity, Pet, PetData, Usuario,
    UsuarioData,
};
use crate::error::SchedulingServiceError;

// ── Storage error classification ─────────────────────────────────────────────

/// Map a failed insert/update. The database constraints are the source of
/// truth for the one-appointment-per-pet/usuario rule and for dangling keys.
fn write_error<D: Entity>(err: DbErr, context: &'static str) -> SchedulingServiceError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return D::not_found();
    }
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => unique_violation(&message)
            .unwrap_or_else(|| SchedulingServiceError::Internal(anyhow::Error::new(err).context(context))),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => SchedulingServiceError::ReferenceNotFound,
        _ => SchedulingServiceError::Internal(anyhow::Error::new(err).context(context)),
    }
}

/// Map a failed delete. A foreign-key violation means other rows still point here.
fn delete_error(err: DbErr, context: &'static str) -> SchedulingServiceError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => SchedulingServiceError::StillReferenced,
        _ => SchedulingServiceError::Internal(anyhow::Error::new(err).context(context)),
    }
}

/// Postgres reports the constraint name (`agendamento_pet_id_key`), SQLite the
/// column (`agendamento.pet_id`); both contain the column name.
fn unique_violation(message: &str) -> Option<SchedulingServiceError> {
    if message.contains("usuario_id") {
        Some(SchedulingServiceError::UsuarioAlreadyScheduled)
    } else if message.contains("pet_id") {
        Some(SchedulingServiceError::PetAlreadyScheduled)
    } else {
        None
    }
}

// ── Cliente repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbClienteRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository<ClienteData> for DbClienteRepository {
    async fn insert(&self, data: &ClienteData) -> Result<Cliente, SchedulingServiceError> {
        let model = cliente_active_model(data)
            .insert(&self.db)
            .await
            .map_err(|e| write_error::<ClienteData>(e, "insert cliente"))?;
        Ok(cliente_from_model(model))
    }

    async fn update(&self, record: &Cliente) -> Result<Cliente, SchedulingServiceError> {
        let mut am = cliente_active_model(&record.data);
        am.id = Set(record.id.get());
        let model = am
            .update(&self.db)
            .await
            .map_err(|e| write_error::<ClienteData>(e, "update cliente"))?;
        Ok(cliente_from_model(model))
    }

    async fn find_all(&self) -> Result<Vec<Cliente>, SchedulingServiceError> {
        let models = cliente::Entity::find()
            .order_by_asc(cliente::Column::Id)
            .all(&self.db)
            .await
            .context("list clientes")?;
        Ok(models.into_iter().map(cliente_from_model).collect())
    }

    async fn find_one(&self, id: ClienteId) -> Result<Option<Cliente>, SchedulingServiceError> {
        let model = cliente::Entity::find_by_id(id.get())
            .one(&self.db)
            .await
            .context("find cliente by id")?;
        Ok(model.map(cliente_from_model))
    }

    async fn delete(&self, id: ClienteId) -> Result<bool, SchedulingServiceError> {
        let result = cliente::Entity::delete_by_id(id.get())
            .exec(&self.db)
            .await
            .map_err(|e| delete_error(e, "delete cliente"))?;
        Ok(result.rows_affected > 0)
    }
}

fn cliente_active_model(data: &ClienteData) -> cliente::ActiveModel {
    cliente::ActiveModel {
        id: NotSet,
        nome: Set(data.nome.clone()),
        email: Set(data.email.clone()),
        endereco: Set(data.endereco.clone()),
        telefone: Set(data.telefone.clone()),
        cpf: Set(data.cpf.clone()),
    }
}

fn cliente_from_model(model: cliente::Model) -> Cliente {
    Cliente {
        id: ClienteId(model.id),
        data: ClienteData {
            nome: model.nome,
            email: model.email,
            endereco: model.endereco,
            telefone: model.telefone,
            cpf: model.cpf,
        },
    }
}

// ── Pet repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPetRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository<PetData> for DbPetRepository {
    async fn insert(&self, data: &PetData) -> Result<Pet, SchedulingServiceError> {
        let model = pet_active_model(data)
            .insert(&self.db)
            .await
            .map_err(|e| write_error::<PetData>(e, "insert pet"))?;
        Ok(pet_from_model(model))
    }

    async fn update(&self, record: &Pet) -> Result<Pet, SchedulingServiceError> {
        let mut am = pet_active_model(&record.data);
        am.id = Set(record.id.get());
        let model = am
            .update(&self.db)
            .await
            .map_err(|e| write_error::<PetData>(e, "update pet"))?;
        Ok(pet_from_model(model))
    }

    async fn find_all(&self) -> Result<Vec<Pet>, SchedulingServiceError> {
        let models = pet::Entity::find()
            .order_by_asc(pet::Column::Id)
            .all(&self.db)
            .await
            .context("list pets")?;
        Ok(models.into_iter().map(pet_from_model).collect())
    }

    async fn find_one(&self, id: PetId) -> Result<Option<Pet>, SchedulingServiceError> {
        let model = pet::Entity::find_by_id(id.get())
            .one(&self.db)
            .await
            .context("find pet by id")?;
        Ok(model.map(pet_from_model))
    }

    async fn delete(&self, id: PetId) -> Result<bool, SchedulingServiceError> {
        let result = pet::Entity::delete_by_id(id.get())
            .exec(&self.db)
            .await
            .map_err(|e| delete_error(e, "delete pet"))?;
        Ok(result.rows_affected > 0)
    }
}

impl PetRepository for DbPetRepository {
    async fn find_by_cliente(&self, cliente: ClienteId) -> Result<Vec<Pet>, SchedulingServiceError> {
        let models = pet::Entity::find()
            .filter(pet::Column::ClienteId.eq(cliente.get()))
            .order_by_asc(pet::Column::Id)
            .all(&self.db)
            .await
            .context("list pets by cliente")?;
        Ok(models.into_iter().map(pet_from_model).collect())
    }
}

fn pet_active_model(data: &PetData) -> pet::ActiveModel {
    pet::ActiveModel {
        id: NotSet,
        nome: Set(data.nome.clone()),
        especie_animal: Set(data.especie_animal.clone()),
        raca: Set(data.raca.clone()),
        cliente_id: Set(data.cliente.map(ClienteId::get)),
    }
}

fn pet_from_model(model: pet::Model) -> Pet {
    Pet {
        id: PetId(model.id),
        data: PetData {
            nome: model.nome,
            especie_animal: model.especie_animal,
            raca: model.raca,
            cliente: model.cliente_id.map(ClienteId),
        },
    }
}

// ── Usuario repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUsuarioRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository<UsuarioData> for DbUsuarioRepository {
    async fn insert(&self, data: &UsuarioData) -> Result<Usuario, SchedulingServiceError> {
        let model = usuario_active_model(data)
            .insert(&self.db)
            .await
            .map_err(|e| write_error::<UsuarioData>(e, "insert usuario"))?;
        usuario_from_model(model)
    }

    async fn update(&self, record: &Usuario) -> Result<Usuario, SchedulingServiceError> {
        let mut am = usuario_active_model(&record.data);
        am.id = Set(record.id.get());
        let model = am
            .update(&self.db)
            .await
            .map_err(|e| write_error::<UsuarioData>(e, "update usuario"))?;
        usuario_from_model(model)
    }

    async fn find_all(&self) -> Result<Vec<Usuario>, SchedulingServiceError> {
        let models = usuario::Entity::find()
            .order_by_asc(usuario::Column::Id)
            .all(&self.db)
            .await
            .context("list usuarios")?;
        models.into_iter().map(usuario_from_model).collect()
    }

    async fn find_one(&self, id: UsuarioId) -> Result<Option<Usuario>, SchedulingServiceError> {
        let model = usuario::Entity::find_by_id(id.get())
            .one(&self.db)
            .await
            .context("find usuario by id")?;
        model.map(usuario_from_model).transpose()
    }

    async fn delete(&self, id: UsuarioId) -> Result<bool, SchedulingServiceError> {
        let result = usuario::Entity::delete_by_id(id.get())
            .exec(&self.db)
            .await
            .map_err(|e| delete_error(e, "delete usuario"))?;
        Ok(result.rows_affected > 0)
    }
}

fn usuario_active_model(data: &UsuarioData) -> usuario::ActiveModel {
    usuario::ActiveModel {
        id: NotSet,
        data_cadastro: Set(data.data_cadastro),
        nome: Set(data.nome.clone()),
        usuario_tipo: Set(data.usuario_tipo.map(|tipo| tipo.as_str().to_owned())),
    }
}

fn usuario_from_model(model: usuario::Model) -> Result<Usuario, SchedulingServiceError> {
    let usuario_tipo = model
        .usuario_tipo
        .as_deref()
        .map(str::parse::<UsuarioTipo>)
        .transpose()
        .with_context(|| format!("decode usuario_tipo of usuario {}", model.id))?;
    Ok(Usuario {
        id: UsuarioId(model.id),
        data: UsuarioData {
            data_cadastro: model.data_cadastro,
            nome: model.nome,
            usuario_tipo,
        },
    })
}

// ── Agendamento repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAgendamentoRepository {
    pub db: DatabaseConnection,
}

impl CrudRepository<AgendamentoData> for DbAgendamentoRepository {
    async fn insert(&self, data: &AgendamentoData) -> Result<Agendamento, SchedulingServiceError> {
        let model = agendamento_active_model(data)
            .insert(&self.db)
            .await
            .map_err(|e| write_error::<AgendamentoData>(e, "insert agendamento"))?;
        Ok(agendamento_from_model(model))
    }

    async fn update(&self, record: &Agendamento) -> Result<Agendamento, SchedulingServiceError> {
        let mut am = agendamento_active_model(&record.data);
        am.id = Set(record.id.get());
        let model = am
            .update(&self.db)
            .await
            .map_err(|e| write_error::<AgendamentoData>(e, "update agendamento"))?;
        Ok(agendamento_from_model(model))
    }

    async fn find_all(&self) -> Result<Vec<Agendamento>, SchedulingServiceError> {
        let models = agendamento::Entity::find()
            .order_by_asc(agendamento::Column::Id)
            .all(&self.db)
            .await
            .context("list agendamentos")?;
        Ok(models.into_iter().map(agendamento_from_model).collect())
    }

    async fn find_one(
        &self,
        id: AgendamentoId,
    ) -> Result<Option<Agendamento>, SchedulingServiceError> {
        let model = agendamento::Entity::find_by_id(id.get())
            .one(&self.db)
            .await
            .context("find agendamento by id")?;
        Ok(model.map(agendamento_from_model))
    }

    async fn delete(&self, id: AgendamentoId) -> Result<bool, SchedulingServiceError> {
        let result = agendamento::Entity::delete_by_id(id.get())
            .exec(&self.db)
            .await
            .map_err(|e| delete_error(e, "delete agendamento"))?;
        Ok(result.rows_affected > 0)
    }
}

impl AgendamentoRepository for DbAgendamentoRepository {
    async fn find_by_cliente(
        &self,
        cliente: ClienteId,
    ) -> Result<Vec<Agendamento>, SchedulingServiceError> {
        let models = agendamento::Entity::find()
            .filter(agendamento::Column::ClienteId.eq(cliente.get()))
            .order_by_asc(agendamento::Column::Id)
            .all(&self.db)
            .await
            .context("list agendamentos by cliente")?;
        Ok(models.into_iter().map(agendamento_from_model).collect())
    }
}

fn agendamento_active_model(data: &AgendamentoData) -> agendamento::ActiveModel {
    agendamento::ActiveModel {
        id: NotSet,
        data: Set(data.data),
        cliente_id: Set(data.cliente.get()),
        pet_id: Set(data.pet.get()),
        usuario_id: Set(data.usuario.get()),
    }
}

fn agendamento_from_model(model: agendamento::Model) -> Agendamento {
    Agendamento {
        id: AgendamentoId(model.id),
        data: AgendamentoData {
            data: model.data,
            cliente: ClienteId(model.cliente_id),
            pet: PetId(model.pet_id),
            usuario: UsuarioId(model.usuario_id),
        },
    }
}
