use sea_orm::entity::prelude::*;

/// Appointment. `pet_id` and `usuario_id` are unique: a pet or a staff member
/// is bound to at most one appointment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "agendamento")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub data: chrono::DateTime<chrono::Utc>,
    pub cliente_id: i64,
    #[sea_orm(unique)]
    pub pet_id: i64,
    #[sea_orm(unique)]
    pub usuario_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cliente::Entity",
        from = "Column::ClienteId",
        to = "super::cliente::Column::Id",
        on_delete = "NoAction"
    )]
    Cliente,
    #[sea_orm(
        belongs_to = "super::pet::Entity",
        from = "Column::PetId",
        to = "super::pet::Column::Id",
        on_delete = "NoAction"
    )]
    Pet,
    #[sea_orm(
        belongs_to = "super::usuario::Entity",
        from = "Column::UsuarioId",
        to = "super::usuario::Column::Id",
        on_delete = "NoAction"
    )]
    Usuario,
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pet.def()
    }
}

impl Related<super::usuario::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Usuario.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
