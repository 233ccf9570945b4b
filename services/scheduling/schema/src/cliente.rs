use sea_orm::entity::prelude::*;

/// Customer (pet owner).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cliente")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub endereco: Option<String>,
    pub telefone: Option<String>,
    pub cpf: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pet::Entity")]
    Pets,
    #[sea_orm(has_many = "super::agendamento::Entity")]
    Agendamentos,
}

impl Related<super::pet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pets.def()
    }
}

impl Related<super::agendamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agendamentos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
