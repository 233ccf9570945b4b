use sea_orm::entity::prelude::*;

/// Staff member. `usuario_tipo` holds the upper-case classification name.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "usuario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub data_cadastro: chrono::DateTime<chrono::Utc>,
    pub nome: Option<String>,
    pub usuario_tipo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::agendamento::Entity")]
    Agendamento,
}

impl Related<super::agendamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agendamento.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
