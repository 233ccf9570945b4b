use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nome: Option<String>,
    pub especie_animal: Option<String>,
    pub raca: Option<String>,
    pub cliente_id: Option<i64>,
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
    #[sea_orm(has_one = "super::agendamento::Entity")]
    Agendamento,
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl Related<super::agendamento::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agendamento.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
