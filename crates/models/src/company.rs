use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub sector: String,
    pub address_city: String,
    pub address_state: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employee,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employee => Entity::has_many(super::employee::Entity).into(),
        }
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Response projection: what callers get back. Re-nests the address the way
/// the API exposes it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Public {
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub sector: String,
    pub address: Address,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Clone, Debug, Serialize)]
pub struct Address {
    pub city: String,
    pub state: String,
}

impl From<Model> for Public {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            cnpj: m.cnpj,
            sector: m.sector,
            address: Address { city: m.address_city, state: m.address_state },
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
