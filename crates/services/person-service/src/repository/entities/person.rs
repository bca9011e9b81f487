//! Person database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{QueryOrder, Select};

use domain::{Person, UpsertPerson, FIND_ALL_PERSONS};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub birth_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Resolve a named query registered for the person entity.
pub fn named_query(name: &str) -> Option<Select<Entity>> {
    match name {
        FIND_ALL_PERSONS => Some(Entity::find().order_by_asc(Column::Id)),
        _ => None,
    }
}

/// Convert database model to domain entity
impl From<Model> for Person {
    fn from(model: Model) -> Self {
        Person {
            id: model.id,
            name: model.name,
            location: model.location,
            birth_date: model.birth_date,
        }
    }
}

/// Every column is written; the key is left to the database when absent
impl From<UpsertPerson> for ActiveModel {
    fn from(person: UpsertPerson) -> Self {
        ActiveModel {
            id: person.id.map_or(NotSet, Set),
            name: Set(person.name),
            location: Set(person.location),
            birth_date: Set(person.birth_date),
        }
    }
}
