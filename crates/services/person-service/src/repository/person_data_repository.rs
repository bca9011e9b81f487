//! Person repository bound to the declarative CRUD contract.

use common::AppResult;
use domain::{Person, UpsertPerson};

use super::base::CrudRepository;
use super::entities::person::{ActiveModel, Entity as PersonEntity, Model as PersonModel};
use crate::infra::UnitOfWork;

/// Person repository whose operations all come from [`CrudRepository`]
pub struct PersonDataRepository {
    uow: UnitOfWork,
}

impl PersonDataRepository {
    /// Create new repository instance
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }

    /// Find a person by id as a domain entity
    pub async fn find_person(&self, id: i32) -> AppResult<Option<Person>> {
        Ok(self.find_by_id(id).await?.map(Person::from))
    }

    /// Save a person as a domain entity
    pub async fn save_person(&self, person: UpsertPerson) -> AppResult<Person> {
        self.save(ActiveModel::from(person)).await.map(Person::from)
    }

    /// List all persons as domain entities
    pub async fn find_all_persons(&self) -> AppResult<Vec<Person>> {
        let models = self.find_all().await?;
        Ok(models.into_iter().map(Person::from).collect())
    }
}

impl CrudRepository<PersonEntity, PersonModel, ActiveModel> for PersonDataRepository {
    fn unit_of_work(&self) -> &UnitOfWork {
        &self.uow
    }
}
