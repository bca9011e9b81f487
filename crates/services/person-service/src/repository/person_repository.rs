//! Person repository issuing persistence calls directly.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseTransaction, EntityTrait, ModelTrait};

use common::{AppError, AppResult, OptionExt};
use domain::{Person, UpsertPerson, FIND_ALL_PERSONS};

use super::entities::person::{self, ActiveModel, Entity as PersonEntity, Model as PersonModel};
use crate::infra::UnitOfWork;
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Person repository trait for dependency injection.
///
/// Insert and update share one merge semantic: the row keyed by the
/// identifier is overwritten when present and inserted otherwise.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// List every person through the `find_all_persons` named query
    async fn find_all(&self) -> AppResult<Vec<Person>>;

    /// Find person by primary key
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Person>>;

    /// Insert a new row (merge)
    async fn insert_person(&self, person: UpsertPerson) -> AppResult<Person>;

    /// Update the row with the given identifier (merge)
    async fn update_person(&self, person: UpsertPerson) -> AppResult<Person>;

    /// Look the row up, then remove it. Fails with `NotFound` when absent.
    async fn delete_by_id(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of PersonRepository
pub struct PersonStore {
    uow: UnitOfWork,
}

impl PersonStore {
    /// Create new repository instance
    pub fn new(uow: UnitOfWork) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl PersonRepository for PersonStore {
    async fn find_all(&self) -> AppResult<Vec<Person>> {
        let query = person::named_query(FIND_ALL_PERSONS).ok_or_else(|| {
            AppError::internal(format!("unknown named query: {}", FIND_ALL_PERSONS))
        })?;

        let models: Vec<PersonModel> =
            with_transaction!(self.uow, |txn| query.all(txn).await.map_err(AppError::from))?;

        tracing::debug!(count = models.len(), "Fetched all persons");
        Ok(models.into_iter().map(Person::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Person>> {
        let model: Option<PersonModel> = with_transaction!(self.uow, |txn| {
            PersonEntity::find_by_id(id)
                .one(txn)
                .await
                .map_err(AppError::from)
        })?;

        Ok(model.map(Person::from))
    }

    async fn insert_person(&self, person: UpsertPerson) -> AppResult<Person> {
        with_transaction!(self.uow, |txn| merge(txn, person).await)
    }

    async fn update_person(&self, person: UpsertPerson) -> AppResult<Person> {
        with_transaction!(self.uow, |txn| merge(txn, person).await)
    }

    async fn delete_by_id(&self, id: i32) -> AppResult<()> {
        with_transaction!(self.uow, |txn| remove(txn, id).await)
    }
}

/// Overwrite the row keyed by the identifier, or insert it
async fn merge(txn: &DatabaseTransaction, person: UpsertPerson) -> AppResult<Person> {
    let existing = match person.id {
        Some(id) => PersonEntity::find_by_id(id).one(txn).await?,
        None => None,
    };

    let active: ActiveModel = person.into();
    let model = match existing {
        Some(_) => active.update(txn).await?,
        None => active.insert(txn).await?,
    };

    tracing::debug!(id = model.id, updated = existing.is_some(), "Merged person");
    Ok(Person::from(model))
}

async fn remove(txn: &DatabaseTransaction, id: i32) -> AppResult<()> {
    let model = PersonEntity::find_by_id(id)
        .one(txn)
        .await?
        .ok_or_not_found(format!("Person {}", id))?;

    model.delete(txn).await?;
    tracing::debug!(id, "Deleted person");
    Ok(())
}
