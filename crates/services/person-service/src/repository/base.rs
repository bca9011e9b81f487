//! Declarative CRUD repository.
//!
//! An implementor names the entity and hands over its unit of work; every
//! operation below is provided. Each call runs in its own transaction.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseTransaction, DbErr, EntityName, EntityTrait,
    FromQueryResult, IntoActiveModel, PaginatorTrait, PrimaryKeyTrait,
};
use std::fmt::Debug;

use common::{AppError, AppResult};

use crate::infra::UnitOfWork;

/// Primary key value type of an entity
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Find, save, list and delete by primary key
#[async_trait]
pub trait CrudRepository<E, M, A>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: FromQueryResult + IntoActiveModel<A> + Send + Sync + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    PrimaryKeyOf<E>: Clone + Debug + Send + Sync + 'static,
{
    /// Transaction scope used by every operation
    fn unit_of_work(&self) -> &UnitOfWork;

    /// Find entity by primary key
    async fn find_by_id(&self, id: PrimaryKeyOf<E>) -> AppResult<Option<M>> {
        self.unit_of_work()
            .transaction(move |txn| {
                Box::pin(async move { E::find_by_id(id).one(txn).await.map_err(AppError::from) })
            })
            .await
    }

    /// Insert or update by primary key.
    ///
    /// An unset key always inserts. A set key updates the matching row, or
    /// inserts under that key when no row matches.
    async fn save(&self, model: A) -> AppResult<M> {
        self.unit_of_work()
            .transaction(move |txn| Box::pin(upsert::<E, M, A>(txn, model)))
            .await
    }

    /// Find all entities
    async fn find_all(&self) -> AppResult<Vec<M>> {
        self.unit_of_work()
            .transaction(|txn| {
                Box::pin(async move { E::find().all(txn).await.map_err(AppError::from) })
            })
            .await
    }

    /// Delete entity by primary key; a missing row is `NotFound`
    async fn delete_by_id(&self, id: PrimaryKeyOf<E>) -> AppResult<()> {
        self.unit_of_work()
            .transaction(move |txn| Box::pin(delete_existing::<E>(txn, id)))
            .await
    }

    /// Count all entities
    async fn count(&self) -> AppResult<u64> {
        self.unit_of_work()
            .transaction(|txn| {
                Box::pin(async move { E::find().count(txn).await.map_err(AppError::from) })
            })
            .await
    }

    /// Check whether a row exists for the key
    async fn exists_by_id(&self, id: PrimaryKeyOf<E>) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

async fn upsert<E, M, A>(txn: &DatabaseTransaction, model: A) -> AppResult<M>
where
    E: EntityTrait<Model = M>,
    M: IntoActiveModel<A> + Send + Sync + 'static,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    if model.get_primary_key_value().is_none() {
        return model.insert(txn).await.map_err(AppError::from);
    }

    match model.clone().update(txn).await {
        Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
            tracing::debug!(
                table = E::default().table_name(),
                "No row for key, inserting"
            );
            model.insert(txn).await.map_err(AppError::from)
        }
        result => result.map_err(AppError::from),
    }
}

async fn delete_existing<E>(txn: &DatabaseTransaction, id: PrimaryKeyOf<E>) -> AppResult<()>
where
    E: EntityTrait,
    PrimaryKeyOf<E>: Clone + Debug + Send + Sync + 'static,
{
    let result = E::delete_by_id(id.clone())
        .exec(txn)
        .await
        .map_err(AppError::from)?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found(format!(
            "{} {:?}",
            E::default().table_name(),
            id
        )));
    }

    Ok(())
}
