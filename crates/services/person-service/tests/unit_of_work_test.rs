//! Transaction scope tests.
//!
//! Uses in-memory SQLite (sqlite::memory:) with migrations and seed rows applied.

use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait};

use common::{AppError, AppResult, DatabaseConfig};
use domain::{UpsertPerson, SEED_PERSON_COUNT, SEED_PERSON_IDS};
use person_service_lib::infra::{Database, UnitOfWork};
use person_service_lib::repository::entities::{PersonActiveModel, PersonEntity};
use person_service_lib::repository::{PersonRepository, PersonStore};

async fn create_unit_of_work() -> UnitOfWork {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    db.unit_of_work()
}

fn new_person() -> PersonActiveModel {
    let date = Utc.with_ymd_and_hms(1992, 3, 4, 0, 0, 0).unwrap();
    UpsertPerson::new("Rahul", "Ghaziabad", date).into()
}

#[tokio::test]
async fn test_failed_transaction_rolls_back_all_writes() {
    let uow = create_unit_of_work().await;

    let result: AppResult<()> = uow
        .transaction(|txn| {
            Box::pin(async move {
                new_person().insert(txn).await.map_err(AppError::from)?;
                PersonEntity::delete_by_id(SEED_PERSON_IDS[0])
                    .exec(txn)
                    .await
                    .map_err(AppError::from)?;
                Err(AppError::internal("abort after writes"))
            })
        })
        .await;

    assert!(matches!(result, Err(AppError::Internal(_))));

    let store = PersonStore::new(uow);
    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), SEED_PERSON_COUNT);
    assert!(store.find_by_id(SEED_PERSON_IDS[0]).await.unwrap().is_some());
    assert!(all.iter().all(|p| p.name != "Rahul"));
}

#[tokio::test]
async fn test_successful_transaction_commits_writes() {
    let uow = create_unit_of_work().await;

    let inserted_id = uow
        .transaction(|txn| {
            Box::pin(async move {
                let model = new_person().insert(txn).await.map_err(AppError::from)?;
                PersonEntity::delete_by_id(SEED_PERSON_IDS[0])
                    .exec(txn)
                    .await
                    .map_err(AppError::from)?;
                Ok(model.id)
            })
        })
        .await
        .unwrap();

    let store = PersonStore::new(uow);
    let found = store.find_by_id(inserted_id).await.unwrap().unwrap();
    assert_eq!(found.name, "Rahul");
    assert!(store.find_by_id(SEED_PERSON_IDS[0]).await.unwrap().is_none());
    assert_eq!(store.find_all().await.unwrap().len(), SEED_PERSON_COUNT);
}
