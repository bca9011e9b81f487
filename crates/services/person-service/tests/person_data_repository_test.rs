//! Declarative person repository tests.
//!
//! Uses in-memory SQLite (sqlite::memory:); operations come from CrudRepository.

use chrono::{DateTime, TimeZone, Utc};

use common::{AppError, DatabaseConfig};
use domain::{Person, UpsertPerson, SEED_PERSON_COUNT};
use person_service_lib::infra::Database;
use person_service_lib::repository::entities::PersonActiveModel;
use person_service_lib::repository::{CrudRepository, PersonDataRepository};

async fn create_repository() -> PersonDataRepository {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    PersonDataRepository::new(db.unit_of_work())
}

fn birth_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1987, 6, 4, 0, 0, 0).unwrap()
}

#[tokio::test]
async fn test_save_without_id_assigns_new_identifier() {
    let repo = create_repository().await;

    let saved = repo
        .save_person(UpsertPerson::new("Rohit", "Bokaro", birth_date()))
        .await
        .unwrap();

    assert!(!domain::SEED_PERSON_IDS.contains(&saved.id));
    let found = repo.find_person(saved.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Rohit");
    assert_eq!(found.location, "Bokaro");
    assert_eq!(found.birth_date, birth_date());
}

#[tokio::test]
async fn test_save_existing_id_overwrites_row() {
    let repo = create_repository().await;

    let saved = repo
        .save_person(UpsertPerson::with_id(10001, "Rakesh", "Sahibabad", birth_date()))
        .await
        .unwrap();

    assert_eq!(saved.id, 10001);
    assert_eq!(repo.count().await.unwrap(), SEED_PERSON_COUNT as u64);
    let found = repo.find_person(10001).await.unwrap().unwrap();
    assert_eq!(found.name, "Rakesh");
    assert_eq!(found.location, "Sahibabad");
}

#[tokio::test]
async fn test_save_unknown_id_inserts_under_that_id() {
    let repo = create_repository().await;

    let saved = repo
        .save(PersonActiveModel::from(UpsertPerson::with_id(
            30001,
            "Kavita",
            "Jaipur",
            birth_date(),
        )))
        .await
        .unwrap();

    assert_eq!(saved.id, 30001);
    assert!(repo.exists_by_id(30001).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), SEED_PERSON_COUNT as u64 + 1);
}

#[tokio::test]
async fn test_find_all_returns_models_for_every_row() {
    let repo = create_repository().await;
    repo.save_person(UpsertPerson::new("Rohit", "Bokaro", birth_date()))
        .await
        .unwrap();

    let models = repo.find_all().await.unwrap();
    let persons: Vec<Person> = repo.find_all_persons().await.unwrap();

    assert_eq!(models.len(), SEED_PERSON_COUNT + 1);
    assert_eq!(persons.len(), models.len());
}

#[tokio::test]
async fn test_delete_then_find_returns_none() {
    let repo = create_repository().await;

    repo.delete_by_id(10003).await.unwrap();

    assert!(repo.find_by_id(10003).await.unwrap().is_none());
    assert!(!repo.exists_by_id(10003).await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_id_reports_not_found() {
    let repo = create_repository().await;

    let err = repo.delete_by_id(1).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "person 1 not found");
    assert_eq!(repo.count().await.unwrap(), SEED_PERSON_COUNT as u64);
}
