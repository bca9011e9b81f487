//! Direct person repository tests.
//!
//! Uses in-memory SQLite (sqlite::memory:) with migrations and seed rows applied.

use chrono::{DateTime, TimeZone, Utc};

use common::{AppError, DatabaseConfig};
use domain::{UpsertPerson, SEED_PERSON_COUNT, SEED_PERSON_IDS};
use person_service_lib::infra::Database;
use person_service_lib::repository::{PersonRepository, PersonStore};

async fn create_store() -> PersonStore {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    PersonStore::new(db.unit_of_work())
}

fn birth_date(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 15, 8, 30, 0).unwrap()
}

#[tokio::test]
async fn test_seed_rows_are_listed() {
    let store = create_store().await;

    let all = store.find_all().await.unwrap();

    assert_eq!(all.len(), SEED_PERSON_COUNT);
    let ids: Vec<i32> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, SEED_PERSON_IDS.to_vec());
}

#[tokio::test]
async fn test_find_missing_id_returns_none() {
    let store = create_store().await;

    let found = store.find_by_id(10021).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_insert_then_find_returns_same_fields() {
    let store = create_store().await;
    let date = birth_date(1992);

    let inserted = store
        .insert_person(UpsertPerson::new("Rahul", "Ghaziabad", date))
        .await
        .unwrap();
    let found = store.find_by_id(inserted.id).await.unwrap().unwrap();

    assert_eq!(found.name, "Rahul");
    assert_eq!(found.location, "Ghaziabad");
    assert_eq!(found.birth_date, date);
    assert_eq!(found, inserted);
}

#[tokio::test]
async fn test_update_existing_id_overwrites_fields() {
    let store = create_store().await;

    let updated = store
        .update_person(UpsertPerson::with_id(10001, "Rajeev", "Faridabad", birth_date(1980)))
        .await
        .unwrap();
    assert_eq!(updated.id, 10001);

    let found = store.find_by_id(10001).await.unwrap().unwrap();
    assert_eq!(found.name, "Rajeev");
    assert_eq!(found.location, "Faridabad");
    assert_eq!(found.birth_date, birth_date(1980));

    // Row count unchanged
    assert_eq!(store.find_all().await.unwrap().len(), SEED_PERSON_COUNT);
}

#[tokio::test]
async fn test_insert_and_update_share_merge_semantics() {
    let store = create_store().await;

    // insert_person with an existing id overwrites instead of failing
    let merged = store
        .insert_person(UpsertPerson::with_id(10002, "Anil", "Meerut", birth_date(1975)))
        .await
        .unwrap();
    assert_eq!(merged.id, 10002);

    // update_person with an unknown id inserts under that id
    let created = store
        .update_person(UpsertPerson::with_id(20001, "Sunita", "Agra", birth_date(1988)))
        .await
        .unwrap();
    assert_eq!(created.id, 20001);

    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), SEED_PERSON_COUNT + 1);
    assert_eq!(store.find_by_id(10002).await.unwrap().unwrap().name, "Anil");
}

#[tokio::test]
async fn test_delete_then_find_returns_none() {
    let store = create_store().await;

    store.delete_by_id(10001).await.unwrap();

    assert!(store.find_by_id(10001).await.unwrap().is_none());
    assert_eq!(store.find_all().await.unwrap().len(), SEED_PERSON_COUNT - 1);
}

#[tokio::test]
async fn test_delete_missing_id_reports_not_found() {
    let store = create_store().await;

    let result = store.delete_by_id(10021).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(store.find_all().await.unwrap().len(), SEED_PERSON_COUNT);
}

#[tokio::test]
async fn test_find_all_after_inserts_counts_seed_rows() {
    let store = create_store().await;

    for (name, location) in [("Rahul", "Ghaziabad"), ("Rohit", "Bokaro"), ("Neha", "Patna")] {
        store
            .insert_person(UpsertPerson::new(name, location, birth_date(1990)))
            .await
            .unwrap();
    }

    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), SEED_PERSON_COUNT + 3);
    assert!(all.iter().any(|p| p.name == "Neha" && p.location == "Patna"));
}
