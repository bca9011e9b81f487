//! Fixed demonstration sequence run against both repositories.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::info;

use common::AppResult;
use domain::{Person, UpsertPerson};

use crate::repository::{CrudRepository, PersonDataRepository, PersonRepository};

/// Identifier looked up by the demo; no seed row carries it
pub const MISSING_PERSON_ID: i32 = 10021;

/// Seed row overwritten by the demo
pub const UPDATED_PERSON_ID: i32 = 10001;

/// Outcome of one demo run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// Row inserted through the direct repository (removed again at the end)
    pub direct_inserted_id: i32,
    /// Row inserted through the declarative repository
    pub data_inserted_id: i32,
    /// Rows left once the sequence finishes
    pub final_count: usize,
}

/// Runs the direct-repository half, then the declarative half.
pub struct DemoRunner {
    direct: Arc<dyn PersonRepository>,
    data: PersonDataRepository,
}

impl DemoRunner {
    pub fn new(direct: Arc<dyn PersonRepository>, data: PersonDataRepository) -> Self {
        Self { direct, data }
    }

    /// Run the whole sequence once. The first failure aborts the run.
    pub async fn run(&self) -> AppResult<DemoReport> {
        let direct_inserted_id = run_direct(self.direct.as_ref()).await?;
        let (data_inserted_id, final_count) =
            run_declarative(&self.data, direct_inserted_id).await?;

        Ok(DemoReport {
            direct_inserted_id,
            data_inserted_id,
            final_count,
        })
    }
}

/// Direct repository: find, insert, update, list, delete.
///
/// Returns the identifier assigned to the inserted row.
pub async fn run_direct(repo: &dyn PersonRepository) -> AppResult<i32> {
    let found = repo.find_by_id(MISSING_PERSON_ID).await?;
    info!("Found person {} -> {}", MISSING_PERSON_ID, describe(found.as_ref()));

    let inserted = repo
        .insert_person(UpsertPerson::new("Rahul", "Ghaziabad", Utc::now()))
        .await?;
    info!("Inserting new person -> {}", inserted);

    let updated = repo
        .update_person(UpsertPerson::with_id(
            UPDATED_PERSON_ID,
            "Rajeev",
            "Faridabad",
            Utc::now(),
        ))
        .await?;
    info!("Updating person {} -> {}", UPDATED_PERSON_ID, updated);

    let all = repo.find_all().await?;
    info!("Fetching all persons -> {}", describe_all(&all));

    repo.delete_by_id(UPDATED_PERSON_ID).await?;
    info!("Deleted person {}", UPDATED_PERSON_ID);

    Ok(inserted.id)
}

/// Declarative repository: find, save, save over an id, list, delete.
///
/// `delete_id` is removed at the end. Returns the saved row's identifier
/// and the final row count.
pub async fn run_declarative(
    repo: &PersonDataRepository,
    delete_id: i32,
) -> AppResult<(i32, usize)> {
    let found = repo.find_person(MISSING_PERSON_ID).await?;
    info!("Found person {} -> {}", MISSING_PERSON_ID, describe(found.as_ref()));

    let inserted = repo
        .save_person(UpsertPerson::new("Rohit", "Bokaro", Utc::now()))
        .await?;
    info!("Inserting new person -> {}", inserted);

    let updated = repo
        .save_person(UpsertPerson::with_id(
            UPDATED_PERSON_ID,
            "Rakesh",
            "Sahibabad",
            Utc::now(),
        ))
        .await?;
    info!("Updating person {} -> {}", UPDATED_PERSON_ID, updated);

    let all = repo.find_all_persons().await?;
    info!("Fetching all persons -> {}", describe_all(&all));

    repo.delete_by_id(delete_id).await?;
    info!("Deleted person {}", delete_id);

    let remaining = repo.count().await?;
    Ok((inserted.id, remaining as usize))
}

fn describe(person: Option<&Person>) -> String {
    person.map_or_else(|| "none".to_string(), Person::to_string)
}

fn describe_all(persons: &[Person]) -> String {
    let rendered: Vec<String> = persons.iter().map(Person::to_string).collect();
    format!("[{}]", rendered.join(", "))
}
