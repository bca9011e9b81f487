//! Person Service Library
//!
//! This crate demonstrates CRUD over a single `person` table through two
//! repositories sharing one transaction scope. It can be driven by the
//! `person-service` binary or embedded in tests.

pub mod config;
pub mod demo;
pub mod infra;
pub mod repository;

use std::sync::Arc;

use tracing::info;

use crate::config::PersonServiceConfig;
use crate::demo::{DemoReport, DemoRunner};
use crate::infra::Database;
use crate::repository::{PersonDataRepository, PersonStore};

/// Connect, apply migrations and run the demo sequence once.
pub async fn run_demo(
    config: &PersonServiceConfig,
) -> Result<DemoReport, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let report = run_demo_on(&db).await?;
    Ok(report)
}

/// Run the demo sequence against an already migrated database.
pub async fn run_demo_on(db: &Database) -> common::AppResult<DemoReport> {
    let uow = db.unit_of_work();

    // Create repositories
    let direct = Arc::new(PersonStore::new(uow.clone()));
    let data = PersonDataRepository::new(uow);

    let report = DemoRunner::new(direct, data).run().await?;
    info!(
        direct_inserted_id = report.direct_inserted_id,
        data_inserted_id = report.data_inserted_id,
        final_count = report.final_count,
        "Demo sequence finished"
    );

    Ok(report)
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &PersonServiceConfig,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
