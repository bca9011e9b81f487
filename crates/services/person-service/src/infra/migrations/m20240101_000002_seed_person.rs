//! Migration: Seed the person table with its initial rows.

use chrono::{TimeZone, Utc};
use sea_orm_migration::prelude::*;

use domain::SEED_PERSON_IDS;

use super::Person;

/// (name, location, birth year, month, day) for each seeded id, in order
const SEED_ROWS: [(&str, &str, i32, u32, u32); 3] = [
    ("Amit", "Noida", 1985, 3, 14),
    ("Priya", "Gurgaon", 1991, 11, 2),
    ("Vikram", "Delhi", 1978, 7, 23),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Person::Table).columns([
            Person::Id,
            Person::Name,
            Person::Location,
            Person::BirthDate,
        ]);

        for (id, (name, location, year, month, day)) in SEED_PERSON_IDS.iter().zip(SEED_ROWS) {
            let birth_date = Utc
                .with_ymd_and_hms(year, month, day, 0, 0, 0)
                .single()
                .ok_or_else(|| DbErr::Migration(format!("invalid seed date for person {}", id)))?;

            insert
                .values([
                    (*id).into(),
                    name.into(),
                    location.into(),
                    birth_date.into(),
                ])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Person::Table)
                    .and_where(Expr::col(Person::Id).is_in(SEED_PERSON_IDS))
                    .to_owned(),
            )
            .await
    }
}
