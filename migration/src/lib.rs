pub use sea_orm_migration::prelude::*;

mod m20251101_000001_alliance;
mod m20251101_000002_war;
mod m20251101_000003_war_alert;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_alliance::Migration),
            Box::new(m20251101_000002_war::Migration),
            Box::new(m20251101_000003_war_alert::Migration),
        ]
    }
}
