pub use sea_orm_migration::prelude::*;

mod m20250823_000001_initial;
mod m20250823_000002_loan_requests;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250823_000001_initial::Migration),
            Box::new(m20250823_000002_loan_requests::Migration),
        ]
    }
}
