pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_login_code_table;
mod m20260105_000003_create_invite_table;
mod m20260106_000004_create_farmer_table;
mod m20260106_000005_create_chef_table;
mod m20260106_000006_create_ingredient_tables;
mod m20260107_000007_create_booking_tables;
mod m20260107_000008_create_assignment_table;
mod m20260107_000009_create_payout_table;
mod m20260108_000010_create_impact_metric_table;
mod m20260108_000011_create_story_table;
mod m20260108_000012_create_partner_inquiry_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_login_code_table::Migration),
            Box::new(m20260105_000003_create_invite_table::Migration),
            Box::new(m20260106_000004_create_farmer_table::Migration),
            Box::new(m20260106_000005_create_chef_table::Migration),
            Box::new(m20260106_000006_create_ingredient_tables::Migration),
            Box::new(m20260107_000007_create_booking_tables::Migration),
            Box::new(m20260107_000008_create_assignment_table::Migration),
            Box::new(m20260107_000009_create_payout_table::Migration),
            Box::new(m20260108_000010_create_impact_metric_table::Migration),
            Box::new(m20260108_000011_create_story_table::Migration),
            Box::new(m20260108_000012_create_partner_inquiry_table::Migration),
        ]
    }
}
