use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::farmer::FarmerRepository, model::farmer::SupplyItemParams};

mod get_suppliers;
mod replace_ingredients;
