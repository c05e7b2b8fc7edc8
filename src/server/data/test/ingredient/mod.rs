use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::ingredient::IngredientRepository;

mod existing_ids;
mod find_by_name;
