use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::ingredient::IngredientParams, service::ingredient::IngredientService,
};

mod create;
mod update;

fn params(name: &str) -> IngredientParams {
    IngredientParams {
        name: name.to_string(),
        category: "produce".to_string(),
        unit: "kg".to_string(),
        seasonal: true,
    }
}
