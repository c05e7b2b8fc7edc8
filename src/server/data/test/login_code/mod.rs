use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::login_code::LoginCodeRepository;

mod create;
mod delete_stale;
