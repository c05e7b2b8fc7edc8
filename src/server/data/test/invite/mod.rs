use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{InviteStatus, UserRole};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::invite::InviteRepository,
    model::{invite::InviteFilter, user::CreateUserParams},
};

mod accept;
mod find_usable;
mod get_paginated;
