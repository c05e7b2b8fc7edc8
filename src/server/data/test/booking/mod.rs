use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::booking::BookingRepository, model::booking::CreateBookingParams};

mod create;
mod get_paginated;
