//! SeaORM entities for the provisions marketplace.

pub mod prelude;

pub mod assignment;
pub mod booking;
pub mod booking_ingredient;
pub mod chef;
pub mod farmer;
pub mod farmer_ingredient;
pub mod impact_metric;
pub mod ingredient;
pub mod invite;
pub mod login_code;
pub mod partner_inquiry;
pub mod payout;
pub mod sea_orm_active_enums;
pub mod story;
pub mod user;
