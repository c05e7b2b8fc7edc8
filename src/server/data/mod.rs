//! Data access layer.
//!
//! Each repository borrows the database connection and converts entity models into
//! server domain models at its boundary, so services never see SeaORM entities.

pub mod assignment;
pub mod booking;
pub mod chef;
pub mod farmer;
pub mod impact;
pub mod ingredient;
pub mod invite;
pub mod login_code;
pub mod partner;
pub mod payout;
pub mod story;
pub mod user;

#[cfg(test)]
mod test;
