//! API data transfer objects.
//!
//! These types define the JSON contract of the HTTP API. They carry no database or
//! business logic; the server layer converts its domain models into these DTOs before
//! responding and converts incoming DTOs into operation parameters.

pub mod api;
pub mod assignment;
pub mod booking;
pub mod chef;
pub mod farmer;
pub mod impact;
pub mod ingredient;
pub mod invite;
pub mod partner;
pub mod payout;
pub mod story;
pub mod user;
