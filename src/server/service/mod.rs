//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing status transitions, eligibility, and idempotency
//! - **Orchestration**: Coordinating repository calls with the payment and notification providers
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod assignment;
pub mod auth;
pub mod booking;
pub mod chef;
pub mod farmer;
pub mod impact;
pub mod ingredient;
pub mod invite;
pub mod matching;
pub mod partner;
pub mod payout;
pub mod story;
pub mod user;

#[cfg(test)]
mod test;
