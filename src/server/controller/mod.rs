//! HTTP request handlers.
//!
//! Each module groups the endpoints of one resource. Handlers check access with
//! [`AuthGuard`](crate::server::middleware::auth::AuthGuard), convert DTOs into
//! operation parameters, call the matching service and convert the result back into
//! a DTO. Every handler carries a `utoipa::path` annotation that feeds the OpenAPI
//! document served under `/api/docs`.

pub mod assignment;
pub mod auth;
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
