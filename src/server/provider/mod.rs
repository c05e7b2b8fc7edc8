//! Outbound service providers.
//!
//! Payments and notifications are reached through vendor-neutral traits so request
//! handlers and the scheduler never depend on a concrete vendor API. Each trait has an
//! HTTP implementation for production and a local fallback used when the provider is
//! not configured.

pub mod notify;
pub mod payment;
