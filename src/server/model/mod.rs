//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Request DTO validation rules also live here, next to the parameters they produce.

/// Implements `From` in both directions between a database enum and its DTO enum
/// when the two share variant names.
macro_rules! enum_conversion {
    ($entity:ident <=> $dto:ident { $($variant:ident),+ $(,)? }) => {
        impl From<$entity> for $dto {
            fn from(value: $entity) -> Self {
                match value {
                    $($entity::$variant => $dto::$variant,)+
                }
            }
        }

        impl From<$dto> for $entity {
            fn from(value: $dto) -> Self {
                match value {
                    $($dto::$variant => $entity::$variant,)+
                }
            }
        }
    };
}

pub mod assignment;
pub mod booking;
pub mod chef;
pub mod farmer;
pub mod impact;
pub mod ingredient;
pub mod invite;
pub mod matching;
pub mod page;
pub mod partner;
pub mod payout;
pub mod story;
pub mod user;
