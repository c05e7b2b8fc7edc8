//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! into the database, so the relevant tables must exist in the test context.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let chef = factory::create_chef(&db).await?;
//! let booking = factory::create_booking(&db).await?;
//!
//! let (booking, chef, assignment) =
//!     factory::helpers::create_confirmed_chef_assignment(&db, 50_00).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let chef = factory::chef::ChefFactory::new(&db)
//!     .tier(ChefTier::Master)
//!     .payout_account("acct_123", true)
//!     .build()
//!     .await?;
//! ```

pub mod assignment;
pub mod booking;
pub mod chef;
pub mod farmer;
pub mod helpers;
pub mod ingredient;
pub mod invite;
pub mod story;
pub mod user;

pub use assignment::{create_chef_assignment, create_farmer_assignment};
pub use booking::create_booking;
pub use chef::create_chef;
pub use farmer::create_farmer;
pub use ingredient::create_ingredient;
pub use invite::create_invite;
pub use story::create_story;
pub use user::create_user;
