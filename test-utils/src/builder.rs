use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Farmer};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Farmer)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and login code tables.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User).with_table(LoginCode)
    }

    /// Adds the provider directory tables.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Farmer
    /// - Chef
    /// - Ingredient
    /// - FarmerIngredient
    pub fn with_provider_tables(self) -> Self {
        self.with_table(User)
            .with_table(Farmer)
            .with_table(Chef)
            .with_table(Ingredient)
            .with_table(FarmerIngredient)
    }

    /// Adds every table required by booking, matching and assignment operations.
    ///
    /// Equivalent to `with_provider_tables()` followed by Booking, BookingIngredient,
    /// Assignment and ImpactMetric.
    pub fn with_booking_tables(self) -> Self {
        self.with_provider_tables()
            .with_table(Booking)
            .with_table(BookingIngredient)
            .with_table(Assignment)
            .with_table(ImpactMetric)
    }

    /// Adds every table required by payout operations.
    ///
    /// Equivalent to `with_booking_tables()` followed by Payout.
    pub fn with_payout_tables(self) -> Self {
        self.with_booking_tables().with_table(Payout)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(LoginCode)
            .with_table(Invite)
            .with_table(Farmer)
            .with_table(Chef)
            .with_table(Ingredient)
            .with_table(FarmerIngredient)
            .with_table(Booking)
            .with_table(BookingIngredient)
            .with_table(Assignment)
            .with_table(Payout)
            .with_table(ImpactMetric)
            .with_table(Story)
            .with_table(PartnerInquiry)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
