//! Login code persistence.
//!
//! Codes are stored as SHA-256 hashes. A user has at most one live code: issuing a new
//! code consumes any earlier unconsumed ones.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct LoginCodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LoginCodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new code hash, invalidating earlier unconsumed codes for the user.
    pub async fn create(
        &self,
        user_id: i32,
        code_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::login_code::Model, DbErr> {
        let now = Utc::now();

        entity::prelude::LoginCode::update_many()
            .col_expr(entity::login_code::Column::ConsumedAt, Expr::value(now))
            .filter(entity::login_code::Column::UserId.eq(user_id))
            .filter(entity::login_code::Column::ConsumedAt.is_null())
            .exec(self.db)
            .await?;

        entity::login_code::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            code_hash: ActiveValue::Set(code_hash),
            expires_at: ActiveValue::Set(expires_at),
            attempts: ActiveValue::Set(0),
            consumed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the newest unconsumed, unexpired code for a user.
    pub async fn find_active(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::login_code::Model>, DbErr> {
        entity::prelude::LoginCode::find()
            .filter(entity::login_code::Column::UserId.eq(user_id))
            .filter(entity::login_code::Column::ConsumedAt.is_null())
            .filter(entity::login_code::Column::ExpiresAt.gt(now))
            .order_by_desc(entity::login_code::Column::CreatedAt)
            .order_by_desc(entity::login_code::Column::Id)
            .one(self.db)
            .await
    }

    /// Records a failed verification attempt.
    ///
    /// # Returns
    /// - `Ok(attempts)` - Attempt count after the increment
    pub async fn record_failed_attempt(&self, code: entity::login_code::Model) -> Result<i32, DbErr> {
        let attempts = code.attempts + 1;
        let mut active_model: entity::login_code::ActiveModel = code.into();
        active_model.attempts = ActiveValue::Set(attempts);
        active_model.update(self.db).await?;

        Ok(attempts)
    }

    /// Marks a code as used.
    pub async fn consume(&self, code: entity::login_code::Model) -> Result<(), DbErr> {
        let mut active_model: entity::login_code::ActiveModel = code.into();
        active_model.consumed_at = ActiveValue::Set(Some(Utc::now()));
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Deletes consumed or expired codes created before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of deleted codes
    pub async fn delete_stale(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::LoginCode::delete_many()
            .filter(entity::login_code::Column::CreatedAt.lt(cutoff))
            .filter(
                Condition::any()
                    .add(entity::login_code::Column::ConsumedAt.is_not_null())
                    .add(entity::login_code::Column::ExpiresAt.lte(Utc::now())),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
