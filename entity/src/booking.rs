use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::BookingStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub event_date: Date,
    pub event_type: String,
    pub location: String,
    pub guest_count: i32,
    pub budget_cents: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub dietary_notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking_ingredient::Entity")]
    BookingIngredient,
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
    #[sea_orm(has_many = "super::payout::Entity")]
    Payout,
}

impl Related<super::booking_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingIngredient.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::payout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payout.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
