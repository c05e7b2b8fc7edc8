use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{AssignmentPayoutStatus, AssignmentStatus, ProviderKind};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assignment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub booking_id: i32,
    pub kind: ProviderKind,
    pub chef_id: Option<i32>,
    pub farmer_id: Option<i32>,
    pub status: AssignmentStatus,
    pub payout_amount_cents: i64,
    pub payout_status: AssignmentPayoutStatus,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub responded_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::booking::Entity",
        from = "Column::BookingId",
        to = "super::booking::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Booking,
    #[sea_orm(
        belongs_to = "super::chef::Entity",
        from = "Column::ChefId",
        to = "super::chef::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Chef,
    #[sea_orm(
        belongs_to = "super::farmer::Entity",
        from = "Column::FarmerId",
        to = "super::farmer::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Farmer,
    #[sea_orm(has_one = "super::payout::Entity")]
    Payout,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::chef::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chef.def()
    }
}

impl Related<super::farmer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farmer.def()
    }
}

impl Related<super::payout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payout.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
