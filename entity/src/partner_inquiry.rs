use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{InquiryStatus, PartnerType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "partner_inquiry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub organization: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub partner_type: PartnerType,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
