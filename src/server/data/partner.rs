//! Partner inquiry repository.

use chrono::Utc;
use entity::sea_orm_active_enums::InquiryStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::partner::{CreatePartnerInquiryParams, PartnerInquiry};

pub struct PartnerInquiryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PartnerInquiryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new inquiry with status `new`.
    pub async fn create(
        &self,
        params: CreatePartnerInquiryParams,
    ) -> Result<PartnerInquiry, DbErr> {
        let now = Utc::now();

        let entity = entity::partner_inquiry::ActiveModel {
            organization: ActiveValue::Set(params.organization),
            contact_name: ActiveValue::Set(params.contact_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            partner_type: ActiveValue::Set(params.partner_type),
            message: ActiveValue::Set(params.message),
            status: ActiveValue::Set(InquiryStatus::New),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PartnerInquiry::from_entity(entity))
    }

    /// Gets paginated inquiries, newest first.
    pub async fn get_paginated(
        &self,
        status: Option<InquiryStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<PartnerInquiry>, u64), DbErr> {
        let mut query = entity::prelude::PartnerInquiry::find();
        if let Some(status) = status {
            query = query.filter(entity::partner_inquiry::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_desc(entity::partner_inquiry::Column::CreatedAt)
            .order_by_desc(entity::partner_inquiry::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let inquiries = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(PartnerInquiry::from_entity)
            .collect();

        Ok((inquiries, total))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: InquiryStatus,
    ) -> Result<Option<PartnerInquiry>, DbErr> {
        let Some(inquiry) = entity::prelude::PartnerInquiry::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::partner_inquiry::ActiveModel = inquiry.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(PartnerInquiry::from_entity(entity)))
    }
}
