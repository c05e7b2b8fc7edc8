//! Inquiries from restaurants, cooperatives, and other prospective partners.

use entity::sea_orm_active_enums::InquiryStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::partner::PartnerInquiryRepository,
    error::AppError,
    model::{
        page::Page,
        partner::{CreatePartnerInquiryParams, PartnerInquiry},
    },
    provider::notify::{send_email_best_effort, Notifier},
};

pub struct PartnerService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
    admin_email: Option<&'a str>,
}

impl<'a> PartnerService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        notifier: &'a dyn Notifier,
        admin_email: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            notifier,
            admin_email,
        }
    }

    /// Stores an inquiry and emails the admin address when one is configured.
    pub async fn submit(&self, params: CreatePartnerInquiryParams) -> Result<PartnerInquiry, AppError> {
        let inquiry = PartnerInquiryRepository::new(self.db).create(params).await?;
        tracing::info!(
            "Partner inquiry {} from {}",
            inquiry.id,
            inquiry.organization
        );

        if let Some(admin_email) = self.admin_email {
            let body = format!(
                "Organization: {}\nType: {:?}\nContact: {} <{}>\n\n{}",
                inquiry.organization,
                inquiry.partner_type,
                inquiry.contact_name,
                inquiry.email,
                inquiry.message
            );
            send_email_best_effort(self.notifier, admin_email, "New partner inquiry", &body).await;
        }

        Ok(inquiry)
    }

    pub async fn list(
        &self,
        status: Option<InquiryStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<PartnerInquiry>, AppError> {
        let (inquiries, total) = PartnerInquiryRepository::new(self.db)
            .get_paginated(status, page, per_page)
            .await?;

        Ok(Page::new(inquiries, total, page, per_page))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: InquiryStatus,
    ) -> Result<PartnerInquiry, AppError> {
        PartnerInquiryRepository::new(self.db)
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Partner inquiry not found".to_string()))
    }
}
