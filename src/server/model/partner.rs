use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{InquiryStatus, PartnerType};

use crate::{
    model::partner::{
        CreatePartnerInquiryDto, InquiryStatusDto, PartnerInquiryDto, PartnerTypeDto,
        UpdateInquiryStatusDto,
    },
    server::{
        error::validation::ValidationError,
        util::validate::{non_blank, normalize_email, Validate, Validator},
    },
};

enum_conversion!(PartnerType <=> PartnerTypeDto {
    Restaurant,
    Cooperative,
    Retailer,
    Nonprofit,
    Other
});
enum_conversion!(InquiryStatus <=> InquiryStatusDto { New, Contacted, Qualified, Closed });

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerInquiry {
    pub id: i32,
    pub organization: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub partner_type: PartnerType,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PartnerInquiry {
    pub fn from_entity(entity: entity::partner_inquiry::Model) -> Self {
        Self {
            id: entity.id,
            organization: entity.organization,
            contact_name: entity.contact_name,
            email: entity.email,
            phone: entity.phone,
            partner_type: entity.partner_type,
            message: entity.message,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PartnerInquiryDto {
        PartnerInquiryDto {
            id: self.id,
            organization: self.organization,
            contact_name: self.contact_name,
            email: self.email,
            phone: self.phone,
            partner_type: self.partner_type.into(),
            message: self.message,
            status: self.status.into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePartnerInquiryParams {
    pub organization: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub partner_type: PartnerType,
    pub message: String,
}

impl CreatePartnerInquiryParams {
    pub fn from_dto(dto: CreatePartnerInquiryDto) -> Self {
        Self {
            organization: dto.organization.trim().to_string(),
            contact_name: dto.contact_name.trim().to_string(),
            email: normalize_email(&dto.email),
            phone: non_blank(dto.phone),
            partner_type: dto.partner_type.into(),
            message: dto.message.trim().to_string(),
        }
    }
}

impl Validate for CreatePartnerInquiryDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Validator::new()
            .required("organization", &self.organization, 200)
            .required("contact_name", &self.contact_name, 100)
            .email("email", &self.email)
            .phone("phone", self.phone.as_deref())
            .required("message", &self.message, 5000)
            .finish()
    }
}

impl Validate for UpdateInquiryStatusDto {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
