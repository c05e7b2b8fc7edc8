use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PartnerTypeDto {
    Restaurant,
    Cooperative,
    Retailer,
    Nonprofit,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatusDto {
    New,
    Contacted,
    Qualified,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PartnerInquiryDto {
    pub id: i32,
    pub organization: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub partner_type: PartnerTypeDto,
    pub message: String,
    pub status: InquiryStatusDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePartnerInquiryDto {
    pub organization: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub partner_type: PartnerTypeDto,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateInquiryStatusDto {
    pub status: InquiryStatusDto,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InquiryFilterQuery {
    pub status: Option<InquiryStatusDto>,
}
