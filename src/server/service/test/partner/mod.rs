use entity::sea_orm_active_enums::{InquiryStatus, PartnerType};
use test_utils::builder::TestBuilder;

use crate::server::{
    error::AppError,
    model::partner::CreatePartnerInquiryParams,
    provider::test::{RecordingNotifier, SentMessage},
    service::partner::PartnerService,
};

mod submit;
mod update_status;

const ADMIN_EMAIL: &str = "admin@provisions.test";

fn params(organization: &str) -> CreatePartnerInquiryParams {
    CreatePartnerInquiryParams {
        organization: organization.to_string(),
        contact_name: "Devon Clarke".to_string(),
        email: "devon@bluemountain.coop".to_string(),
        phone: None,
        partner_type: PartnerType::Cooperative,
        message: "We grow coffee and callaloo in Portland parish.".to_string(),
    }
}
