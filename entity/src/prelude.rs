pub use super::assignment::Entity as Assignment;
pub use super::booking::Entity as Booking;
pub use super::booking_ingredient::Entity as BookingIngredient;
pub use super::chef::Entity as Chef;
pub use super::farmer::Entity as Farmer;
pub use super::farmer_ingredient::Entity as FarmerIngredient;
pub use super::impact_metric::Entity as ImpactMetric;
pub use super::ingredient::Entity as Ingredient;
pub use super::invite::Entity as Invite;
pub use super::login_code::Entity as LoginCode;
pub use super::partner_inquiry::Entity as PartnerInquiry;
pub use super::payout::Entity as Payout;
pub use super::story::Entity as Story;
pub use super::user::Entity as User;
