use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::{SessionManagerLayer, SessionStore};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        assignment, auth, booking, chef, farmer, impact, ingredient, invite, partner, payout,
        story, user,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bornfidis Provisions API"),
    tags(
        (name = "auth", description = "Email code sign-in and session"),
        (name = "user", description = "Account administration"),
        (name = "invite", description = "Account invites"),
        (name = "farmer", description = "Farmer profiles and supply lists"),
        (name = "chef", description = "Chef profiles"),
        (name = "ingredient", description = "Ingredient catalog"),
        (name = "booking", description = "Event bookings and matching"),
        (name = "assignment", description = "Provider assignments"),
        (name = "payout", description = "Provider payouts"),
        (name = "impact", description = "Community impact metrics"),
        (name = "story", description = "Published stories"),
        (name = "partner", description = "Partnership inquiries"),
    )
)]
struct ApiDoc;

/// Collects every API route together with its OpenAPI description.
pub fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::request_login))
        .routes(routes!(auth::verify_login))
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::logout))
        // Users and invites
        .routes(routes!(user::list_users))
        .routes(routes!(invite::create_invite, invite::list_invites))
        .routes(routes!(invite::resend_invite))
        .routes(routes!(invite::revoke_invite))
        .routes(routes!(invite::get_invite))
        .routes(routes!(invite::accept_invite))
        // Farmers
        .routes(routes!(farmer::create_farmer, farmer::list_farmers))
        .routes(routes!(farmer::get_farmer, farmer::update_farmer))
        .routes(routes!(farmer::set_farmer_payout_account))
        .routes(routes!(farmer::get_my_farmer_profile))
        .routes(routes!(farmer::get_my_ingredients, farmer::set_my_ingredients))
        .routes(routes!(farmer::farmer_directory))
        // Chefs
        .routes(routes!(chef::create_chef, chef::list_chefs))
        .routes(routes!(chef::get_chef, chef::update_chef))
        .routes(routes!(chef::set_chef_payout_account))
        .routes(routes!(chef::get_my_chef_profile))
        .routes(routes!(chef::chef_directory))
        // Ingredients
        .routes(routes!(ingredient::create_ingredient))
        .routes(routes!(ingredient::update_ingredient))
        .routes(routes!(ingredient::list_ingredients))
        .routes(routes!(ingredient::get_suppliers))
        // Bookings
        .routes(routes!(booking::create_booking))
        .routes(routes!(booking::list_bookings))
        .routes(routes!(booking::get_booking))
        .routes(routes!(booking::update_booking_status))
        .routes(routes!(booking::get_booking_matches))
        .routes(routes!(booking::auto_assign_chef))
        // Assignments
        .routes(routes!(assignment::create_assignment))
        .routes(routes!(assignment::update_assignment_status))
        .routes(routes!(assignment::list_my_assignments))
        .routes(routes!(assignment::respond_to_assignment))
        // Payouts
        .routes(routes!(payout::process_assignment_payout))
        .routes(routes!(payout::process_booking_payouts))
        .routes(routes!(payout::list_payouts))
        .routes(routes!(payout::list_my_payouts))
        // Impact
        .routes(routes!(impact::record_metric, impact::list_metrics))
        .routes(routes!(impact::get_leaderboard))
        .routes(routes!(impact::get_summary))
        // Stories
        .routes(routes!(story::create_story, story::list_stories))
        .routes(routes!(story::get_story, story::update_story, story::delete_story))
        .routes(routes!(story::list_published_stories))
        .routes(routes!(story::get_published_story))
        // Partners
        .routes(routes!(partner::submit_inquiry))
        .routes(routes!(partner::list_inquiries))
        .routes(routes!(partner::update_inquiry_status))
}

/// Builds the complete application: API routes, Swagger UI, sessions, CORS and
/// request tracing.
///
/// CORS only admits the configured application origin, with credentials so the
/// session cookie is sent by the browser front end.
pub fn app<S>(state: AppState, session: SessionManagerLayer<S>) -> Router
where
    S: SessionStore + Clone,
{
    let (router, api) = api_router().split_for_parts();

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);
    match HeaderValue::from_str(&state.app_url) {
        Ok(origin) => cors = cors.allow_origin(origin),
        Err(_) => tracing::warn!("APP_URL {} is not a valid CORS origin", state.app_url),
    }

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
