use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageQuery},
        impact::{
            CreateImpactMetricDto, FarmerImpactDto, ImpactFilterQuery, ImpactMetricDto,
            ImpactSummaryDto, LeaderboardQuery,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::impact::{CreateImpactMetricParams, FarmerImpact, ImpactMetric},
        service::impact::ImpactService,
        state::AppState,
        util::extract::{ValidatedJson, ValidatedQuery},
    },
};

/// Tag for grouping impact endpoints in OpenAPI documentation
pub static IMPACT_TAG: &str = "impact";

/// Record an impact metric by hand.
#[utoipa::path(
    post,
    path = "/api/admin/impact",
    tag = IMPACT_TAG,
    request_body = CreateImpactMetricDto,
    responses(
        (status = 201, description = "Metric recorded", body = ImpactMetricDto),
        (status = 400, description = "Invalid metric", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_metric(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<CreateImpactMetricDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let metric = ImpactService::new(&state.db)
        .record(CreateImpactMetricParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(metric.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/impact",
    tag = IMPACT_TAG,
    params(PageQuery, ImpactFilterQuery),
    responses(
        (status = 200, description = "Paginated metrics", body = PageDto<ImpactMetricDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_metrics(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(page): ValidatedQuery<PageQuery>,
    Query(filter): Query<ImpactFilterQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let metrics = ImpactService::new(&state.db)
        .list(filter.kind.map(Into::into), page.page, page.entries)
        .await?;

    Ok((StatusCode::OK, Json(metrics.into_dto(ImpactMetric::into_dto))))
}

/// Farmers ranked by their weighted impact score.
#[utoipa::path(
    get,
    path = "/api/admin/impact/leaderboard",
    tag = IMPACT_TAG,
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Top farmers", body = Vec<FarmerImpactDto>),
        (status = 400, description = "Invalid limit", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    session: Session,
    ValidatedQuery(query): ValidatedQuery<LeaderboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let leaders = ImpactService::new(&state.db)
        .leaderboard(query.limit as usize)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            leaders
                .into_iter()
                .map(FarmerImpact::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Community impact totals shown on the public site.
#[utoipa::path(
    get,
    path = "/api/impact/summary",
    tag = IMPACT_TAG,
    responses(
        (status = 200, description = "Impact totals and score", body = ImpactSummaryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = ImpactService::new(&state.db).summary().await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
