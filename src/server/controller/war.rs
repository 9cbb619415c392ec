use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, war::WarSyncDto},
    server::{
        data::alliance::AllianceRepository,
        error::{war::WarError, Error},
        model::{alliance::AllianceConfig, app::AppState},
        service::war::WarSyncService,
    },
};

pub static WAR_TAG: &str = "war";

#[derive(Deserialize)]
pub struct WarsParams {
    /// Run a sync pass before building the summary
    pub sync: Option<bool>,
}

/// Get an alliance's active wars and unread raid alerts
///
/// With `sync=true` a sync pass against the Politics & War API runs first. If a pass for the
/// alliance is already running the current summary is returned without syncing.
///
/// # Responses
/// - 200 (Success): Summary of active wars
/// - 400 (Bad Request): Sync requested for an alliance without a PnW alliance ID or API key
/// - 404 (Not Found): No alliance with the given slug
/// - 502 (Bad Gateway): The Politics & War API failed during the sync
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/alliance/{slug}/wars",
    tag = WAR_TAG,
    params(
        ("slug" = String, Path, description = "Alliance slug"),
        ("sync" = Option<bool>, Query, description = "Sync with the Politics & War API first"),
    ),
    responses(
        (status = 200, description = "Active wars of the alliance", body = WarSyncDto),
        (status = 400, description = "Alliance is missing its PnW alliance ID or API key", body = ErrorDto),
        (status = 404, description = "Alliance not found", body = ErrorDto),
        (status = 502, description = "Politics & War API failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alliance_wars(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    params: Query<WarsParams>,
) -> Result<impl IntoResponse, Error> {
    let summary = alliance_wars(&state, &slug, params.0.sync.unwrap_or(false)).await?;

    Ok((StatusCode::OK, Json(summary)))
}

/// Sync an alliance's wars and return the summary
///
/// # Responses
/// - 200 (Success): Summary of active wars after the sync
/// - 400 (Bad Request): Alliance has no PnW alliance ID or API key
/// - 404 (Not Found): No alliance with the given slug
/// - 502 (Bad Gateway): The Politics & War API failed
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/api/alliance/{slug}/wars",
    tag = WAR_TAG,
    params(
        ("slug" = String, Path, description = "Alliance slug"),
    ),
    responses(
        (status = 200, description = "Active wars of the alliance after the sync", body = WarSyncDto),
        (status = 400, description = "Alliance is missing its PnW alliance ID or API key", body = ErrorDto),
        (status = 404, description = "Alliance not found", body = ErrorDto),
        (status = 502, description = "Politics & War API failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_alliance_wars(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let summary = alliance_wars(&state, &slug, true).await?;

    Ok((StatusCode::OK, Json(summary)))
}

async fn alliance_wars(state: &AppState, slug: &str, sync: bool) -> Result<WarSyncDto, Error> {
    let alliance = AllianceRepository::new(&state.db)
        .get_by_slug(slug)
        .await?
        .ok_or_else(|| WarError::AllianceNotFound(slug.to_string()))?;
    let alliance = AllianceConfig::from(alliance);

    let service = WarSyncService::new(
        &state.db,
        &state.pnw_client,
        state.default_api_key.as_deref(),
    );

    if sync {
        match state.in_flight.try_acquire(alliance.id) {
            Some(_guard) => {
                service.sync_alliance(&alliance).await?;
            }
            None => tracing::info!(
                "Sync for alliance {} already running, returning current wars",
                alliance.slug
            ),
        }
    }

    service.summary(alliance.id).await
}
