use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, war::AllianceConfigDto},
    server::{
        data::alliance::AllianceRepository,
        error::Error,
        model::{alliance::AllianceConfig, app::AppState},
    },
};

pub static BOT_TAG: &str = "bot";

/// List the alliances with war monitoring enabled
#[utoipa::path(
    get,
    path = "/api/bot/alliances",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Monitored alliances", body = Vec<AllianceConfigDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monitored_alliances(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let alliances: Vec<AllianceConfigDto> = AllianceRepository::new(&state.db)
        .get_monitored()
        .await?
        .into_iter()
        .map(AllianceConfig::from)
        .map(AllianceConfigDto::from)
        .collect();

    Ok((StatusCode::OK, Json(alliances)))
}
