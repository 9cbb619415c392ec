//! Tests for the get_monitored_alliances endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bastion::server::controller::bot::get_monitored_alliances;

use super::*;

/// Tests listing enabled alliances with their bot configuration.
///
/// Expected: 200 OK with only the enabled alliance
#[tokio::test]
async fn lists_enabled_alliances() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1).raid_channel("111222333"))
        .with_alliance(MockAlliance::new("tkr", 2).disabled())
        .build()
        .await?;

    let result = get_monitored_alliances(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let alliances = body.as_array().unwrap();
    assert_eq!(alliances.len(), 1);
    assert_eq!(alliances[0]["slug"], "rose");
    assert_eq!(alliances[0]["pnwAllianceId"], 1);
    assert_eq!(alliances[0]["discordRaidChannelId"], "111222333");

    Ok(())
}

/// Tests a database error.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn returns_internal_error_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_monitored_alliances(State(test.into_app_state())).await;

    let resp = match result {
        Ok(resp) => resp.into_response(),
        Err(e) => e.into_response(),
    };
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
