//! Tests for the get_alliance_wars and sync_alliance_wars endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use bastion::server::controller::war::{get_alliance_wars, sync_alliance_wars, WarsParams};
use bastion_test_utils::fixtures::war::mockito::{
    active_war_ids_query, active_wars_query, graphql_mock,
};
use serde_json::json;

use super::*;

fn params(sync: Option<bool>) -> Query<WarsParams> {
    Query(WarsParams { sync })
}

/// Tests returning stored wars without syncing.
///
/// Expected: 200 OK with the tracked raid and no request to the API
#[tokio::test]
async fn returns_stored_wars_without_sync() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .with_members_endpoint(1, &[(10, "Member")], 0)
        .build()
        .await?;
    let alliance_id = test.alliances[0].id;
    test.war()
        .insert_war(alliance_id, &MockWar::raid(501, 99, 10), true, true)
        .await?;

    let result = get_alliance_wars(
        State(test.into_app_state()),
        Path("rose".to_string()),
        params(None),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["raids"][0]["warId"], 501);
    assert_eq!(body["alertCount"], 0);
    test.assert_mocks();

    Ok(())
}

/// Tests syncing through the query parameter.
///
/// Expected: 200 OK with the newly detected raid and its alert
#[tokio::test]
async fn syncs_when_requested() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .with_members_endpoint(1, &[(10, "Member")], 1)
        .with_wars_endpoint(vec![MockWar::raid(501, 99, 10)], 1)
        .build()
        .await?;

    let result = get_alliance_wars(
        State(test.into_app_state()),
        Path("rose".to_string()),
        params(Some(true)),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["raids"].as_array().unwrap().len(), 1);
    assert_eq!(body["alertCount"], 1);
    assert_eq!(body["raids"][0]["alerts"][0]["alertType"], "NEW_DEFENSIVE_RAID");
    test.assert_mocks();

    Ok(())
}

/// Tests the POST endpoint.
///
/// Expected: 200 OK after a sync pass
#[tokio::test]
async fn post_syncs_alliance() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .with_members_endpoint(1, &[(10, "Member")], 1)
        .with_wars_endpoint(vec![MockWar::ordinary(502, 10, 99)], 1)
        .build()
        .await?;

    let result = sync_alliance_wars(State(test.into_app_state()), Path("rose".to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["wars"][0]["warId"], 502);
    assert_eq!(body["wars"][0]["isDefensive"], false);
    assert!(body["defensiveWars"].as_array().unwrap().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Tests that a sync request for a busy alliance returns the current state.
///
/// Expected: 200 OK without any request to the API
#[tokio::test]
async fn skips_sync_for_busy_alliance() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .with_members_endpoint(1, &[(10, "Member")], 0)
        .build()
        .await?;
    let state = test.into_app_state();
    let _running = state.in_flight.try_acquire(test.alliances[0].id).unwrap();

    let result = sync_alliance_wars(State(state), Path("rose".to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    test.assert_mocks();

    Ok(())
}

/// Tests an unknown alliance slug.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn returns_not_found_for_unknown_alliance() -> Result<(), TestError> {
    let test = TestBuilder::new().with_war_tables().build().await?;

    let result = get_alliance_wars(
        State(test.into_app_state()),
        Path("eclipse".to_string()),
        params(None),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests syncing an alliance without a Politics & War alliance ID.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn returns_bad_request_without_pnw_alliance_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1).without_pnw_alliance_id())
        .build()
        .await?;

    let result = sync_alliance_wars(State(test.into_app_state()), Path("rose".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests an upstream failure during the sync.
///
/// Expected: 502 Bad Gateway once the primary query and its fallback both fail
#[tokio::test]
async fn returns_bad_gateway_on_upstream_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .with_members_endpoint(1, &[(10, "Member")], 1)
        .with_mock_endpoint(|server| {
            graphql_mock(server, active_wars_query(), 500, &json!({}), 1)
        })
        .with_mock_endpoint(|server| {
            graphql_mock(server, active_war_ids_query(), 500, &json!({}), 1)
        })
        .build()
        .await?;

    let result = sync_alliance_wars(State(test.into_app_state()), Path("rose".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}
