//! Tests for WarSyncService::summary.

use super::*;

/// Tests splitting active wars into defensive wars and raids with their unread alerts.
///
/// Expected: Three wars, two defensive, one raid carrying its unread alert
#[tokio::test]
async fn groups_wars_with_unread_alerts() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let alliance_id = test.alliances[0].id;
    let raid = test
        .war()
        .insert_war(alliance_id, &MockWar::raid(501, 99, 10), true, true)
        .await?;
    test.war()
        .insert_war(alliance_id, &MockWar::ordinary(502, 98, 10), true, true)
        .await?;
    test.war()
        .insert_war(alliance_id, &MockWar::ordinary(503, 10, 97), false, true)
        .await?;
    // Ended wars are left out
    test.war()
        .insert_war(alliance_id, &MockWar::raid(504, 96, 10), true, false)
        .await?;
    test.war().insert_alert(&raid, false).await?;

    let client = test.pnw_client();
    let summary = WarSyncService::new(&test.db, &client, None)
        .summary(alliance_id)
        .await
        .unwrap();

    assert_eq!(summary.wars.len(), 3);
    assert_eq!(summary.defensive_wars.len(), 2);
    assert_eq!(summary.raids.len(), 1);
    assert_eq!(summary.alert_count, 1);

    let raid = &summary.raids[0];
    assert_eq!(raid.war_id, 501);
    assert_eq!(raid.war_type, "RAID");
    assert_eq!(raid.alerts.len(), 1);
    assert_eq!(raid.alerts[0].alert_type, "NEW_DEFENSIVE_RAID");

    Ok(())
}

/// Tests that read alerts are not counted.
///
/// Expected: alert_count of 0 and no nested alerts
#[tokio::test]
async fn omits_read_alerts() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let alliance_id = test.alliances[0].id;
    let raid = test
        .war()
        .insert_war(alliance_id, &MockWar::raid(501, 99, 10), true, true)
        .await?;
    test.war().insert_alert(&raid, true).await?;

    let client = test.pnw_client();
    let summary = WarSyncService::new(&test.db, &client, None)
        .summary(alliance_id)
        .await
        .unwrap();

    assert_eq!(summary.alert_count, 0);
    assert!(summary.raids[0].alerts.is_empty());

    Ok(())
}

/// Tests an alliance without wars.
///
/// Expected: Empty summary
#[tokio::test]
async fn returns_empty_summary() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;

    let client = test.pnw_client();
    let summary = WarSyncService::new(&test.db, &client, None)
        .summary(test.alliances[0].id)
        .await
        .unwrap();

    assert!(summary.wars.is_empty());
    assert!(summary.defensive_wars.is_empty());
    assert!(summary.raids.is_empty());
    assert_eq!(summary.alert_count, 0);

    Ok(())
}
