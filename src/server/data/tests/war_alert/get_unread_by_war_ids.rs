//! Tests for WarAlertRepository::get_unread_by_war_ids method.

use super::*;

/// Tests that read alerts and alerts of other wars are left out.
///
/// Expected: Ok with the single unread alert of the requested war
#[tokio::test]
async fn returns_unread_alerts_of_wars() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let rose = test.alliances[0].id;
    let unread = test.war().insert_war(rose, &MockWar::raid(501, 99, 10), true, true).await?;
    let read = test.war().insert_war(rose, &MockWar::raid(502, 99, 10), true, true).await?;
    let other = test.war().insert_war(rose, &MockWar::raid(503, 99, 10), true, true).await?;
    let expected = test.war().insert_alert(&unread, false).await?;
    test.war().insert_alert(&read, true).await?;
    test.war().insert_alert(&other, false).await?;

    let alerts = WarAlertRepository::new(&test.db)
        .get_unread_by_war_ids(&[unread.id, read.id])
        .await?;

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, expected.id);

    Ok(())
}

/// Tests an empty ID list.
///
/// Expected: Ok with no alerts
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_war_tables().build().await?;

    let alerts = WarAlertRepository::new(&test.db)
        .get_unread_by_war_ids(&[])
        .await?;

    assert!(alerts.is_empty());

    Ok(())
}
