//! Tests for WarAlertRepository::create_once method.

use super::*;

/// Tests creating one alert per war.
///
/// Expected: Ok(2) with one unread alert on each war
#[tokio::test]
async fn creates_alert_per_war() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let rose = test.alliances[0].id;
    let first = test.war().insert_war(rose, &MockWar::raid(501, 99, 10), true, true).await?;
    let second = test.war().insert_war(rose, &MockWar::raid(502, 98, 11), true, true).await?;

    let count = WarAlertRepository::new(&test.db)
        .create_once(
            AlertType::NewDefensiveRaid,
            vec![
                (first.id, "Nation 10 is under attack by Nation 99!".to_string()),
                (second.id, "Nation 11 is under attack by Nation 98!".to_string()),
            ],
            Utc::now().naive_utc(),
        )
        .await?;

    assert_eq!(count, 2);
    let alerts = test.war().alerts_for_war(first.id).await?;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].message, "Nation 10 is under attack by Nation 99!");
    assert!(!alerts[0].is_read);

    Ok(())
}

/// Tests that a war which already has an alert gets no second one.
///
/// Expected: Ok(0) and still a single alert, also for duplicates within one call
#[tokio::test]
async fn skips_wars_with_existing_alert() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let rose = test.alliances[0].id;
    let war = test.war().insert_war(rose, &MockWar::raid(501, 99, 10), true, true).await?;
    let repo = WarAlertRepository::new(&test.db);

    let first = repo
        .create_once(
            AlertType::NewDefensiveRaid,
            vec![(war.id, "first".to_string()), (war.id, "duplicate".to_string())],
            Utc::now().naive_utc(),
        )
        .await?;
    let second = repo
        .create_once(
            AlertType::NewDefensiveRaid,
            vec![(war.id, "again".to_string())],
            Utc::now().naive_utc(),
        )
        .await?;

    assert_eq!(first, 1);
    assert_eq!(second, 0);
    assert_eq!(test.war().alerts_for_war(war.id).await?.len(), 1);

    Ok(())
}
