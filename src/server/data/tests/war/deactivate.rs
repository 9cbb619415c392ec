//! Tests for WarRepository::deactivate method.

use super::*;

/// Tests deactivating active wars.
///
/// Expected: Ok(2) with both rows inactive and stamped as ended
#[tokio::test]
async fn deactivates_and_stamps_end() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let rose = test.alliances[0].id;
    let first = test.war().insert_war(rose, &MockWar::raid(501, 99, 10), true, true).await?;
    let second = test.war().insert_war(rose, &MockWar::raid(502, 99, 10), true, true).await?;
    let now = Utc::now().naive_utc();

    let count = WarRepository::new(&test.db)
        .deactivate(&[first.id, second.id], now)
        .await?;

    assert_eq!(count, 2);
    for war in test.war().wars_by_pnw_id(rose, 501).await? {
        assert!(!war.is_active);
        assert_eq!(war.war_ended, Some(now));
    }
    assert!(WarRepository::new(&test.db).get_active(rose).await?.is_empty());

    Ok(())
}

/// Tests that already inactive wars are left untouched.
///
/// Expected: Ok(0)
#[tokio::test]
async fn skips_inactive_wars() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let rose = test.alliances[0].id;
    let war = test.war().insert_war(rose, &MockWar::raid(501, 99, 10), true, false).await?;

    let count = WarRepository::new(&test.db)
        .deactivate(&[war.id], Utc::now().naive_utc())
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

/// Tests deactivating an empty set.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn returns_zero_for_no_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_war_tables().build().await?;

    let count = WarRepository::new(&test.db)
        .deactivate(&[], Utc::now().naive_utc())
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
