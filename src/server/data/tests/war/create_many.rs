//! Tests for WarRepository::create_many method.

use super::*;

/// Tests inserting new wars as active rows.
///
/// Expected: Ok with both rows returned, active and carrying the source fields
#[tokio::test]
async fn inserts_active_wars() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let rose = test.alliances[0].id;
    let now = Utc::now().naive_utc();

    let raid = record(&MockWar::raid(501, 99, 10).names("Raider", "Member"));
    let ordinary = record(&MockWar::ordinary(502, 10, 99));

    let wars = WarRepository::new(&test.db)
        .create_many(rose, &[(raid, true), (ordinary, false)], now)
        .await?;

    assert_eq!(wars.len(), 2);
    let raid = wars.iter().find(|w| w.pnw_war_id == 501).unwrap();
    assert_eq!(raid.alliance_id, rose);
    assert_eq!(raid.war_type, WarType::Raid);
    assert_eq!(raid.attacker_name, "Raider");
    assert_eq!(raid.defender_name, "Member");
    assert!(raid.is_defensive);
    assert!(raid.is_active);
    assert!(raid.war_ended.is_none());

    Ok(())
}

/// Tests that a war arriving with a winner is stamped as ended.
///
/// Expected: war_ended set to the insert time
#[tokio::test]
async fn stamps_end_when_winner_reported() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let rose = test.alliances[0].id;
    let now = Utc::now().naive_utc();

    let wars = WarRepository::new(&test.db)
        .create_many(rose, &[(record(&MockWar::raid(501, 99, 10).winner(99)), true)], now)
        .await?;

    assert_eq!(wars[0].winner_id, Some(99));
    assert_eq!(wars[0].war_ended, Some(now));

    Ok(())
}

/// Tests inserting nothing.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn returns_empty_for_no_wars() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;

    let wars = WarRepository::new(&test.db)
        .create_many(test.alliances[0].id, &[], Utc::now().naive_utc())
        .await?;

    assert!(wars.is_empty());

    Ok(())
}
