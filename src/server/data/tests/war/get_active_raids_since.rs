//! Tests for WarRepository::get_active_raids_since method.

use super::*;

/// Tests filtering to active defensive raids started inside the window.
///
/// Verifies that offensive raids, ordinary wars, inactive raids and raids started before the
/// cutoff are all left out.
///
/// Expected: Ok with only war 501
#[tokio::test]
async fn returns_recent_defensive_raids() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let rose = test.alliances[0].id;

    test.war().insert_war(rose, &MockWar::raid(501, 99, 10), true, true).await?;
    // Offensive
    test.war().insert_war(rose, &MockWar::raid(502, 10, 99), false, true).await?;
    test.war().insert_war(rose, &MockWar::ordinary(503, 99, 10), true, true).await?;
    test.war().insert_war(rose, &MockWar::raid(504, 99, 10), true, false).await?;
    test.war()
        .insert_war(rose, &MockWar::raid(505, 99, 10).started_hours_ago(30), true, true)
        .await?;

    let since = (Utc::now() - Duration::hours(24)).naive_utc();
    let raids = WarRepository::new(&test.db)
        .get_active_raids_since(rose, since)
        .await?;

    let ids: Vec<i64> = raids.iter().map(|w| w.pnw_war_id).collect();
    assert_eq!(ids, vec![501]);

    Ok(())
}
