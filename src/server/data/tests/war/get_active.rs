//! Tests for WarRepository::get_active method.

use super::*;

/// Tests that only active wars of the alliance are returned.
///
/// Verifies that inactive wars and wars tracked for another alliance are left out.
///
/// Expected: Ok with the single active war of the alliance
#[tokio::test]
async fn returns_active_wars_of_alliance() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .with_alliance(MockAlliance::new("tkr", 2))
        .build()
        .await?;
    let rose = test.alliances[0].id;
    let tkr = test.alliances[1].id;

    test.war().insert_war(rose, &MockWar::raid(501, 99, 10), true, true).await?;
    test.war().insert_war(rose, &MockWar::raid(502, 99, 10), true, false).await?;
    test.war().insert_war(tkr, &MockWar::raid(503, 99, 20), true, true).await?;

    let wars = WarRepository::new(&test.db).get_active(rose).await?;

    assert_eq!(wars.len(), 1);
    assert_eq!(wars[0].pnw_war_id, 501);

    Ok(())
}

/// Tests ordering of active wars.
///
/// Expected: Most recently inserted war first
#[tokio::test]
async fn orders_newest_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;
    let rose = test.alliances[0].id;

    test.war().insert_war(rose, &MockWar::raid(501, 99, 10), true, true).await?;
    test.war().insert_war(rose, &MockWar::ordinary(502, 10, 99), false, true).await?;

    let wars = WarRepository::new(&test.db).get_active(rose).await?;

    let ids: Vec<i64> = wars.iter().map(|w| w.pnw_war_id).collect();
    assert_eq!(ids, vec![502, 501]);

    Ok(())
}
