//! Tests for AllianceRepository::get_monitored method.

use super::*;

/// Tests that only alliances with the monitor enabled are returned, in ID order.
///
/// Expected: Ok with the two enabled alliances
#[tokio::test]
async fn returns_enabled_alliances_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .with_alliance(MockAlliance::new("tkr", 2).disabled())
        .with_alliance(MockAlliance::new("eclipse", 3))
        .build()
        .await?;

    let alliances = AllianceRepository::new(&test.db).get_monitored().await?;

    let slugs: Vec<&str> = alliances.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["rose", "eclipse"]);

    Ok(())
}

/// Tests an empty table.
///
/// Expected: Ok with no alliances
#[tokio::test]
async fn returns_empty_without_alliances() -> Result<(), TestError> {
    let test = TestBuilder::new().with_war_tables().build().await?;

    let alliances = AllianceRepository::new(&test.db).get_monitored().await?;

    assert!(alliances.is_empty());

    Ok(())
}
