//! Tests for AllianceRepository::get_by_slug method.

use super::*;

/// Tests finding an alliance by its slug.
///
/// Expected: Ok(Some) with the matching alliance
#[tokio::test]
async fn finds_alliance_by_slug() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .with_alliance(MockAlliance::new("tkr", 2))
        .build()
        .await?;

    let result = AllianceRepository::new(&test.db).get_by_slug("tkr").await?;

    let alliance = result.expect("alliance should exist");
    assert_eq!(alliance.slug, "tkr");
    assert_eq!(alliance.pnw_alliance_id, Some(2));

    Ok(())
}

/// Tests looking up an unknown slug.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_war_tables()
        .with_alliance(MockAlliance::new("rose", 1))
        .build()
        .await?;

    let result = AllianceRepository::new(&test.db).get_by_slug("eclipse").await?;

    assert!(result.is_none());

    Ok(())
}
