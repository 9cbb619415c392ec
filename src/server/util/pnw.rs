/// Default Politics & War GraphQL endpoint
pub const PNW_GRAPHQL_URL: &str = "https://api.politicsandwar.com/graphql";

/// Maximum number of nation IDs sent in a single `wars` query
///
/// The API rejects overly large ID lists.
pub const WAR_BATCH_SIZE: usize = 50;

/// Page size for paginated queries, the API's maximum
pub const PAGE_SIZE: usize = 500;

/// Upper bound on pages fetched for a single paginated query
pub const MAX_PAGES: u32 = 50;

/// Link to a war's timeline on the Politics & War website
pub fn war_link(war_id: i64) -> String {
    format!("https://politicsandwar.com/nation/war/timeline/war={}", war_id)
}

/// Link to a nation on the Politics & War website
pub fn nation_link(nation_id: i64) -> String {
    format!("https://politicsandwar.com/nation/id={}", nation_id)
}
