//! Politics & War GraphQL mock endpoint creation utilities.
//!
//! Every query is a POST to the same path, so mocks are told apart by matching on the query
//! document in the request body.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

use crate::{
    constant::TEST_API_KEY,
    fixtures::war::{
        factory::{graphql_page, member_entries, MockWar},
        WarFixtures,
    },
};

/// Matches the roster query of an alliance.
pub fn members_query(pnw_alliance_id: i64) -> Matcher {
    Matcher::Regex(format!(r"nations\(alliance_id: \[{}\]", pnw_alliance_id))
}

/// Matches the primary active wars query.
pub fn active_wars_query() -> Matcher {
    Matcher::Regex(r"wars\(nation_id: .*data \{ id date".to_string())
}

/// Matches the first step of the fallback, the ID-only active wars query.
pub fn active_war_ids_query() -> Matcher {
    Matcher::Regex(r"wars\(nation_id: .*data \{ id \}".to_string())
}

/// Matches the second step of the fallback, the wars-by-ID query.
pub fn wars_by_id_query() -> Matcher {
    Matcher::Regex(r"wars\(id: ".to_string())
}

/// Narrows `query` to requests for one page.
pub fn on_page(query: Matcher, page: u32) -> Matcher {
    Matcher::AllOf(vec![query, Matcher::Regex(format!(r"page: {}\)", page))])
}

/// Create a mock GraphQL endpoint on `server` answering queries matched by `query`.
///
/// Requests must carry [`TEST_API_KEY`] as the `api_key` query parameter, as every client
/// request does.
///
/// # Arguments
/// - `server` - Mock server to register the endpoint on
/// - `query` - Matcher applied to the request body
/// - `status` - HTTP status to respond with
/// - `body` - Response body
/// - `expected_requests` - Number of times this endpoint should be called
pub fn graphql_mock(
    server: &mut ServerGuard,
    query: Matcher,
    status: usize,
    body: &Value,
    expected_requests: usize,
) -> Mock {
    server
        .mock("POST", "/")
        .match_query(Matcher::UrlEncoded(
            "api_key".to_string(),
            TEST_API_KEY.to_string(),
        ))
        .match_body(query)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(expected_requests)
        .create()
}

impl<'a> WarFixtures<'a> {
    /// Create a mock GraphQL endpoint answering queries matched by `query` with `body`.
    ///
    /// # Arguments
    /// - `query` - Matcher applied to the request body
    /// - `status` - HTTP status to respond with
    /// - `body` - Response body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_graphql_endpoint(
        &mut self,
        query: Matcher,
        status: usize,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        graphql_mock(&mut self.setup.server, query, status, body, expected_requests)
    }

    /// Create a mock endpoint serving an alliance roster on a single page.
    pub fn create_members_endpoint(
        &mut self,
        pnw_alliance_id: i64,
        members: &[(i64, &str)],
        expected_requests: usize,
    ) -> Mock {
        let body = graphql_page("nations", member_entries(members), false);

        self.create_graphql_endpoint(
            members_query(pnw_alliance_id),
            200,
            &body,
            expected_requests,
        )
    }

    /// Create a mock endpoint serving active wars to the primary query on a single page.
    pub fn create_wars_endpoint(&mut self, wars: &[MockWar], expected_requests: usize) -> Mock {
        let body = graphql_page("wars", wars.iter().map(MockWar::to_json).collect(), false);

        self.create_graphql_endpoint(active_wars_query(), 200, &body, expected_requests)
    }

    /// Create a mock endpoint failing the primary active wars query with `status`.
    pub fn create_wars_error_endpoint(&mut self, status: usize, expected_requests: usize) -> Mock {
        let body = serde_json::json!({ "message": "upstream failure" });

        self.create_graphql_endpoint(active_wars_query(), status, &body, expected_requests)
    }
}
