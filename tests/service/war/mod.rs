//! Tests for WarSyncService against a mock Politics & War API.

mod summary;

use bastion::server::{
    error::{pnw::ExternalSourceError, war::WarError, Error},
    service::war::WarSyncService,
    util::pnw::MAX_PAGES,
};
use bastion_test_utils::{
    fixtures::war::{
        factory::{graphql_page, member_entries},
        mockito::{
            active_war_ids_query, active_wars_query, graphql_mock, members_query, on_page,
            wars_by_id_query,
        },
    },
    prelude::*,
};
use entity::sea_orm_active_enums::WarType;
use serde_json::json;

use crate::util::TestContextExt;

/// Mock GraphQL endpoint answering `query` with `status` and `body`.
fn endpoint(
    query: mockito::Matcher,
    status: usize,
    body: serde_json::Value,
    expected: usize,
) -> impl FnOnce(&mut mockito::ServerGuard) -> mockito::Mock {
    move |server| graphql_mock(server, query, status, &body, expected)
}
