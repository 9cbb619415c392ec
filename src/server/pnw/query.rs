//! GraphQL query documents sent to the Politics & War API.

use crate::server::util::pnw::PAGE_SIZE;

const NATION_FIELDS: &str = "id nation_name alliance_id";

const PAGINATOR_FIELDS: &str = "paginatorInfo { hasMorePages }";

fn war_fields() -> String {
    format!(
        "id date war_type winner_id attacker {{ {nation} }} defender {{ {nation} }}",
        nation = NATION_FIELDS
    )
}

fn id_list(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Alliance roster, one page at a time.
pub fn alliance_members(alliance_id: i64, page: u32) -> String {
    format!(
        "{{ nations(alliance_id: [{alliance_id}], first: {PAGE_SIZE}, page: {page}) {{ data {{ id nation_name }} {PAGINATOR_FIELDS} }} }}"
    )
}

/// Active wars touching any of the given nations, with full war details.
pub fn active_wars(nation_ids: &[i64], page: u32) -> String {
    format!(
        "{{ wars(nation_id: [{ids}], active: true, first: {PAGE_SIZE}, page: {page}) {{ data {{ {fields} }} {PAGINATOR_FIELDS} }} }}",
        ids = id_list(nation_ids),
        fields = war_fields(),
    )
}

/// IDs only of the active wars touching any of the given nations.
pub fn active_war_ids(nation_ids: &[i64], page: u32) -> String {
    format!(
        "{{ wars(nation_id: [{ids}], active: true, first: {PAGE_SIZE}, page: {page}) {{ data {{ id }} {PAGINATOR_FIELDS} }} }}",
        ids = id_list(nation_ids),
    )
}

/// Full war details for the given war IDs.
pub fn wars_by_id(war_ids: &[i64], page: u32) -> String {
    format!(
        "{{ wars(id: [{ids}], first: {PAGE_SIZE}, page: {page}) {{ data {{ {fields} }} {PAGINATOR_FIELDS} }} }}",
        ids = id_list(war_ids),
        fields = war_fields(),
    )
}
