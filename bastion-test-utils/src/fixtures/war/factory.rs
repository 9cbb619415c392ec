//! Fixture factories for alliances and wars.

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};

use crate::constant::{TEST_ALLIANCE_NAME, TEST_API_KEY};

/// Alliance fixture definition.
#[derive(Debug, Clone)]
pub struct MockAlliance {
    pub slug: String,
    pub name: String,
    pub pnw_alliance_id: Option<i64>,
    pub raid_channel: Option<String>,
    pub enabled: bool,
    pub api_key: Option<String>,
}

impl MockAlliance {
    /// An enabled alliance with an API key and no notification channel.
    pub fn new(slug: &str, pnw_alliance_id: i64) -> Self {
        Self {
            slug: slug.to_string(),
            name: TEST_ALLIANCE_NAME.to_string(),
            pnw_alliance_id: Some(pnw_alliance_id),
            raid_channel: None,
            enabled: true,
            api_key: Some(TEST_API_KEY.to_string()),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn raid_channel(mut self, channel: &str) -> Self {
        self.raid_channel = Some(channel.to_string());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    pub fn without_pnw_alliance_id(mut self) -> Self {
        self.pnw_alliance_id = None;
        self
    }
}

/// War fixture definition, convertible to both a database row and a GraphQL payload.
#[derive(Debug, Clone)]
pub struct MockWar {
    pub id: i64,
    pub attacker_id: i64,
    pub attacker_name: String,
    pub defender_id: i64,
    pub defender_name: String,
    pub war_type: String,
    pub winner_id: Option<i64>,
    pub date: DateTime<Utc>,
}

impl MockWar {
    /// A raid that started an hour ago.
    pub fn raid(id: i64, attacker_id: i64, defender_id: i64) -> Self {
        Self {
            id,
            attacker_id,
            attacker_name: format!("Nation {}", attacker_id),
            defender_id,
            defender_name: format!("Nation {}", defender_id),
            war_type: "RAID".to_string(),
            winner_id: None,
            date: Utc::now() - Duration::hours(1),
        }
    }

    /// An ordinary war that started an hour ago.
    pub fn ordinary(id: i64, attacker_id: i64, defender_id: i64) -> Self {
        Self {
            war_type: "ORDINARY".to_string(),
            ..Self::raid(id, attacker_id, defender_id)
        }
    }

    pub fn names(mut self, attacker_name: &str, defender_name: &str) -> Self {
        self.attacker_name = attacker_name.to_string();
        self.defender_name = defender_name.to_string();
        self
    }

    pub fn started_hours_ago(mut self, hours: i64) -> Self {
        self.date = Utc::now() - Duration::hours(hours);
        self
    }

    pub fn winner(mut self, winner_id: i64) -> Self {
        self.winner_id = Some(winner_id);
        self
    }

    /// The war as the GraphQL API reports it, IDs encoded as strings.
    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id.to_string(),
            "date": self.date.to_rfc3339(),
            "war_type": self.war_type,
            "winner_id": self.winner_id.unwrap_or(0).to_string(),
            "attacker": {
                "id": self.attacker_id.to_string(),
                "nation_name": self.attacker_name,
                "alliance_id": "0",
            },
            "defender": {
                "id": self.defender_id.to_string(),
                "nation_name": self.defender_name,
                "alliance_id": "0",
            },
        })
    }
}

/// Wraps entries in the paginated GraphQL envelope under `field`.
pub fn graphql_page(field: &str, entries: Vec<Value>, has_more_pages: bool) -> Value {
    json!({
        "data": {
            field: {
                "data": entries,
                "paginatorInfo": { "hasMorePages": has_more_pages },
            }
        }
    })
}

/// Member nation entries for a `nations` response.
pub fn member_entries(members: &[(i64, &str)]) -> Vec<Value> {
    members
        .iter()
        .map(|(id, name)| json!({ "id": id.to_string(), "nation_name": name }))
        .collect()
}
