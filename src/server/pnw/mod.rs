//! Politics & War GraphQL API client.
//!
//! [`PnwClient`] fetches alliance rosters and the active wars of a set of member nations. Member
//! IDs are sent in batches of [`WAR_BATCH_SIZE`]. When the primary war query fails with a
//! retryable error the client falls back to a two-step fetch, first the IDs of the batch's
//! active wars and then their details by war ID. The client is stateless and does no caching.

pub mod envelope;
pub mod query;

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
    time::Duration,
};

use crate::server::{
    error::{pnw::ExternalSourceError, retry::ErrorRetryStrategy},
    model::{
        alliance::AllianceMember,
        war::{RawMember, RawWarRecord},
    },
    pnw::envelope::{parse_page, ListEntry, Page},
    util::pnw::{MAX_PAGES, PNW_GRAPHQL_URL, WAR_BATCH_SIZE},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct PnwClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    batch_size: usize,
}

/// Builder for [`PnwClient`].
pub struct PnwClientBuilder {
    base_url: String,
    user_agent: Option<String>,
    batch_size: usize,
    timeout: Duration,
}

impl Default for PnwClientBuilder {
    fn default() -> Self {
        Self {
            base_url: PNW_GRAPHQL_URL.to_string(),
            user_agent: None,
            batch_size: WAR_BATCH_SIZE,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl PnwClientBuilder {
    /// GraphQL endpoint, defaults to the public Politics & War API
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Number of nation IDs sent per war query, clamped to at least 1
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<PnwClient, ExternalSourceError> {
        let mut http = reqwest::Client::builder().timeout(self.timeout);

        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        Ok(PnwClient {
            http: http.build()?,
            base_url: Arc::from(self.base_url),
            batch_size: self.batch_size,
        })
    }
}

impl PnwClient {
    pub fn builder() -> PnwClientBuilder {
        PnwClientBuilder::default()
    }

    /// Fetches every member nation of an alliance.
    ///
    /// Entries with a missing or invalid nation ID are skipped and logged.
    ///
    /// # Arguments
    /// - `alliance_id` - Politics & War alliance ID
    /// - `api_key` - Politics & War API key
    ///
    /// # Returns
    /// - `Ok(Vec<AllianceMember>)` - All members across every page of the roster
    /// - `Err(ExternalSourceError)` - HTTP, GraphQL or decode failure
    pub async fn fetch_alliance_members(
        &self,
        alliance_id: i64,
        api_key: &str,
    ) -> Result<Vec<AllianceMember>, ExternalSourceError> {
        let members: Vec<RawMember> = self
            .fetch_all_pages(api_key, "nations", |page| {
                query::alliance_members(alliance_id, page)
            })
            .await?;

        let mut seen = HashSet::new();
        let mut roster = Vec::with_capacity(members.len());

        for member in members {
            let nation_id = member
                .id
                .as_deref()
                .and_then(|id| id.trim().parse::<i64>().ok())
                .filter(|id| *id > 0);

            let Some(nation_id) = nation_id else {
                tracing::warn!(
                    "Skipping member of alliance {} with invalid nation ID {:?}",
                    alliance_id,
                    member.id
                );
                continue;
            };

            if seen.insert(nation_id) {
                roster.push(AllianceMember {
                    nation_id,
                    nation_name: member.nation_name.unwrap_or_default(),
                });
            }
        }

        tracing::debug!(
            "Fetched {} member(s) of alliance {}",
            roster.len(),
            alliance_id
        );

        Ok(roster)
    }

    /// Fetches the active wars touching any of the given member nations.
    ///
    /// Member IDs are queried in batches. A war between two members that land in different
    /// batches is returned once, preferring a copy that passes validation. Records are returned
    /// as reported; validation is left to the reconciliation step so one bad record cannot fail
    /// the fetch.
    ///
    /// # Arguments
    /// - `alliance_id` - Politics & War alliance ID, used for logging
    /// - `api_key` - Politics & War API key
    /// - `member_ids` - Nation IDs of the alliance's members
    ///
    /// # Returns
    /// - `Ok(Vec<RawWarRecord>)` - Active wars, deduplicated by war ID
    /// - `Err(ExternalSourceError)` - A batch failed permanently or after its fallback
    pub async fn fetch_active_wars(
        &self,
        alliance_id: i64,
        api_key: &str,
        member_ids: &[i64],
    ) -> Result<Vec<RawWarRecord>, ExternalSourceError> {
        let mut seen: HashMap<i64, usize> = HashMap::new();
        let mut wars: Vec<RawWarRecord> = Vec::new();

        for batch in member_ids.chunks(self.batch_size) {
            let records = match self.fetch_war_batch(api_key, batch).await {
                Ok(records) => records,
                Err(primary) if primary.to_retry_strategy() == ErrorRetryStrategy::Retry => {
                    tracing::warn!(
                        "Active wars query failed for alliance {} ({}), falling back to two-step fetch",
                        alliance_id,
                        primary
                    );

                    self.fetch_war_batch_fallback(api_key, batch)
                        .await
                        .map_err(|fallback| ExternalSourceError::FallbackExhausted {
                            primary: Box::new(primary),
                            fallback: Box::new(fallback),
                        })?
                }
                Err(e) => return Err(e),
            };

            for record in records {
                let Some(war_id) = record.war_id() else {
                    // Left for reconciliation to report as malformed
                    wars.push(record);
                    continue;
                };

                match seen.get(&war_id).copied() {
                    None => {
                        seen.insert(war_id, wars.len());
                        wars.push(record);
                    }
                    Some(index) => {
                        if !wars[index].is_valid() && record.is_valid() {
                            wars[index] = record;
                        }
                    }
                }
            }
        }

        tracing::debug!(
            "Fetched {} active war(s) for alliance {} across {} member(s)",
            wars.len(),
            alliance_id,
            member_ids.len()
        );

        Ok(wars)
    }

    async fn fetch_war_batch(
        &self,
        api_key: &str,
        nation_ids: &[i64],
    ) -> Result<Vec<RawWarRecord>, ExternalSourceError> {
        self.fetch_all_pages(api_key, "wars", |page| query::active_wars(nation_ids, page))
            .await
    }

    async fn fetch_war_batch_fallback(
        &self,
        api_key: &str,
        nation_ids: &[i64],
    ) -> Result<Vec<RawWarRecord>, ExternalSourceError> {
        let ids: Vec<RawWarRecord> = self
            .fetch_all_pages(api_key, "wars", |page| {
                query::active_war_ids(nation_ids, page)
            })
            .await?;

        let mut war_ids: Vec<i64> = ids.iter().filter_map(RawWarRecord::war_id).collect();
        war_ids.sort_unstable();
        war_ids.dedup();

        let mut wars = Vec::with_capacity(war_ids.len());
        for chunk in war_ids.chunks(self.batch_size) {
            let mut details: Vec<RawWarRecord> = self
                .fetch_all_pages(api_key, "wars", |page| query::wars_by_id(chunk, page))
                .await?;
            wars.append(&mut details);
        }

        Ok(wars)
    }

    /// Runs a paginated query until the API reports no more pages.
    async fn fetch_all_pages<T, Q>(
        &self,
        api_key: &str,
        field: &str,
        build_query: Q,
    ) -> Result<Vec<T>, ExternalSourceError>
    where
        T: ListEntry,
        Q: Fn(u32) -> String,
    {
        let mut items = Vec::new();

        for page in 1..=MAX_PAGES {
            let body = self.execute(api_key, &build_query(page)).await?;
            let Page {
                items: mut page_items,
                partial,
                dropped,
                has_more_pages,
            } = parse_page::<T>(field, &body)?;

            if partial + dropped > 0 {
                tracing::warn!(
                    "Page {} of `{}` had {} undecodable entries, {} kept by ID",
                    page,
                    field,
                    partial + dropped,
                    partial
                );
            }

            items.append(&mut page_items);

            if !has_more_pages {
                return Ok(items);
            }
        }

        Err(ExternalSourceError::PageLimit {
            field: field.to_string(),
            pages: MAX_PAGES,
        })
    }

    /// Posts a query and returns the raw body of a successful response.
    async fn execute(&self, api_key: &str, query: &str) -> Result<String, ExternalSourceError> {
        let response = self
            .http
            .post(self.base_url.as_ref())
            .query(&[("api_key", api_key)])
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ExternalSourceError::status(status.as_u16(), &body));
        }

        Ok(body)
    }
}
