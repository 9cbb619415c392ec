//! War record types.
//!
//! [`RawWarRecord`] is the canonical shape every Politics & War response is normalized into.
//! All of its fields are optional strings since the API is inconsistent about encoding IDs as
//! numbers or strings and occasionally omits fields. [`WarRecord`] is the validated form the
//! reconciliation engine works with.

use chrono::{DateTime, NaiveDateTime};
use entity::sea_orm_active_enums::WarType;
use serde::Deserialize;

use crate::server::{
    error::war::MalformedRecordError,
    pnw::envelope::{opt_string, ListEntry},
};

/// A nation as it appears on either side of a war in an API response.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RawNation {
    #[serde(default, deserialize_with = "opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub nation_name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub alliance_id: Option<String>,
}

/// A war exactly as reported by the API, after envelope normalization.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RawWarRecord {
    #[serde(default, deserialize_with = "opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub war_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub winner_id: Option<String>,
    #[serde(default)]
    pub attacker: Option<RawNation>,
    #[serde(default)]
    pub defender: Option<RawNation>,
}

impl RawWarRecord {
    /// The war ID, if present and numeric.
    pub fn war_id(&self) -> Option<i64> {
        self.id.as_deref().and_then(|id| id.trim().parse().ok())
    }

    /// Whether the record passes validation into a [`WarRecord`].
    pub fn is_valid(&self) -> bool {
        WarRecord::try_from(self.clone()).is_ok()
    }
}

impl ListEntry for RawWarRecord {
    fn from_id(id: String) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}

/// A member nation of an alliance.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RawMember {
    #[serde(default, deserialize_with = "opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub nation_name: Option<String>,
}

impl ListEntry for RawMember {
    fn from_id(id: String) -> Self {
        Self {
            id: Some(id),
            nation_name: None,
        }
    }
}

/// A validated war record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarRecord {
    pub war_id: i64,
    pub attacker_id: i64,
    pub attacker_name: String,
    pub attacker_alliance_id: Option<i64>,
    pub defender_id: i64,
    pub defender_name: String,
    pub defender_alliance_id: Option<i64>,
    pub war_type: WarType,
    pub winner_id: Option<i64>,
    pub war_started: NaiveDateTime,
}

impl TryFrom<RawWarRecord> for WarRecord {
    type Error = MalformedRecordError;

    fn try_from(raw: RawWarRecord) -> Result<Self, Self::Error> {
        let war_id = required_id("id", raw.id.as_deref())?;

        let attacker = raw
            .attacker
            .ok_or(MalformedRecordError::MissingField("attacker"))?;
        let defender = raw
            .defender
            .ok_or(MalformedRecordError::MissingField("defender"))?;

        let war_type = raw
            .war_type
            .ok_or(MalformedRecordError::MissingField("war_type"))
            .and_then(|war_type| parse_war_type(&war_type))?;

        let date = raw.date.ok_or(MalformedRecordError::MissingField("date"))?;
        let war_started = parse_war_date(&date)?;

        Ok(Self {
            war_id,
            attacker_id: required_id("attacker.id", attacker.id.as_deref())?,
            attacker_name: required_name("attacker.nation_name", attacker.nation_name)?,
            attacker_alliance_id: optional_id("attacker.alliance_id", attacker.alliance_id)?,
            defender_id: required_id("defender.id", defender.id.as_deref())?,
            defender_name: required_name("defender.nation_name", defender.nation_name)?,
            defender_alliance_id: optional_id("defender.alliance_id", defender.alliance_id)?,
            war_type,
            winner_id: optional_id("winner_id", raw.winner_id)?,
            war_started,
        })
    }
}

fn required_id(field: &'static str, value: Option<&str>) -> Result<i64, MalformedRecordError> {
    let value = value.ok_or(MalformedRecordError::MissingField(field))?;

    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(MalformedRecordError::InvalidId {
            field,
            value: value.to_string(),
        }),
    }
}

/// Parses an optional ID where `0` means "none", as the API reports for no alliance or no winner.
fn optional_id(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<i64>, MalformedRecordError> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };

    match value.trim().parse::<i64>() {
        Ok(0) => Ok(None),
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(MalformedRecordError::InvalidId { field, value }),
    }
}

fn required_name(
    field: &'static str,
    value: Option<String>,
) -> Result<String, MalformedRecordError> {
    value
        .filter(|name| !name.trim().is_empty())
        .ok_or(MalformedRecordError::MissingField(field))
}

/// Parses a war type name, ignoring case.
pub fn parse_war_type(value: &str) -> Result<WarType, MalformedRecordError> {
    match value.trim().to_ascii_uppercase().as_str() {
        "ORDINARY" => Ok(WarType::Ordinary),
        "RAID" => Ok(WarType::Raid),
        "ATTRITION" => Ok(WarType::Attrition),
        _ => Err(MalformedRecordError::UnknownWarType(value.to_string())),
    }
}

/// Name of a war type as the API spells it.
pub fn war_type_name(war_type: WarType) -> &'static str {
    match war_type {
        WarType::Ordinary => "ORDINARY",
        WarType::Raid => "RAID",
        WarType::Attrition => "ATTRITION",
    }
}

/// Parses a war start date into naive UTC.
///
/// The API reports RFC 3339 timestamps with an offset, older responses a bare
/// `YYYY-MM-DD HH:MM:SS` in UTC.
pub fn parse_war_date(value: &str) -> Result<NaiveDateTime, MalformedRecordError> {
    let value = value.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.naive_utc());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| MalformedRecordError::InvalidDate(value.to_string()))
}
