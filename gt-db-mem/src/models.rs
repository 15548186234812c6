//! Serialization models of the JSON snapshot file. Kept separate from
//! the domain entities on purpose; only this crate knows the file
//! layout.

use serde::{Deserialize, Serialize};

use gt_core::entities::*;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub days: Vec<DayRecord>,
    #[serde(default)]
    pub trees: Vec<TreeRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayRecord {
    pub key: String,
    pub open_until_ms: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TreeRecord {
    pub day: String,
    pub entries: Vec<EntryRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_ms: Option<i64>,
}

impl From<&Day> for DayRecord {
    fn from(from: &Day) -> Self {
        Self {
            key: from.key.to_string(),
            open_until_ms: from.open_until.as_millis(),
        }
    }
}

impl TryFrom<&DayRecord> for Day {
    type Error = DayKeyParseError;

    fn try_from(from: &DayRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            key: from.key.parse()?,
            open_until: Timestamp::from_millis(from.open_until_ms),
        })
    }
}

impl From<&Entry> for EntryRecord {
    fn from(from: &Entry) -> Self {
        Self {
            id: from.id.to_string(),
            author: from.author.to_string(),
            display_name: from.display_name.clone(),
            anonymous: from.anonymous,
            text: from.text.clone(),
            parent: from.parent.as_ref().map(ToString::to_string),
            created_at_ms: from.created_at.map(Timestamp::as_millis),
        }
    }
}

impl From<EntryRecord> for Entry {
    fn from(from: EntryRecord) -> Self {
        Self {
            id: from.id.into(),
            author: from.author.into(),
            display_name: from.display_name,
            anonymous: from.anonymous,
            text: from.text,
            parent: from.parent.map(Into::into),
            created_at: from.created_at_ms.map(Timestamp::from_millis),
        }
    }
}
