//! Domain data structures shared by the option providers, the search
//! gateway and the adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Query parameter selecting the repository to search
pub const PARAM_REPOSITORY: &str = "r";

/// A single selectable RunDeck option
///
/// Serialized as `{"name": ..., "value": ...}`, the shape RunDeck's
/// remote option model expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RundeckOption {
    pub name: String,
    pub value: String,
}

impl RundeckOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Option whose display name is its value
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            name: value.clone(),
            value,
        }
    }
}

impl Ord for RundeckOption {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for RundeckOption {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One search hit returned by a [`SearchGateway`](crate::core::gateway::SearchGateway)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    #[serde(default)]
    pub repository_id: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    pub last_modified: DateTime<Utc>,
}

/// Request query parameters, first occurrence of a key wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from decoded `key=value` pairs in request order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.insert(key, value);
        }
        params
    }

    /// Insert a parameter unless the key is already present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Repository to scope the search to, `None` means every repository
    pub fn repository_id(&self) -> Option<&str> {
        self.get(PARAM_REPOSITORY)
    }

    /// Boolean flag; anything other than a case-insensitive "true" is false
    pub fn flag(&self, key: &str) -> bool {
        self.get(key)
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }

    /// Positive integer parameter; absent, malformed or non-positive values yield `None`
    pub fn positive_int(&self, key: &str) -> Option<usize> {
        self.get(key)
            .and_then(|v| v.parse::<i32>().ok())
            .filter(|n| *n > 0)
            .map(|n| n as usize)
    }

    /// Every parameter, forwarded to the gateway as search terms
    pub fn terms(&self) -> &HashMap<String, String> {
        &self.values
    }
}
