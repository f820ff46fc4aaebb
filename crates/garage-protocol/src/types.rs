use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a car record.
///
/// Opaque to the client: it is only ever read from responses and echoed
/// back in paths, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(i64);

impl CarId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid car id '{input}': expected an integer")]
pub struct ParseCarIdError {
    pub input: String,
}

impl FromStr for CarId {
    type Err = ParseCarIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(CarId)
            .map_err(|_| ParseCarIdError {
                input: s.to_string(),
            })
    }
}

/// The editable fields of a car record.
///
/// This is the exact body of create (POST) and update (PUT) requests. It
/// deliberately has no id: the client never edits identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarFields {
    #[serde(rename = "marka_model")]
    pub model: String,
    #[serde(rename = "rok_produkcji")]
    pub year: i32,
    #[serde(rename = "czy_na_chodzie")]
    pub operational: bool,
}

/// Production year a fresh create form starts with.
pub const DEFAULT_YEAR: i32 = 2000;

impl Default for CarFields {
    fn default() -> Self {
        Self {
            model: String::new(),
            year: DEFAULT_YEAR,
            operational: true,
        }
    }
}

/// A car record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRecord {
    pub id: CarId,
    #[serde(flatten)]
    pub fields: CarFields,
}

impl CarRecord {
    pub fn new(id: CarId, fields: CarFields) -> Self {
        Self { id, fields }
    }

    pub fn model(&self) -> &str {
        &self.fields.model
    }

    pub fn year(&self) -> i32 {
        self.fields.year
    }

    pub fn operational(&self) -> bool {
        self.fields.operational
    }

    /// Project the record onto its editable fields.
    pub fn fields(&self) -> CarFields {
        self.fields.clone()
    }
}

/// Tri-state filter applied to the car collection.
///
/// Serialized exactly as the backend's `filter_type` query parameter
/// expects: `all`, `true` or `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarFilter {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "true")]
    Operational,
    #[serde(rename = "false")]
    NotOperational,
}

impl CarFilter {
    pub const ALL_VALUES: [CarFilter; 3] = [
        CarFilter::All,
        CarFilter::Operational,
        CarFilter::NotOperational,
    ];

    pub fn as_query_value(self) -> &'static str {
        match self {
            CarFilter::All => "all",
            CarFilter::Operational => "true",
            CarFilter::NotOperational => "false",
        }
    }

    /// Human-readable label shown next to the filter selector.
    pub fn label(self) -> &'static str {
        match self {
            CarFilter::All => "Wszystkie (True/False)",
            CarFilter::Operational => "Tylko na chodzie (True)",
            CarFilter::NotOperational => "Tylko nie na chodzie (False)",
        }
    }
}

impl fmt::Display for CarFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid filter '{input}'. Valid: all, true, false")]
pub struct ParseFilterError {
    pub input: String,
}

impl FromStr for CarFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CarFilter::All),
            "true" => Ok(CarFilter::Operational),
            "false" => Ok(CarFilter::NotOperational),
            other => Err(ParseFilterError {
                input: other.to_string(),
            }),
        }
    }
}

/// Parameters of a collection request.
///
/// `skip` and `limit` are optional paging parameters; when `None` they are
/// left out of the query string and the backend applies its own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub filter: CarFilter,
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery {
    pub fn filtered(filter: CarFilter) -> Self {
        Self {
            filter,
            skip: None,
            limit: None,
        }
    }

    pub fn with_skip(mut self, skip: Option<u32>) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// Query-string pairs in the order they are sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("filter_type", self.filter.as_query_value().to_string())];
        if let Some(skip) = self.skip {
            pairs.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}
