use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Filter conditions plus pagination, sent as `filter_conditions`.
///
/// Filter keys are inlined next to `limit` and `offset` in the same JSON
/// object. Their meaning is defined by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryOption {
    #[serde(flatten)]
    pub filter: Map<String, Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl QueryOption {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter condition, e.g. `("type", json!("messaging"))` or
    /// `("members", json!({"$in": ["alice"]}))`.
    pub fn filter(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.filter.insert(key.to_string(), value.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// True when nothing would be serialized.
    pub fn is_empty(&self) -> bool {
        self.filter.is_empty() && self.limit.is_none() && self.offset.is_none()
    }
}

impl From<Map<String, Value>> for QueryOption {
    fn from(filter: Map<String, Value>) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_i8(self) -> i8 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

impl Serialize for SortDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

/// One sort term. Earlier terms take priority on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOption {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Descending,
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction.as_i8())
    }
}

/// Parses `field`, `field:1`, `field:-1`, `field:asc` or `field:desc`.
impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.rsplit_once(':') {
            Some((field, dir)) => {
                let direction = match dir.to_ascii_lowercase().as_str() {
                    "1" | "asc" => SortDirection::Ascending,
                    "-1" | "desc" => SortDirection::Descending,
                    other => {
                        return Err(format!(
                            "invalid sort direction '{}' (expected 1, -1, asc or desc)",
                            other
                        ))
                    }
                };
                (field, direction)
            }
            None => (s, SortDirection::Ascending),
        };

        if field.is_empty() {
            return Err("sort field must not be empty".to_string());
        }

        Ok(Self {
            field: field.to_string(),
            direction,
        })
    }
}
