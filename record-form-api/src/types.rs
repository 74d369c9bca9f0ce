//! Wire types for the record collection endpoint.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A name/age entity persisted by the remote API.
///
/// The server assigns `id`; the client never generates one. Most deployments
/// of the API are backed by a document store and name the field `_id`, but a
/// plain `id` is accepted on input as well.
///
/// Only `id` is required when decoding. A missing `name` decodes as empty and a
/// missing or `null` age as `Age::Raw("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Opaque, server-assigned identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Age as reported by the server.
    #[serde(default)]
    pub age: Age,
}

/// Body sent with create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPayload {
    pub name: String,
    pub age: Age,
}

impl RecordPayload {
    pub fn new(name: impl Into<String>, age: Age) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Age of a record.
///
/// Outbound values are always [`Age::Years`], produced by [`Age::parse`].
/// An inbound value is [`Age::Years`] only when the server wrote it in
/// canonical form (`"30"`, not `"030"` or `" 30"`). Anything else is kept
/// verbatim as [`Age::Raw`].
///
/// On the wire an age is always a JSON string (`"31"`); a JSON number is
/// accepted when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Age {
    /// A validated whole number of years.
    Years(u16),
    /// A server-side value that is not a whole number.
    Raw(String),
}

/// Reason an age input was rejected by [`Age::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAge {
    /// Input was empty or only whitespace.
    Empty,
    /// Input was not a non-negative whole number that fits in `u16`.
    NotANumber,
}

impl fmt::Display for InvalidAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "age is empty"),
            Self::NotANumber => write!(f, "age is not a whole number"),
        }
    }
}

impl std::error::Error for InvalidAge {}

impl Age {
    /// Parse user input into a validated age.
    ///
    /// Surrounding whitespace is ignored. A leading `+` is rejected along with
    /// signs, decimals, and values above `u16::MAX`.
    pub fn parse(input: &str) -> Result<Self, InvalidAge> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InvalidAge::Empty);
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidAge::NotANumber);
        }
        trimmed
            .parse::<u16>()
            .map(Self::Years)
            .map_err(|_| InvalidAge::NotANumber)
    }

    /// Decode a server-side string without rewriting it.
    fn from_server_text(text: String) -> Self {
        match text.parse::<u16>() {
            Ok(years) if years.to_string() == text => Self::Years(years),
            _ => Self::Raw(text),
        }
    }
}

impl Default for Age {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(n) => write!(f, "{n}"),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

impl Serialize for Age {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Age {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum AgeRepr {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match Option::<AgeRepr>::deserialize(deserializer)? {
            Some(AgeRepr::Number(n)) => match n.as_u64().and_then(|v| u16::try_from(v).ok()) {
                Some(years) => Self::Years(years),
                None => Self::Raw(n.to_string()),
            },
            Some(AgeRepr::Text(text)) => Self::from_server_text(text),
            None => Self::default(),
        })
    }
}
