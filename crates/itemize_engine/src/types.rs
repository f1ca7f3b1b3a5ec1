use std::fmt;

use serde::Deserialize;

pub type RequestId = u64;

/// One field of a parsed line as the endpoint returns it: numbers for
/// quantities and prices, strings for names and units.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ItemValue {
    Number(f64),
    Text(String),
}

/// One extracted invoice line on the wire. Every field may be absent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ParsedItem {
    #[serde(default)]
    pub product_name: Option<ItemValue>,
    #[serde(default)]
    pub quantity: Option<ItemValue>,
    #[serde(default)]
    pub unit: Option<ItemValue>,
    #[serde(default)]
    pub price: Option<ItemValue>,
    #[serde(default)]
    pub unit_price: Option<ItemValue>,
}

/// Success body of the parse endpoint. A missing or null `extracted_items`
/// counts as an empty list.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ParseResponse {
    #[serde(default)]
    pub extracted_items: Option<Vec<ParsedItem>>,
}

/// Failure body of the parse endpoint, sent with any non-2xx status.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ParseCompleted {
        request_id: RequestId,
        result: Result<Vec<ParsedItem>, ParseError>,
    },
}

/// A failed parse request. `message` is exactly what the UI shows.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: FailureKind,
    pub message: String,
}

impl ParseError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The endpoint answered with a non-success status.
    Rejected { status: u16 },
    /// The endpoint could not be reached or the connection broke.
    Network,
    /// A response body could not be decoded.
    MalformedBody,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Rejected { status } => write!(f, "rejected with status {status}"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedBody => write!(f, "malformed response body"),
        }
    }
}
