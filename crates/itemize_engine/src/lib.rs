//! Itemize engine: the parse-endpoint client and effect execution.
mod client;
mod engine;
mod types;

pub use client::{
    ClientSettings, ParseClient, ReqwestParseClient, DEFAULT_ENDPOINT, GENERIC_FAILURE_MESSAGE,
};
pub use engine::EngineHandle;
pub use types::{
    EngineEvent, ErrorBody, FailureKind, ItemValue, ParseError, ParseResponse, ParsedItem,
    RequestId,
};
