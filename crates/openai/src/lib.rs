//! Typed client for the OpenAI Responses API.
//!
//! [`client::OpenAiClient`] issues the single outbound HTTP call the
//! backend makes per request; [`responses`] models the wire payloads so
//! text extraction is a structural match instead of speculative field
//! probing.

pub mod client;
pub mod responses;

pub use client::{OpenAiClient, OpenAiError};
pub use responses::ResponsePayload;
