//! Responses API payload types.
//!
//! The Responses API returns a sequence of output items tagged by
//! `"type"`; only `"message"` items carry user-visible text, inside a
//! list of content parts. This module deserializes that shape into a
//! strongly-typed [`OutputItem`] enum.

use serde::{Deserialize, Serialize};

/// Request body for `POST /responses`.
#[derive(Debug, Serialize)]
pub struct CreateResponse<'a> {
    /// Model identifier, e.g. `gpt-4.1-mini`.
    pub model: &'a str,
    /// Full instruction text (system preamble plus task prompt).
    pub input: &'a str,
    /// Hard cap on generated tokens.
    pub max_output_tokens: u32,
}

/// Successful reply from `POST /responses`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePayload {
    /// Output items in generation order. Absent field decodes as empty.
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

/// One output item, tagged by its `"type"` field.
///
/// Everything that is not a message (reasoning traces, tool calls,
/// future item kinds) collapses into [`OutputItem::Other`] and
/// contributes no text.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum OutputItem {
    #[serde(rename = "message")]
    Message(MessageItem),
    #[serde(other)]
    Other,
}

/// A `"message"` output item: an ordered list of content parts.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageItem {
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

/// One content part within a message. Parts without a `text` field
/// (refusals, annotations) are skipped during extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
}

impl ResponsePayload {
    /// Concatenate the text of every message content part, in item/part
    /// order. Non-message items and text-less parts contribute nothing.
    pub fn output_text(&self) -> String {
        let mut out = String::new();
        for item in &self.output {
            if let OutputItem::Message(message) = item {
                for part in &message.content {
                    if let Some(text) = &part.text {
                        out.push_str(text);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ResponsePayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parse_message_item_with_text() {
        let payload = parse(
            r#"{"output":[{"type":"message","content":[{"type":"output_text","text":"Hello"}]}]}"#,
        );
        match &payload.output[0] {
            OutputItem::Message(message) => {
                assert_eq!(message.content[0].text.as_deref(), Some("Hello"));
            }
            other => panic!("Expected Message, got {other:?}"),
        }
        assert_eq!(payload.output_text(), "Hello");
    }

    #[test]
    fn parse_unknown_item_type_as_other() {
        let payload = parse(
            r#"{"output":[{"type":"reasoning","summary":[]},{"type":"message","content":[{"type":"output_text","text":"Hi"}]}]}"#,
        );
        assert_eq!(payload.output.len(), 2);
        match &payload.output[0] {
            OutputItem::Other => {}
            other => panic!("Expected Other, got {other:?}"),
        }
        assert_eq!(payload.output_text(), "Hi");
    }

    #[test]
    fn concatenates_parts_in_order() {
        let payload = parse(
            r#"{"output":[
                {"type":"message","content":[
                    {"type":"output_text","text":"One. "},
                    {"type":"output_text","text":"Two."}
                ]},
                {"type":"message","content":[
                    {"type":"output_text","text":" Three."}
                ]}
            ]}"#,
        );
        assert_eq!(payload.output_text(), "One. Two. Three.");
    }

    #[test]
    fn skips_parts_without_text() {
        let payload = parse(
            r#"{"output":[{"type":"message","content":[
                {"type":"refusal"},
                {"type":"output_text","text":"Kept"}
            ]}]}"#,
        );
        assert_eq!(payload.output_text(), "Kept");
    }

    #[test]
    fn missing_output_field_is_empty() {
        let payload = parse(r#"{}"#);
        assert!(payload.output.is_empty());
        assert_eq!(payload.output_text(), "");
    }

    #[test]
    fn message_without_content_yields_empty_text() {
        let payload = parse(r#"{"output":[{"type":"message"}]}"#);
        assert_eq!(payload.output_text(), "");
    }

    #[test]
    fn serialize_create_response_body() {
        let body = CreateResponse {
            model: "gpt-4.1-mini",
            input: "Read the cards.",
            max_output_tokens: 700,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-4.1-mini",
                "input": "Read the cards.",
                "max_output_tokens": 700
            })
        );
    }
}
