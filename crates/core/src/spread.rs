//! Spread and card types deserialized from the client payload.
//!
//! A spread is an ordered list of drawn cards plus a `spread_type`
//! discriminator. Card order is meaningful: it is the presentation order
//! used when rendering a multi-card prompt.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Upright or reversed state of a drawn card.
///
/// Selects which meaning text applies and which label appears in the
/// rendered prompt and headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    /// Label used in prompts and section headers ("Upright" / "Reversed").
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Upright => "Upright",
            Orientation::Reversed => "Reversed",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One drawn card within a spread, as sent by the client.
///
/// Only `name`, `position`, `is_reversed`, and the two meaning texts drive
/// prompt construction; the remaining fields are descriptive metadata the
/// client may include but the backend does not interpret.
#[derive(Debug, Clone, Deserialize)]
pub struct CardDescriptor {
    /// Canonical card title, e.g. "The Fool".
    pub name: String,
    pub suit: Option<String>,
    pub number: Option<i64>,
    /// Spread-position label, e.g. "Past" or "Outcome".
    pub position: String,
    pub is_reversed: bool,
    pub upright_meaning: String,
    pub reversed_meaning: String,
    pub keywords: Option<String>,
    #[serde(rename = "imageName")]
    pub image_name: Option<String>,
    pub arcana: Option<String>,
}

impl CardDescriptor {
    /// Orientation derived from the `is_reversed` flag.
    pub fn orientation(&self) -> Orientation {
        if self.is_reversed {
            Orientation::Reversed
        } else {
            Orientation::Upright
        }
    }

    /// The meaning text matching the card's orientation.
    pub fn meaning(&self) -> &str {
        if self.is_reversed {
            &self.reversed_meaning
        } else {
            &self.upright_meaning
        }
    }
}

/// A full spread interpretation request.
#[derive(Debug, Clone, Deserialize)]
pub struct SpreadRequest {
    /// Client-chosen spread identifier, e.g. "daily" or "three_card".
    pub spread_type: String,
    /// Drawn cards in presentation order.
    pub cards: Vec<CardDescriptor>,
}

impl SpreadRequest {
    /// Reject requests with no cards.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.cards.is_empty() {
            return Err(CoreError::Validation("No cards provided".to_string()));
        }
        Ok(())
    }

    /// Whether this request uses the single-card daily format.
    ///
    /// True when `spread_type` is `"daily"` OR exactly one card is present.
    /// The disjunction is intentional: a single-card request is rendered as
    /// a daily draw even when its `spread_type` says otherwise.
    pub fn is_daily(&self) -> bool {
        self.spread_type == "daily" || self.cards.len() == 1
    }
}

/// Response body returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct SpreadResponse {
    /// Final normalized interpretation text.
    pub interpretation: String,
}
