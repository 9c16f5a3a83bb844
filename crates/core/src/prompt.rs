//! Prompt construction for the completion service.
//!
//! Renders a validated [`SpreadRequest`] into the natural-language
//! instruction sent to the model. Two fixed formats exist: a single-card
//! daily draw and a multi-card spread. Both embed the strict formatting
//! rules the normalizer later enforces.

use crate::spread::SpreadRequest;

/// Fixed instruction prefixed to every completion request, ahead of the
/// spread-specific prompt.
pub const SYSTEM_PREAMBLE: &str = "You are a tarot reader. Be warm, clear, and realistic. \
     Follow the user-provided STRICT RULES exactly.";

/// Render the spread into the instruction block for the model.
///
/// Pure and deterministic: the same request always produces the same
/// string. Branches on [`SpreadRequest::is_daily`].
///
/// # Panics
///
/// Panics if the request has no cards. Callers run
/// [`SpreadRequest::validate`] first; the endpoint rejects empty card
/// lists before prompt construction.
pub fn build_prompt(req: &SpreadRequest) -> String {
    if req.is_daily() {
        daily_prompt(req)
    } else {
        multi_card_prompt(req)
    }
}

/// Single-card daily draw instruction block.
fn daily_prompt(req: &SpreadRequest) -> String {
    let card = &req.cards[0];

    format!(
        "You are a tarot reader. Write an interpretation for a SINGLE CARD daily draw.

STRICT RULES:
- Do NOT use Past/Present/Future.
- Do NOT include greetings or filler like \"Certainly!\", \"Sure!\", \"Of course!\".
- Do NOT mention that you're an AI.
- Output ONLY in this exact structure:

**Daily Card — {name} ({orientation}):**
<1–2 short paragraphs>

**Overall Message:**
<1 short paragraph>

Card meaning reference (use as guidance, do not quote verbatim):
{meaning}",
        name = card.name,
        orientation = card.orientation(),
        meaning = card.meaning(),
    )
}

/// Multi-card spread instruction block: rule preamble, then one
/// `- Position: … | Card: … | Orientation: … | MeaningRef: …` line per
/// card, in input order.
fn multi_card_prompt(req: &SpreadRequest) -> String {
    let mut lines: Vec<String> = vec![
        "You are a tarot reader. Interpret the following spread.".to_string(),
        String::new(),
        "STRICT RULES:".to_string(),
        "- Do NOT include greetings or filler like \"Certainly!\", \"Sure!\", \"Of course!\"."
            .to_string(),
        "- For EACH card, output exactly one section in this format:".to_string(),
        "  **<Position> — <Card Name> (<Upright/Reversed>):**".to_string(),
        "  <1 paragraph interpretation>".to_string(),
        "- End with:".to_string(),
        "  **Putting It All Together:**".to_string(),
        "  <1 paragraph synthesis>".to_string(),
        String::new(),
        "CARDS:".to_string(),
    ];

    for card in &req.cards {
        lines.push(format!(
            "- Position: {} | Card: {} | Orientation: {} | MeaningRef: {}",
            card.position,
            card.name,
            card.orientation(),
            card.meaning(),
        ));
    }

    lines.join("\n")
}
