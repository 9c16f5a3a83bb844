//! Output normalization guardrails.
//!
//! The model is instructed to follow a fixed output skeleton, but does not
//! always comply. [`normalize_output`] applies a small set of regex-based
//! corrections to the raw completion text so the response honors the
//! format promised to the caller.

use std::sync::LazyLock;

use regex::Regex;

use crate::spread::SpreadRequest;

/// Substituted for an empty-but-successful completion result.
pub const EMPTY_OUTPUT_FALLBACK: &str = "I'm sorry, I couldn't interpret this spread right now.";

/// A leading "cheerful opener" line (`Certainly! …\n`) including its
/// trailing blank line(s). Anchored to the start of the text; a lone
/// opener with no trailing newline is left alone.
static CHEERFUL_OPENER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(Certainly!|Sure!|Of course!|Absolutely!|Okay!|Alright!)[^\n]*\n+")
        .expect("valid regex")
});

/// A `**Past|Present|Future — …**:` heading plus the whitespace that
/// follows it. Not line-anchored, lazy heading body, and the trailing
/// `\s*` deliberately swallows the gap up to the next content.
static TIMELINE_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\*\*\s*(Past|Present|Future)\s*—.*?\*\*:?\s*").expect("valid regex")
});

/// Enforce the output contract on raw completion text.
///
/// Pure function. All modes strip a leading cheerful opener; daily mode
/// additionally removes stray Past/Present/Future section headings and
/// guarantees a `**Daily Card — {name} ({orientation}):**` header derived
/// from the first card. The result is trimmed at both ends.
pub fn normalize_output(req: &SpreadRequest, text: &str) -> String {
    // Strip common "cheerful" openers.
    let mut text = CHEERFUL_OPENER_RE.replace(text, "").trim().to_string();

    if req.is_daily() {
        // If the model still tried to do Past/Present/Future, strip those
        // headings. The paragraphs underneath are kept.
        text = TIMELINE_HEADING_RE.replace_all(&text, "").trim().to_string();

        // If the model forgot the Daily Card header, prepend a simple one.
        if !text.contains("**Daily Card") {
            let card = &req.cards[0];
            text = format!(
                "**Daily Card — {} ({}):**\n{}",
                card.name,
                card.orientation(),
                text
            )
            .trim()
            .to_string();
        }
    }

    text.trim().to_string()
}
