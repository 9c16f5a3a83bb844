//! The spread interpretation endpoint.
//!
//! `POST /interpret_spread` runs the whole pipeline for one request:
//! validate the payload, render the prompt, call the completion service
//! once, then normalize the returned text into the promised format.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use arcana_core::normalize::{normalize_output, EMPTY_OUTPUT_FALLBACK};
use arcana_core::prompt::{build_prompt, SYSTEM_PREAMBLE};
use arcana_core::spread::{SpreadRequest, SpreadResponse};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /interpret_spread
///
/// Returns 400 when the card list is empty and 500 when the completion
/// call fails; an empty-but-successful completion is masked with a fixed
/// fallback sentence instead of an error.
async fn interpret_spread(
    State(state): State<AppState>,
    Json(req): Json<SpreadRequest>,
) -> AppResult<Json<SpreadResponse>> {
    req.validate()?;

    let prompt = build_prompt(&req);
    tracing::debug!(
        spread_type = %req.spread_type,
        n_cards = req.cards.len(),
        daily = req.is_daily(),
        "Built spread prompt"
    );

    let input = format!("{SYSTEM_PREAMBLE}\n\n{prompt}");
    let payload = state.openai.create_response(&input).await?;

    let mut text = payload.output_text().trim().to_string();
    if text.is_empty() {
        text = EMPTY_OUTPUT_FALLBACK.to_string();
    }

    let interpretation = normalize_output(&req, &text);

    Ok(Json(SpreadResponse { interpretation }))
}

/// Mount the spread interpretation route.
pub fn router() -> Router<AppState> {
    Router::new().route("/interpret_spread", post(interpret_spread))
}
