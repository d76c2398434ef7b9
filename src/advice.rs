//! Boundary to an external advice service.
//!
//! The service receives the human hand and the dealer's up-card as readable
//! text and answers with free-text advice such as `"Hit"`.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::AdviceError;

/// Text returned to the player when the advice service fails.
pub const FALLBACK_ADVICE: &str = "Advice is unavailable right now. Try the strategy chart.";

/// Request sent to an advice service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    /// The hand as comma-separated cards, e.g. `"10 of Spades, Ace of Hearts"`.
    pub player_hand: String,
    /// The dealer's visible card, e.g. `"King of Diamonds"`.
    pub dealer_up_card: String,
}

impl AdviceRequest {
    /// Describes `hand` against `up_card`.
    #[must_use]
    pub fn new(hand: &[Card], up_card: &Card) -> Self {
        let player_hand = hand
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            player_hand,
            dealer_up_card: up_card.to_string(),
        }
    }
}

/// Answer from an advice service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResponse {
    /// The recommended action, e.g. `"Stand"`.
    pub advice: String,
}

/// An external service that gives advice on a hand.
pub trait AdviceProvider {
    /// Asks for advice on `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the service times out, is unreachable, or returns
    /// nothing usable.
    fn advise(&self, request: &AdviceRequest) -> Result<AdviceResponse, AdviceError>;
}

impl<F> AdviceProvider for F
where
    F: Fn(&AdviceRequest) -> Result<AdviceResponse, AdviceError>,
{
    fn advise(&self, request: &AdviceRequest) -> Result<AdviceResponse, AdviceError> {
        self(request)
    }
}

/// Asks `provider` for advice, returning [`FALLBACK_ADVICE`] on any failure.
pub fn advise_or_fallback<P: AdviceProvider + ?Sized>(
    provider: &P,
    request: &AdviceRequest,
) -> String {
    let answer = provider.advise(request).and_then(|response| {
        let advice = response.advice.trim();
        if advice.is_empty() {
            Err(AdviceError::EmptyResponse)
        } else {
            Ok(advice.to_string())
        }
    });

    answer.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "advice request failed, using fallback");
        FALLBACK_ADVICE.to_string()
    })
}
