//! Response rendering.
//!
//! Converts chosen reply text plus classification into the uniform,
//! frontend-consumable [`ReplyRecord`], applying repeat suppression against
//! the session's last rendered text.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

use super::{templates, RiskTier, Sentiment, SessionState, TurnStage};

/// Mood indicator derived from polarity.
///
/// `polarity > 0.1` is positive, `< -0.1` negative, otherwise neutral.
pub fn mood_indicator(polarity: f64) -> &'static str {
    if polarity > 0.1 {
        "\u{1F60A}" // 😊
    } else if polarity < -0.1 {
        "\u{1F614}" // 😔
    } else {
        "\u{1F610}" // 😐
    }
}

/// The externally visible reply record returned for every turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRecord {
    /// Assistant reply text.
    pub reply: String,
    /// Mood indicator token (😊 / 😐 / 😔).
    pub mood: String,
    /// Risk indicator token (💚 / 💛 / 🧡 / 🔴).
    pub risk: String,
    /// Stage the reply was produced under.
    pub stage: TurnStage,
    /// ISO-8601 render time.
    pub timestamp: String,
}

/// Renders a reply record and updates the session's repeat-suppression text.
///
/// If `text` equals the previously rendered text (exact, trimmed), a fixed
/// generic acknowledgement is substituted so the assistant never repeats
/// itself verbatim on consecutive turns.
pub fn render(
    session: &mut SessionState,
    text: &str,
    stage: TurnStage,
    sentiment: Sentiment,
    risk: RiskTier,
) -> ReplyRecord {
    let is_repeat = session
        .last_reply_text()
        .is_some_and(|last| last.trim() == text.trim());

    let reply = if is_repeat {
        templates::REPEAT_ACKNOWLEDGEMENT.to_string()
    } else {
        text.to_string()
    };

    session.set_last_reply_text(reply.clone());

    ReplyRecord {
        reply,
        mood: mood_indicator(sentiment.polarity).to_string(),
        risk: risk.indicator().to_string(),
        stage,
        timestamp: Timestamp::now().to_iso8601(),
    }
}
