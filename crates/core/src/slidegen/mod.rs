pub mod client;
pub mod error;
pub mod prompt;

pub use client::SlidegenClient;

use serde::{Deserialize, Serialize};

/// URLs handed back by a successful generate call. Every field is optional
/// on the wire; whatever is present is surfaced to the caller as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDeck {
    #[serde(default)]
    pub embed: Option<String>,

    #[serde(default)]
    pub download: Option<String>,

    #[serde(default)]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_tolerates_missing_fields() {
        let deck: GeneratedDeck = serde_json::from_str("{}").unwrap();

        assert!(deck.embed.is_none());
        assert!(deck.download.is_none());
        assert!(deck.id.is_none());
    }

    #[test]
    fn deck_keeps_whatever_the_service_returns() {
        let deck: GeneratedDeck = serde_json::from_str(
            r#"{"embed":"https://example.com/e/1","download":"https://example.com/d/1","id":"deck-1","extra":true}"#,
        )
        .unwrap();

        assert_eq!(deck.embed.as_deref(), Some("https://example.com/e/1"));
        assert_eq!(deck.id.as_deref(), Some("deck-1"));
    }
}
