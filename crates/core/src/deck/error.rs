use std::fmt;

/// Failure value returned from the deck-rendering boundary. Construction
/// problems are converted into this instead of crossing the boundary as a
/// panic or a raw library error.
#[derive(Debug, Clone)]
pub struct DeckError {
    pub stage: &'static str,
    pub message: String,
}

impl DeckError {
    pub(crate) fn new(stage: &'static str, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deck rendering failed (stage={}): {}",
            self.stage, self.message
        )
    }
}

impl std::error::Error for DeckError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        let err = DeckError::new("package", "metric row holds 4 boxes");

        assert_eq!(
            err.to_string(),
            "deck rendering failed (stage=package): metric row holds 4 boxes"
        );
    }
}
