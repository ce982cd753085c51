pub mod compose;
pub mod error;
pub mod pptx;

pub use error::DeckError;

use chrono::{DateTime, Utc};

use crate::domain::analysis::AnalysisResult;
use crate::domain::handle::normalize_handle;

pub const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Which of the two slide layouts a slide uses. `Title` centers everything
/// in the middle band; `TitleAndBody` puts the title in the top strip and
/// the body elements below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideLayout {
    Title,
    TitleAndBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSpec {
    pub layout: SlideLayout,
    pub title: String,
    pub body: Vec<BodyElement>,
}

/// One positioned block of slide content. Positions are fixed per element
/// kind, so layout is data-independent and only the text varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyElement {
    /// Centered line under a `Title`-layout title.
    Subtitle(String),
    /// Small line pinned near the bottom edge.
    DateStamp(String),
    /// Bulleted list filling the body area.
    Bullets(Vec<Bullet>),
    /// Up to three label/value boxes on the three-column metric grid.
    MetricRow(Vec<MetricBox>),
    /// Bold heading followed by plain lines, below the metric grid.
    InfoBlock { heading: String, lines: Vec<String> },
    /// Closing sentence in the lower body area.
    ContactLine(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bullet {
    pub text: String,
    pub level: u8,
}

impl Bullet {
    pub fn top(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: 0,
        }
    }

    pub fn nested(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricBox {
    pub label: String,
    pub value: String,
}

impl MetricBox {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Render the report deck for one analysis as pptx bytes. Pure apart from
/// the injected timestamp, which only feeds the "generated on" stamps.
/// Construction failures come back as a [`DeckError`] value; nothing is
/// written on failure and nothing panics across this boundary.
pub fn render_report(
    analysis: &AnalysisResult,
    creator_name: Option<&str>,
    now_utc: DateTime<Utc>,
) -> Result<Vec<u8>, DeckError> {
    let slides = compose::compose_slides(analysis, creator_name, now_utc);
    pptx::write_package(&slides, now_utc)
        .map_err(|err| DeckError::new("package", format!("{err:#}")))
}

/// Download filename for a rendered deck. The identifier goes through the
/// same normalization as handles so `@name` and `name` agree.
pub fn suggested_filename(identifier: Option<&str>) -> String {
    let cleaned = normalize_handle(identifier.unwrap_or(""));
    if cleaned.is_empty() {
        "content_analysis.pptx".to_string()
    } else {
        format!("content_analysis_{cleaned}.pptx")
    }
}
