use serde::{Deserialize, Serialize};

/// Per-platform metrics, already display-formatted. Counts arrive as
/// magnitude strings ("1.2M", "850.0K") and are never re-formatted
/// downstream; the renderer treats every field as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeStats {
    pub subscribers: String,
    pub total_views: String,
    pub uploads: String,
    pub category: String,
    pub created: String,
    pub estimated_monthly_earnings: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TikTokStats {
    pub followers: String,
    pub total_likes: String,
    pub videos: String,
    pub engagement_rate: String,
}

/// Whatever stats one analysis pass collected. Passed explicitly into the
/// suggestion engine; nothing retains it between requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformSnapshot {
    pub youtube: Option<YouTubeStats>,
    pub tiktok: Option<TikTokStats>,
}

impl PlatformSnapshot {
    pub fn is_empty(&self) -> bool {
        self.youtube.is_none() && self.tiktok.is_none()
    }
}

/// Combined stats plus derived suggestions for one report-generation
/// request. Built fresh per invocation, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub youtube: Option<YouTubeStats>,
    pub tiktok: Option<TikTokStats>,
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    pub fn snapshot(&self) -> PlatformSnapshot {
        PlatformSnapshot {
            youtube: self.youtube.clone(),
            tiktok: self.tiktok.clone(),
        }
    }
}
