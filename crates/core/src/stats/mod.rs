pub mod magnitude;
pub mod simulated;

use anyhow::Result;

use crate::domain::analysis::{AnalysisResult, PlatformSnapshot, TikTokStats, YouTubeStats};
use crate::domain::handle::normalize_handle;
use crate::suggest;

/// Source of per-platform creator metrics. Implementations receive handles
/// already normalized by [`analyze`]. Numeric fields arrive display-formatted
/// (see [`magnitude::format_count`]).
#[async_trait::async_trait]
pub trait StatsProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    async fn youtube_stats(&self, channel: &str) -> Result<YouTubeStats>;

    async fn tiktok_stats(&self, username: &str) -> Result<TikTokStats>;
}

/// Collect stats for whichever handles were supplied, then derive the
/// suggestion list from the resulting snapshot. A blank handle (before or
/// after normalization) means the platform was not requested. A provider
/// failure degrades that platform to absent instead of failing the analysis.
pub async fn analyze(
    provider: &dyn StatsProvider,
    youtube_channel: Option<&str>,
    tiktok_username: Option<&str>,
) -> AnalysisResult {
    let snapshot = collect(provider, youtube_channel, tiktok_username).await;
    let suggestions = suggest::generate_suggestions(&snapshot);

    AnalysisResult {
        youtube: snapshot.youtube,
        tiktok: snapshot.tiktok,
        suggestions,
    }
}

async fn collect(
    provider: &dyn StatsProvider,
    youtube_channel: Option<&str>,
    tiktok_username: Option<&str>,
) -> PlatformSnapshot {
    let mut snapshot = PlatformSnapshot::default();

    if let Some(channel) = requested(youtube_channel) {
        match provider.youtube_stats(&channel).await {
            Ok(stats) => snapshot.youtube = Some(stats),
            Err(err) => tracing::warn!(
                provider = provider.provider_name(),
                channel = %channel,
                error = %format!("{err:#}"),
                "youtube stats unavailable, continuing without them"
            ),
        }
    }

    if let Some(username) = requested(tiktok_username) {
        match provider.tiktok_stats(&username).await {
            Ok(stats) => snapshot.tiktok = Some(stats),
            Err(err) => tracing::warn!(
                provider = provider.provider_name(),
                username = %username,
                error = %format!("{err:#}"),
                "tiktok stats unavailable, continuing without them"
            ),
        }
    }

    snapshot
}

fn requested(handle: Option<&str>) -> Option<String> {
    let normalized = normalize_handle(handle?);
    (!normalized.is_empty()).then_some(normalized)
}

#[cfg(test)]
mod tests {
    use super::simulated::SimulatedStatsProvider;
    use super::*;
    use anyhow::bail;

    struct FailingProvider;

    #[async_trait::async_trait]
    impl StatsProvider for FailingProvider {
        fn provider_name(&self) -> &'static str {
            "failing"
        }

        async fn youtube_stats(&self, _channel: &str) -> Result<YouTubeStats> {
            bail!("upstream unavailable")
        }

        async fn tiktok_stats(&self, _username: &str) -> Result<TikTokStats> {
            bail!("upstream unavailable")
        }
    }

    #[tokio::test]
    async fn youtube_only_analysis_has_four_suggestions() {
        let analysis = analyze(&SimulatedStatsProvider, Some("@mychannel"), Some("")).await;

        assert!(analysis.youtube.is_some());
        assert!(analysis.tiktok.is_none());
        assert_eq!(analysis.suggestions.len(), 4);
    }

    #[tokio::test]
    async fn dual_platform_analysis_has_eleven_suggestions() {
        let analysis =
            analyze(&SimulatedStatsProvider, Some("mychannel"), Some("@dancequeen")).await;

        assert!(analysis.youtube.is_some());
        assert!(analysis.tiktok.is_some());
        assert_eq!(analysis.suggestions.len(), 11);
    }

    #[tokio::test]
    async fn blank_handles_produce_the_no_data_analysis() {
        let analysis = analyze(&SimulatedStatsProvider, Some("   "), None).await;

        assert!(analysis.youtube.is_none());
        assert!(analysis.tiktok.is_none());
        assert_eq!(analysis.suggestions.len(), 1);
    }

    #[tokio::test]
    async fn provider_failure_degrades_the_platform_instead_of_failing() {
        let analysis = analyze(&FailingProvider, Some("mychannel"), None).await;

        assert!(analysis.youtube.is_none());
        assert_eq!(analysis.suggestions.len(), 1);
    }
}
