use crate::domain::analysis::{TikTokStats, YouTubeStats};
use crate::stats::magnitude::format_count;
use crate::stats::StatsProvider;
use anyhow::Result;
use rand::Rng;

const YOUTUBE_CATEGORIES: [&str; 5] = [
    "Entertainment",
    "Gaming",
    "Education",
    "Technology",
    "Lifestyle",
];

const CREATION_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// Stand-in for the live platform APIs: plausible numbers, already
/// display-formatted, always available. Handles are accepted but do not
/// influence the synthesized values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedStatsProvider;

impl SimulatedStatsProvider {
    pub(crate) fn synthesize_youtube() -> YouTubeStats {
        let mut rng = rand::thread_rng();

        let month = CREATION_MONTHS[rng.gen_range(0..CREATION_MONTHS.len())];
        let category = YOUTUBE_CATEGORIES[rng.gen_range(0..YOUTUBE_CATEGORIES.len())];

        YouTubeStats {
            subscribers: format_count(rng.gen_range(100_000..=10_000_000)),
            total_views: format_count(rng.gen_range(1_000_000..=100_000_000)),
            uploads: rng.gen_range(50..=500u32).to_string(),
            category: category.to_string(),
            created: format!("Created {month} {}", rng.gen_range(2010..=2020)),
            estimated_monthly_earnings: format!(
                "${}K - ${}K",
                rng.gen_range(1..=10u32),
                rng.gen_range(11..=50u32)
            ),
        }
    }

    pub(crate) fn synthesize_tiktok() -> TikTokStats {
        let mut rng = rand::thread_rng();

        TikTokStats {
            followers: format_count(rng.gen_range(50_000..=5_000_000)),
            total_likes: format_count(rng.gen_range(500_000..=50_000_000)),
            videos: rng.gen_range(50..=1_000u32).to_string(),
            engagement_rate: format!("{:.1}%", rng.gen_range(1.5..=10.5)),
        }
    }
}

#[async_trait::async_trait]
impl StatsProvider for SimulatedStatsProvider {
    fn provider_name(&self) -> &'static str {
        "simulated"
    }

    async fn youtube_stats(&self, _channel: &str) -> Result<YouTubeStats> {
        Ok(Self::synthesize_youtube())
    }

    async fn tiktok_stats(&self, _username: &str) -> Result<TikTokStats> {
        Ok(Self::synthesize_tiktok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::magnitude::parse_magnitude;

    #[test]
    fn youtube_counts_parse_back_into_their_ranges() {
        for _ in 0..32 {
            let stats = SimulatedStatsProvider::synthesize_youtube();

            let subscribers = parse_magnitude(&stats.subscribers).unwrap();
            assert!((100_000.0..=10_000_000.0).contains(&subscribers));

            let views = parse_magnitude(&stats.total_views).unwrap();
            assert!((1_000_000.0..=100_000_000.0).contains(&views));

            let uploads: u32 = stats.uploads.parse().unwrap();
            assert!((50..=500).contains(&uploads));

            assert!(YOUTUBE_CATEGORIES.contains(&stats.category.as_str()));
            assert!(stats.created.starts_with("Created "));
            assert!(stats.estimated_monthly_earnings.starts_with('$'));
        }
    }

    #[test]
    fn tiktok_counts_parse_back_into_their_ranges() {
        for _ in 0..32 {
            let stats = SimulatedStatsProvider::synthesize_tiktok();

            let followers = parse_magnitude(&stats.followers).unwrap();
            assert!((50_000.0..=5_000_000.0).contains(&followers));

            let likes = parse_magnitude(&stats.total_likes).unwrap();
            assert!((500_000.0..=50_000_000.0).contains(&likes));

            let videos: u32 = stats.videos.parse().unwrap();
            assert!((50..=1_000).contains(&videos));

            let rate: f64 = stats.engagement_rate.strip_suffix('%').unwrap().parse().unwrap();
            assert!((1.5..=10.5).contains(&rate));
        }
    }
}
