use crate::domain::analysis::PlatformSnapshot;
use crate::stats::magnitude::{audience_tier, parse_magnitude, AudienceTier};

/// The single suggestion emitted when no platform data is present at all.
pub const NO_DATA_SUGGESTION: &str = "No data available to generate suggestions. Please provide at least one valid social media account.";

const YOUTUBE_GENERAL_TIPS: [&str; 3] = [
    "Create eye-catching thumbnails and compelling titles to increase click-through rates on YouTube.",
    "Optimize your YouTube video descriptions with relevant keywords and timestamps.",
    "Analyze your YouTube retention data and focus on improving the first 30 seconds of your videos.",
];

const TIKTOK_GENERAL_TIPS: [&str; 3] = [
    "Post consistently on TikTok at times when your audience is most active.",
    "Participate in trending TikTok challenges and use popular sounds to increase visibility.",
    "Keep your TikTok videos concise with a hook in the first 3 seconds.",
];

const CROSS_PLATFORM_TIPS: [&str; 3] = [
    "Repurpose your content across platforms while adapting to each platform's format requirements.",
    "Create a consistent visual identity across all your social media platforms.",
    "Drive traffic between your platforms by mentioning your other accounts in your content.",
];

fn youtube_tier_tip(tier: AudienceTier) -> &'static str {
    match tier {
        AudienceTier::UnderOneThousand => "Your YouTube channel has fewer than 1,000 subscribers. Focus on consistent uploading schedule and niche-specific content to grow your audience.",
        AudienceTier::UnderTenThousand => "Your YouTube channel is growing. Consider collaborating with similar-sized creators to expand your reach.",
        AudienceTier::UnderHundredThousand => "Your YouTube channel has good traction. Start optimizing for monetization and engagement metrics.",
        AudienceTier::HundredThousandPlus => "Your YouTube channel has strong viewership. Focus on diversifying content formats and revenue streams.",
    }
}

fn tiktok_tier_tip(tier: AudienceTier) -> &'static str {
    match tier {
        AudienceTier::UnderOneThousand => "Your TikTok account has fewer than 1,000 followers. Focus on trending sounds and hashtags to increase visibility.",
        AudienceTier::UnderTenThousand => "Your TikTok is growing well. Maintain posting frequency of 1-3 videos per day for optimal growth.",
        AudienceTier::UnderHundredThousand => "Your TikTok has substantial following. Consider cross-promoting to other platforms like Instagram Reels or YouTube Shorts.",
        AudienceTier::HundredThousandPlus => "Your TikTok has a large audience. Focus on brand partnerships and merchandise opportunities.",
    }
}

/// Build the ordered suggestion list for a snapshot: per-platform general
/// tips, an audience-tier tip sized from the display-formatted count, and
/// cross-platform tips when both platforms are present. A count that cannot
/// be parsed back skips the tier tip for that platform only.
pub fn generate_suggestions(snapshot: &PlatformSnapshot) -> Vec<String> {
    if snapshot.is_empty() {
        return vec![NO_DATA_SUGGESTION.to_string()];
    }

    let mut suggestions: Vec<String> = Vec::new();

    if let Some(youtube) = &snapshot.youtube {
        suggestions.extend(YOUTUBE_GENERAL_TIPS.iter().map(|tip| tip.to_string()));
        match parse_magnitude(&youtube.subscribers) {
            Some(count) => suggestions.push(youtube_tier_tip(audience_tier(count)).to_string()),
            None => tracing::warn!(
                subscribers = %youtube.subscribers,
                "unparseable subscriber count, skipping the tier suggestion"
            ),
        }
    }

    if let Some(tiktok) = &snapshot.tiktok {
        suggestions.extend(TIKTOK_GENERAL_TIPS.iter().map(|tip| tip.to_string()));
        match parse_magnitude(&tiktok.followers) {
            Some(count) => suggestions.push(tiktok_tier_tip(audience_tier(count)).to_string()),
            None => tracing::warn!(
                followers = %tiktok.followers,
                "unparseable follower count, skipping the tier suggestion"
            ),
        }
    }

    if snapshot.youtube.is_some() && snapshot.tiktok.is_some() {
        suggestions.extend(CROSS_PLATFORM_TIPS.iter().map(|tip| tip.to_string()));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{TikTokStats, YouTubeStats};

    fn youtube_with_subscribers(subscribers: &str) -> YouTubeStats {
        YouTubeStats {
            subscribers: subscribers.to_string(),
            total_views: "1.0M".to_string(),
            uploads: "120".to_string(),
            category: "Gaming".to_string(),
            created: "Created Mar 2015".to_string(),
            estimated_monthly_earnings: "$2K - $20K".to_string(),
        }
    }

    fn tiktok_with_followers(followers: &str) -> TikTokStats {
        TikTokStats {
            followers: followers.to_string(),
            total_likes: "2.5M".to_string(),
            videos: "340".to_string(),
            engagement_rate: "4.2%".to_string(),
        }
    }

    #[test]
    fn empty_snapshot_yields_only_the_no_data_suggestion() {
        let suggestions = generate_suggestions(&PlatformSnapshot::default());

        assert_eq!(suggestions, vec![NO_DATA_SUGGESTION.to_string()]);
    }

    #[test]
    fn single_platform_yields_three_general_tips_plus_one_tier_tip() {
        let snapshot = PlatformSnapshot {
            youtube: Some(youtube_with_subscribers("2.5M")),
            tiktok: None,
        };

        let suggestions = generate_suggestions(&snapshot);

        assert_eq!(suggestions.len(), 4);
        assert_eq!(suggestions[..3], YOUTUBE_GENERAL_TIPS.map(String::from));
        assert!(suggestions[3].contains("diversifying content formats"));
    }

    #[test]
    fn both_platforms_yield_eleven_suggestions_in_platform_order() {
        let snapshot = PlatformSnapshot {
            youtube: Some(youtube_with_subscribers("500")),
            tiktok: Some(tiktok_with_followers("850.0K")),
        };

        let suggestions = generate_suggestions(&snapshot);

        assert_eq!(suggestions.len(), 11);
        assert!(suggestions[3].contains("fewer than 1,000 subscribers"));
        assert_eq!(suggestions[4], TIKTOK_GENERAL_TIPS[0]);
        assert_eq!(suggestions[10], CROSS_PLATFORM_TIPS[2]);
    }

    #[test]
    fn formatted_count_is_parsed_back_before_tier_selection() {
        let snapshot = PlatformSnapshot {
            youtube: None,
            tiktok: Some(tiktok_with_followers("850.0K")),
        };

        let suggestions = generate_suggestions(&snapshot);

        // The K suffix multiplies: 850.0K is 850,000, not 850.
        assert!(suggestions[3].contains("brand partnerships"));
        assert!(!suggestions[3].contains("fewer than 1,000 followers"));
    }

    #[test]
    fn tier_boundaries_are_exclusive_upper_bounds() {
        let snapshot = PlatformSnapshot {
            youtube: Some(youtube_with_subscribers("1.0K")),
            tiktok: None,
        };

        let suggestions = generate_suggestions(&snapshot);

        // Exactly 1,000 subscribers is no longer "fewer than 1,000".
        assert!(suggestions[3].contains("collaborating with similar-sized creators"));
    }

    #[test]
    fn malformed_count_skips_the_tier_tip_only() {
        let snapshot = PlatformSnapshot {
            youtube: None,
            tiktok: Some(tiktok_with_followers("N/A")),
        };

        let suggestions = generate_suggestions(&snapshot);

        assert_eq!(suggestions, TIKTOK_GENERAL_TIPS.map(String::from).to_vec());
    }
}
