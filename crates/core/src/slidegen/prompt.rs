use crate::domain::analysis::AnalysisResult;

const CLOSING_INSTRUCTION: &str =
    "Close the deck with a concrete next-steps checklist and a thank-you slide.";

/// Flatten an analysis into the text prompt the slide-generation API
/// expects: a creator header, labeled per-platform stat dumps, the
/// suggestion list, and a fixed closing instruction.
pub fn build_prompt(analysis: &AnalysisResult, creator_name: Option<&str>) -> String {
    let mut lines: Vec<String> = Vec::new();

    match creator_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => lines.push(format!(
            "Create a presentation analyzing the social media performance of {name}."
        )),
        None => lines.push(
            "Create a presentation analyzing a content creator's social media performance."
                .to_string(),
        ),
    }

    if let Some(youtube) = &analysis.youtube {
        lines.push(String::new());
        lines.push("YouTube statistics:".to_string());
        lines.push(format!("- Subscribers: {}", youtube.subscribers));
        lines.push(format!("- Total views: {}", youtube.total_views));
        lines.push(format!("- Total videos: {}", youtube.uploads));
        lines.push(format!("- Category: {}", youtube.category));
        lines.push(format!("- Channel created: {}", youtube.created));
        lines.push(format!(
            "- Estimated monthly earnings: {}",
            youtube.estimated_monthly_earnings
        ));
    }

    if let Some(tiktok) = &analysis.tiktok {
        lines.push(String::new());
        lines.push("TikTok statistics:".to_string());
        lines.push(format!("- Followers: {}", tiktok.followers));
        lines.push(format!("- Total likes: {}", tiktok.total_likes));
        lines.push(format!("- Videos: {}", tiktok.videos));
        lines.push(format!("- Engagement rate: {}", tiktok.engagement_rate));
    }

    if !analysis.suggestions.is_empty() {
        lines.push(String::new());
        lines.push("Optimization suggestions to include:".to_string());
        for suggestion in &analysis.suggestions {
            lines.push(format!("- {suggestion}"));
        }
    }

    lines.push(String::new());
    lines.push(CLOSING_INSTRUCTION.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{TikTokStats, YouTubeStats};

    fn full_analysis() -> AnalysisResult {
        AnalysisResult {
            youtube: Some(YouTubeStats {
                subscribers: "2.5M".to_string(),
                total_views: "48.0M".to_string(),
                uploads: "312".to_string(),
                category: "Education".to_string(),
                created: "Created Feb 2014".to_string(),
                estimated_monthly_earnings: "$4K - $32K".to_string(),
            }),
            tiktok: Some(TikTokStats {
                followers: "850.0K".to_string(),
                total_likes: "12.3M".to_string(),
                videos: "540".to_string(),
                engagement_rate: "6.8%".to_string(),
            }),
            suggestions: vec!["Post more often.".to_string()],
        }
    }

    #[test]
    fn prompt_carries_every_labeled_section_in_order() {
        let prompt = build_prompt(&full_analysis(), Some("Ada"));

        let youtube_at = prompt.find("YouTube statistics:").unwrap();
        let tiktok_at = prompt.find("TikTok statistics:").unwrap();
        let suggestions_at = prompt.find("Optimization suggestions to include:").unwrap();

        assert!(prompt.starts_with("Create a presentation analyzing the social media performance of Ada."));
        assert!(youtube_at < tiktok_at && tiktok_at < suggestions_at);
        assert!(prompt.contains("- Subscribers: 2.5M"));
        assert!(prompt.contains("- Engagement rate: 6.8%"));
        assert!(prompt.contains("- Post more often."));
        assert!(prompt.ends_with(CLOSING_INSTRUCTION));
    }

    #[test]
    fn absent_platforms_leave_no_section_behind() {
        let analysis = AnalysisResult {
            youtube: None,
            tiktok: None,
            suggestions: Vec::new(),
        };

        let prompt = build_prompt(&analysis, None);

        assert!(prompt.starts_with("Create a presentation analyzing a content creator's"));
        assert!(!prompt.contains("YouTube statistics:"));
        assert!(!prompt.contains("TikTok statistics:"));
        assert!(!prompt.contains("Optimization suggestions"));
    }
}
