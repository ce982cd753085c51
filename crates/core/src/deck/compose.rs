use chrono::{DateTime, Utc};

use crate::deck::{BodyElement, Bullet, MetricBox, SlideLayout, SlideSpec};
use crate::domain::analysis::{AnalysisResult, TikTokStats, YouTubeStats};

pub(crate) const SUGGESTIONS_PER_SLIDE: usize = 5;

const NEXT_STEPS: [&str; 5] = [
    "Review these insights and recommendations",
    "Create an action plan based on the suggestions",
    "Implement changes to your content strategy",
    "Monitor performance metrics",
    "Reassess in 30-60 days",
];

/// Deck title for one analysis: the creator label when given, otherwise the
/// platforms that actually have data, otherwise a generic fallback.
pub fn report_title(analysis: &AnalysisResult, creator_name: Option<&str>) -> String {
    if let Some(name) = non_blank(creator_name) {
        return format!("Content Strategy Analysis for {name}");
    }

    let mut platforms = Vec::new();
    if analysis.youtube.is_some() {
        platforms.push("YouTube");
    }
    if analysis.tiktok.is_some() {
        platforms.push("TikTok");
    }

    if platforms.is_empty() {
        "Content Creator Performance Analysis".to_string()
    } else {
        format!("Content Strategy Analysis: {}", platforms.join(" & "))
    }
}

/// Expand an analysis into the fixed slide sequence: title, overview,
/// per-platform slides for whichever platforms have data, one or two
/// suggestion slides, next steps, closing.
pub fn compose_slides(
    analysis: &AnalysisResult,
    creator_name: Option<&str>,
    now_utc: DateTime<Utc>,
) -> Vec<SlideSpec> {
    let creator_name = non_blank(creator_name);
    let date_label = now_utc.format("%B %d, %Y").to_string();

    let mut slides = vec![
        title_slide(analysis, creator_name, &date_label),
        overview_slide(),
    ];

    if let Some(youtube) = &analysis.youtube {
        slides.push(youtube_slide(youtube));
    }
    if let Some(tiktok) = &analysis.tiktok {
        slides.push(tiktok_slide(tiktok));
    }

    slides.extend(suggestion_slides(&analysis.suggestions));
    slides.push(next_steps_slide());
    slides.push(closing_slide(&date_label));

    slides
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn title_slide(
    analysis: &AnalysisResult,
    creator_name: Option<&str>,
    date_label: &str,
) -> SlideSpec {
    let subtitle = match creator_name {
        Some(name) => format!("Performance Report for {name}"),
        None => "Social Media Performance Report".to_string(),
    };

    SlideSpec {
        layout: SlideLayout::Title,
        title: report_title(analysis, creator_name),
        body: vec![
            BodyElement::Subtitle(subtitle),
            BodyElement::DateStamp(format!("Generated on {date_label}")),
        ],
    }
}

fn overview_slide() -> SlideSpec {
    SlideSpec {
        layout: SlideLayout::TitleAndBody,
        title: "Overview".to_string(),
        body: vec![BodyElement::Bullets(vec![
            Bullet::top(
                "This presentation provides an analysis of your social media performance \
                 across platforms and offers suggestions for optimization.",
            ),
            Bullet::top("The analysis includes:"),
            Bullet::nested("Performance metrics from your social media accounts"),
            Bullet::nested("Comparative analysis of platform performance"),
            Bullet::nested("Tailored optimization suggestions"),
            Bullet::nested("Recommended next steps for implementation"),
        ])],
    }
}

fn youtube_slide(stats: &YouTubeStats) -> SlideSpec {
    SlideSpec {
        layout: SlideLayout::TitleAndBody,
        title: "YouTube Performance".to_string(),
        body: vec![
            BodyElement::MetricRow(vec![
                MetricBox::new("Subscribers", &stats.subscribers),
                MetricBox::new("Total Views", &stats.total_views),
                MetricBox::new("Total Videos", &stats.uploads),
            ]),
            BodyElement::InfoBlock {
                heading: "Additional Information".to_string(),
                lines: vec![
                    format!("Category: {}", stats.category),
                    format!("Channel Created: {}", stats.created),
                    format!(
                        "Estimated Monthly Earnings: {}",
                        stats.estimated_monthly_earnings
                    ),
                ],
            },
        ],
    }
}

fn tiktok_slide(stats: &TikTokStats) -> SlideSpec {
    SlideSpec {
        layout: SlideLayout::TitleAndBody,
        title: "TikTok Performance".to_string(),
        body: vec![
            BodyElement::MetricRow(vec![
                MetricBox::new("Followers", &stats.followers),
                MetricBox::new("Total Likes", &stats.total_likes),
                MetricBox::new("Videos", &stats.videos),
            ]),
            BodyElement::InfoBlock {
                heading: "Additional Information".to_string(),
                lines: vec![format!("Engagement Rate: {}", stats.engagement_rate)],
            },
        ],
    }
}

/// At most two slides: the first five suggestions, then the remainder.
/// No slide at all when the list is empty.
fn suggestion_slides(suggestions: &[String]) -> Vec<SlideSpec> {
    if suggestions.is_empty() {
        return Vec::new();
    }

    let split = suggestions.len().min(SUGGESTIONS_PER_SLIDE);
    let (first, rest) = suggestions.split_at(split);

    let mut slides = vec![SlideSpec {
        layout: SlideLayout::TitleAndBody,
        title: "Optimization Suggestions".to_string(),
        body: vec![BodyElement::Bullets(
            first.iter().map(Bullet::top).collect(),
        )],
    }];

    if !rest.is_empty() {
        slides.push(SlideSpec {
            layout: SlideLayout::TitleAndBody,
            title: "Additional Recommendations".to_string(),
            body: vec![BodyElement::Bullets(rest.iter().map(Bullet::top).collect())],
        });
    }

    slides
}

fn next_steps_slide() -> SlideSpec {
    SlideSpec {
        layout: SlideLayout::TitleAndBody,
        title: "Next Steps".to_string(),
        body: vec![BodyElement::Bullets(
            NEXT_STEPS.iter().copied().map(Bullet::top).collect(),
        )],
    }
}

fn closing_slide(date_label: &str) -> SlideSpec {
    SlideSpec {
        layout: SlideLayout::Title,
        title: "Thank You".to_string(),
        body: vec![
            BodyElement::Subtitle(format!("Report generated on {date_label}")),
            BodyElement::ContactLine(
                "For questions or additional analysis, please contact us.".to_string(),
            ),
        ],
    }
}
