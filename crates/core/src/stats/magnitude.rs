//! Human-readable magnitude strings for audience counts, and the reverse
//! parse the suggestion tiers rely on.

/// Render a count with a K/M suffix: >= 1,000,000 as "{n/1e6:.1}M",
/// >= 1,000 as "{n/1e3:.1}K", otherwise the plain integer. Applies
/// identically to simulated and fetched counts.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Reverse a magnitude string back into an approximate count. Accepts the
/// output of [`format_count`] plus comma-grouped plain integers a live
/// source might return. `None` on anything else; callers degrade rather
/// than fail.
pub fn parse_magnitude(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.contains('K') {
        cleaned.replace('K', "").parse::<f64>().ok().map(|v| v * 1_000.0)
    } else if cleaned.contains('M') {
        cleaned.replace('M', "").parse::<f64>().ok().map(|v| v * 1_000_000.0)
    } else {
        cleaned.parse::<f64>().ok()
    }
}

/// Audience-size bucket driving tier-sentence selection. Boundaries are
/// strict `<`: exactly 1,000 lands in `UnderTenThousand`, exactly 100,000
/// in `HundredThousandPlus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudienceTier {
    UnderOneThousand,
    UnderTenThousand,
    UnderHundredThousand,
    HundredThousandPlus,
}

pub fn audience_tier(count: f64) -> AudienceTier {
    if count < 1_000.0 {
        AudienceTier::UnderOneThousand
    } else if count < 10_000.0 {
        AudienceTier::UnderTenThousand
    } else if count < 100_000.0 {
        AudienceTier::UnderHundredThousand
    } else {
        AudienceTier::HundredThousandPlus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_by_magnitude() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(1_500), "1.5K");
        assert_eq!(format_count(850_000), "850.0K");
        assert_eq!(format_count(999_999), "1000.0K");
        assert_eq!(format_count(1_000_000), "1.0M");
        assert_eq!(format_count(1_500_000), "1.5M");
        assert_eq!(format_count(100_000_000), "100.0M");
    }

    #[test]
    fn parses_formatted_counts_back() {
        assert_eq!(parse_magnitude("1.5M"), Some(1_500_000.0));
        assert_eq!(parse_magnitude("850.0K"), Some(850_000.0));
        assert_eq!(parse_magnitude("350"), Some(350.0));
        assert_eq!(parse_magnitude("1,234"), Some(1_234.0));
        assert_eq!(parse_magnitude(" 2.0K "), Some(2_000.0));
    }

    #[test]
    fn rejects_malformed_magnitudes() {
        assert_eq!(parse_magnitude("N/A"), None);
        assert_eq!(parse_magnitude("1.2B"), None);
        assert_eq!(parse_magnitude(""), None);
        assert_eq!(parse_magnitude("K"), None);
    }

    #[test]
    fn format_round_trips_into_the_same_tier() {
        for n in [137u64, 999, 1_000, 9_950, 10_000, 99_940, 100_000, 1_500_000] {
            let parsed = parse_magnitude(&format_count(n)).unwrap();
            assert_eq!(
                audience_tier(parsed),
                audience_tier(n as f64),
                "tier drifted for {n}"
            );
        }
    }

    #[test]
    fn tier_boundaries_are_upper_inclusive() {
        assert_eq!(audience_tier(999.0), AudienceTier::UnderOneThousand);
        assert_eq!(audience_tier(1_000.0), AudienceTier::UnderTenThousand);
        assert_eq!(audience_tier(9_999.0), AudienceTier::UnderTenThousand);
        assert_eq!(audience_tier(10_000.0), AudienceTier::UnderHundredThousand);
        assert_eq!(audience_tier(99_999.0), AudienceTier::UnderHundredThousand);
        assert_eq!(audience_tier(100_000.0), AudienceTier::HundredThousandPlus);
    }
}
