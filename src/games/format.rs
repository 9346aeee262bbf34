//! Rating, metacritic and platform formatting.

use chrono::{Datelike, NaiveDate};

use crate::api::PlatformEntry;

/// At most this many platform icons are shown on a card.
pub const MAX_PLATFORM_ICONS: usize = 4;

/// Ordered substring table; the first match wins.
const PLATFORM_GLYPHS: &[(&str, &str)] = &[
    ("PC", "💻"),
    ("PlayStation", "🎮"),
    ("Xbox", "🎯"),
    ("Nintendo", "🎲"),
    ("iOS", "📱"),
    ("Android", "📱"),
    ("Mac", "🖥️"),
    ("Linux", "🐧"),
];

const FALLBACK_GLYPH: &str = "🎮";

/// A resolved platform icon with the label shown in tooltips/lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformIcon {
    pub label: String,
    pub glyph: &'static str,
}

/// Map the first few platform entries to display icons.
///
/// Unmatched platforms fall back to a generic glyph labeled with a
/// 3-character abbreviation of the platform name.
pub fn platform_icons(platforms: &[PlatformEntry]) -> Vec<PlatformIcon> {
    platforms
        .iter()
        .take(MAX_PLATFORM_ICONS)
        .map(|entry| {
            let name = entry.platform.name.as_str();
            for (key, glyph) in PLATFORM_GLYPHS {
                if name.contains(key) {
                    return PlatformIcon {
                        label: (*key).to_string(),
                        glyph,
                    };
                }
            }
            PlatformIcon {
                label: name.chars().take(3).collect(),
                glyph: FALLBACK_GLYPH,
            }
        })
        .collect()
}

/// Absent rating renders as a sentinel, otherwise one decimal place.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{r:.1}"),
        None => "N/A".to_string(),
    }
}

/// Presentational metacritic tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetacriticTier {
    High,
    Medium,
    Low,
}

impl MetacriticTier {
    pub fn from_score(score: i32) -> Self {
        if score >= 75 {
            MetacriticTier::High
        } else if score >= 50 {
            MetacriticTier::Medium
        } else {
            MetacriticTier::Low
        }
    }
}

/// Year component of an ISO release date, if it parses.
pub fn release_year(released: Option<&str>) -> Option<i32> {
    let date = NaiveDate::parse_from_str(released?, "%Y-%m-%d").ok()?;
    Some(date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PlatformEntry, PlatformRef};

    fn entry(name: &str) -> PlatformEntry {
        PlatformEntry {
            platform: PlatformRef {
                id: None,
                name: name.to_string(),
            },
            requirements: None,
        }
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_rating(Some(4.567)), "4.6");
        assert_eq!(format_rating(Some(5.0)), "5.0");
    }

    #[test]
    fn test_playstation_matches_before_fallback() {
        let icons = platform_icons(&[entry("PlayStation 5")]);
        assert_eq!(icons[0].glyph, "🎮");
        assert_eq!(icons[0].label, "PlayStation");
    }

    #[test]
    fn test_pc_is_first_table_entry() {
        let icons = platform_icons(&[entry("PC")]);
        assert_eq!(icons[0].glyph, "💻");
    }

    #[test]
    fn test_unknown_platform_abbreviated() {
        let icons = platform_icons(&[entry("Dreamcast")]);
        assert_eq!(icons[0].glyph, FALLBACK_GLYPH);
        assert_eq!(icons[0].label, "Dre");
    }

    #[test]
    fn test_icons_capped_at_four() {
        let platforms: Vec<_> = ["PC", "Xbox One", "PlayStation 4", "Linux", "macOS"]
            .into_iter()
            .map(entry)
            .collect();
        assert_eq!(platform_icons(&platforms).len(), MAX_PLATFORM_ICONS);
    }

    #[test]
    fn test_metacritic_tiers() {
        assert_eq!(MetacriticTier::from_score(92), MetacriticTier::High);
        assert_eq!(MetacriticTier::from_score(75), MetacriticTier::High);
        assert_eq!(MetacriticTier::from_score(74), MetacriticTier::Medium);
        assert_eq!(MetacriticTier::from_score(50), MetacriticTier::Medium);
        assert_eq!(MetacriticTier::from_score(49), MetacriticTier::Low);
    }

    #[test]
    fn test_release_year() {
        assert_eq!(release_year(Some("2015-05-18")), Some(2015));
        assert_eq!(release_year(Some("not-a-date")), None);
        assert_eq!(release_year(None), None);
    }
}
