//! Qualitative badges derived from a compatibility score

use crate::error::{CompatError, Result};
use askama::Template;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeTier {
    PerfectMatch,
    High,
    Good,
    Potential,
    Low,
}

impl BadgeTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => BadgeTier::PerfectMatch,
            75..=89 => BadgeTier::High,
            60..=74 => BadgeTier::Good,
            40..=59 => BadgeTier::Potential,
            _ => BadgeTier::Low,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            BadgeTier::PerfectMatch => "Perfect Match",
            BadgeTier::High => "High Compatibility",
            BadgeTier::Good => "Good Compatibility",
            BadgeTier::Potential => "Interesting Potential",
            BadgeTier::Low => "Low Compatibility",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            BadgeTier::PerfectMatch => "perfect-match",
            BadgeTier::High => "high-match",
            BadgeTier::Good => "good-match",
            BadgeTier::Potential => "potential-match",
            BadgeTier::Low => "low-match",
        }
    }

    pub fn color_hex(self) -> &'static str {
        match self {
            BadgeTier::PerfectMatch => "#10B981",
            BadgeTier::High => "#3B82F6",
            BadgeTier::Good => "#8B5CF6",
            BadgeTier::Potential => "#F59E0B",
            BadgeTier::Low => "#EF4444",
        }
    }
}

/// Display descriptor for a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub tier: BadgeTier,
    pub text: String,
    pub class_name: String,
    pub color_hex: String,
}

impl Badge {
    pub fn for_score(score: u8) -> Self {
        let tier = BadgeTier::from_score(score);
        Self {
            tier,
            text: tier.text().to_string(),
            class_name: tier.class_name().to_string(),
            color_hex: tier.color_hex().to_string(),
        }
    }
}

#[derive(Template)]
#[template(source = r#"<div class="compatibility-badge {{ class_name }}" style="background-color: {{ color_hex }}">
    <span class="badge-icon">🎯</span>
    <span class="badge-text">{{ text }}</span>
    <span class="badge-score">{{ score }}%</span>
</div>"#, ext = "html")]
struct BadgeTemplate<'a> {
    class_name: &'a str,
    color_hex: &'a str,
    text: &'a str,
    score: u8,
}

/// Render the badge markup for a score.
pub fn render_badge_html(score: u8) -> Result<String> {
    let tier = BadgeTier::from_score(score);
    BadgeTemplate {
        class_name: tier.class_name(),
        color_hex: tier.color_hex(),
        text: tier.text(),
        score,
    }
    .render()
    .map_err(|e| CompatError::OutputFormatting(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(BadgeTier::from_score(100), BadgeTier::PerfectMatch);
        assert_eq!(BadgeTier::from_score(90), BadgeTier::PerfectMatch);
        assert_eq!(BadgeTier::from_score(89), BadgeTier::High);
        assert_eq!(BadgeTier::from_score(75), BadgeTier::High);
        assert_eq!(BadgeTier::from_score(74), BadgeTier::Good);
        assert_eq!(BadgeTier::from_score(60), BadgeTier::Good);
        assert_eq!(BadgeTier::from_score(59), BadgeTier::Potential);
        assert_eq!(BadgeTier::from_score(40), BadgeTier::Potential);
        assert_eq!(BadgeTier::from_score(39), BadgeTier::Low);
        assert_eq!(BadgeTier::from_score(0), BadgeTier::Low);
    }

    #[test]
    fn test_badge_descriptor() {
        let badge = Badge::for_score(88);
        assert_eq!(badge.text, "High Compatibility");
        assert_eq!(badge.class_name, "high-match");
        assert_eq!(badge.color_hex, "#3B82F6");
    }

    #[test]
    fn test_badge_serializes_camel_case() {
        let json = serde_json::to_value(Badge::for_score(95)).unwrap();
        assert_eq!(json["className"], "perfect-match");
        assert_eq!(json["colorHex"], "#10B981");
    }

    #[test]
    fn test_render_badge_html() {
        let html = render_badge_html(33).unwrap();
        assert!(html.contains(r#"class="compatibility-badge low-match""#));
        assert!(html.contains("background-color: #EF4444"));
        assert!(html.contains("Low Compatibility"));
        assert!(html.contains("33%"));
    }
}
