//! TUI color theme with dark and light palettes.

use ratatui::style::Color;

use crate::games::MetacriticTier;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    // Primary palette
    pub accent: Color,
    pub optimal: Color,
    pub caution: Color,
    pub critical: Color,

    // UI chrome
    pub border: Color,
    pub muted: Color,
    pub text: Color,
    pub text_dim: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb(0, 212, 255),
            optimal: Color::Rgb(163, 230, 53),
            caution: Color::Rgb(251, 191, 36),
            critical: Color::Rgb(255, 68, 85),
            border: Color::Gray,
            muted: Color::DarkGray,
            text: Color::White,
            text_dim: Color::Gray,
        }
    }

    pub fn light() -> Self {
        Self {
            accent: Color::Rgb(2, 132, 199),
            optimal: Color::Rgb(77, 124, 15),
            caution: Color::Rgb(180, 83, 9),
            critical: Color::Rgb(190, 18, 60),
            border: Color::DarkGray,
            muted: Color::Gray,
            text: Color::Black,
            text_dim: Color::DarkGray,
        }
    }

    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn metacritic_color(&self, score: i32) -> Color {
        match MetacriticTier::from_score(score) {
            MetacriticTier::High => self.optimal,
            MetacriticTier::Medium => self.caution,
            MetacriticTier::Low => self.critical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_colors_follow_thresholds() {
        let theme = Theme::dark();
        assert_eq!(theme.metacritic_color(80), theme.optimal);
        assert_eq!(theme.metacritic_color(60), theme.caution);
        assert_eq!(theme.metacritic_color(30), theme.critical);
    }
}
