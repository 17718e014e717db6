//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Key map bar foreground color.
    pub keymap_fg: Color,
    /// Ground line.
    pub ground: Color,
    /// Wheel outline.
    pub wheel: Color,
    /// Rolling contact marker.
    pub marker: Color,
    /// Chassis arm.
    pub chassis: Color,
    /// Angle series.
    pub angle: Color,
    /// Velocity and voltage series.
    pub velocity: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                keymap_fg: Color::Rgb(168, 153, 132),
                ground: Color::Rgb(235, 219, 178),
                wheel: Color::Rgb(251, 73, 52),
                marker: Color::Rgb(235, 219, 178),
                chassis: Color::Rgb(131, 165, 152),
                angle: Color::Rgb(254, 128, 25),
                velocity: Color::Rgb(131, 165, 152),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                keymap_fg: Color::Rgb(124, 111, 100),
                ground: Color::Rgb(40, 40, 40),
                wheel: Color::Rgb(157, 0, 6),
                marker: Color::Rgb(40, 40, 40),
                chassis: Color::Rgb(7, 102, 120),
                angle: Color::Rgb(175, 58, 3),
                velocity: Color::Rgb(7, 102, 120),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }
}
