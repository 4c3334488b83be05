//! Theme system for the safety switch demo
//! Supports both dark and light modes with a small shared palette

use iced::color;
use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x282828);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Accent for focused inputs
pub const ACCENT: Color = color!(0x1e90ff);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Label colour; the switch falls back to it for unset outer and inner colours
pub fn label_color(theme: &Theme) -> Color {
    text_primary(theme)
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

/// Shadow color for floating surfaces
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

/// Settings label color
pub fn settings_label(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.9, 0.9)
    } else {
        Color::from_rgb(0.15, 0.15, 0.15)
    }
}

/// Settings description color
pub fn settings_desc(_theme: &Theme) -> Color {
    Color::from_rgb(0.5, 0.5, 0.5)
}

/// Settings section title color
pub fn settings_section_title(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.7, 0.7, 0.7)
    } else {
        Color::from_rgb(0.35, 0.35, 0.35)
    }
}

/// Error text
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.95, 0.35, 0.35)
    } else {
        Color::from_rgb(0.8, 0.15, 0.15)
    }
}

/// Success text
pub fn success(_theme: &Theme) -> Color {
    Color::from_rgb(0.3, 0.8, 0.4)
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Options panel card
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(background(theme))),
            border: Border {
                color: text_secondary(theme),
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

/// Hex colour input
pub fn color_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => ACCENT,
        text_input::Status::Hovered => text_secondary(theme),
        _ => border_color(theme),
    };
    text_input::Style {
        background: Background::Color(background(theme)),
        border: Border {
            color: border,
            width: 1.0,
            radius: 4.0.into(),
        },
        icon: settings_desc(theme),
        placeholder: settings_desc(theme),
        value: settings_label(theme),
        selection: ACCENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_color_contrasts_with_background() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_ne!(label_color(&theme), background(&theme));
        }
    }

    #[test]
    fn dark_detection() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
        assert_ne!(background(&Theme::Dark), background(&Theme::Light));
    }
}
