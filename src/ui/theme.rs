//! Theme system for the studio showcase
//! Supports both dark and light modes with a warm gold accent palette

use iced::color;
use iced::widget::{button, container, pick_list, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

/// Public function to check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    is_dark(theme)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x111827);
    pub const SURFACE: Color = color!(0x1f2937);
    pub const CARD: Color = color!(0x111827);
    pub const BORDER: Color = color!(0x374151);
    pub const TEXT_MUTED: Color = color!(0x9ca3af);
    pub const TEXT_SECONDARY: Color = color!(0xd1d5db);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf9fafb);
    pub const CARD: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xd1d5db);
    pub const TEXT_MUTED: Color = color!(0x6b7280);
    pub const TEXT_SECONDARY: Color = color!(0x4b5563);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

/// Gold accent (buttons, badges)
pub const GOLD: Color = color!(0xeab308);
/// Gold hover state
pub const GOLD_HOVER: Color = color!(0xca8a04);
/// Star / highlight gold
pub const GOLD_LIGHT: Color = color!(0xfacc15);
/// Checkmark green
pub const SUCCESS: Color = color!(0x22c55e);
/// Error red
pub const DANGER: Color = color!(0xef4444);
/// Inactive star gray
pub const STAR_OFF: Color = color!(0x9ca3af);

/// Footer is rendered dark in both modes
pub const FOOTER_BACKGROUND: Color = dark::BACKGROUND;

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn card_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::CARD
    } else {
        light::CARD
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Accent text tone: lighter gold on dark backgrounds, deeper on light
pub fn accent_text(theme: &Theme) -> Color {
    if is_dark(theme) {
        GOLD_LIGHT
    } else {
        GOLD_HOVER
    }
}

/// Neutral placeholder tone for images that have not arrived yet
pub fn image_placeholder(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0x2b3544)
    } else {
        color!(0xe5e7eb)
    }
}

pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;
pub const MEDIUM_WEIGHT: iced::font::Weight = iced::font::Weight::Medium;

pub fn bold() -> iced::Font {
    iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    }
}

pub fn medium() -> iced::Font {
    iced::Font {
        weight: MEDIUM_WEIGHT,
        ..Default::default()
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Whole-page background
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Section on the primary background
pub fn section(theme: &Theme) -> container::Style {
    page(theme)
}

/// Section on the alternate (subtly tinted) background
pub fn section_alt(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Elevated card with rounded corners
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Card with the hover elevation applied
pub fn card_hovered(theme: &Theme) -> container::Style {
    let base = card(theme);
    container::Style {
        shadow: Shadow {
            color: Color {
                a: 0.35,
                ..GOLD
            },
            offset: Vector::new(0.0, 10.0),
            blur_radius: 32.0,
        },
        ..base
    }
}

/// Featured course card: gold ring
pub fn card_featured(theme: &Theme) -> container::Style {
    let base = card(theme);
    container::Style {
        border: Border {
            radius: 24.0.into(),
            width: 2.0,
            color: GOLD,
        },
        ..base
    }
}

/// Inner panel on a card or section (form column, info column)
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Solid gold pill badge ("Most Popular")
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GOLD)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Category tag pill on gallery tiles and testimonials
pub fn tag(_theme: &Theme) -> container::Style {
    badge(_theme)
}

/// Fixed header bar; translucent over the page content
pub fn header_bar(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        Color { a: 0.92, ..dark::BACKGROUND }
    } else {
        Color { a: 0.92, ..light::BACKGROUND }
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 0.0.into(),
            width: 1.0,
            color: Color { a: 0.2, ..GOLD },
        },
        ..Default::default()
    }
}

/// Image placeholder box shown until the download lands
pub fn placeholder_box(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(image_placeholder(theme))),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed full-window backdrop behind the lightbox
pub fn lightbox_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.9))),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Caption pill inside the lightbox
pub fn lightbox_caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer container, dark in both modes
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(FOOTER_BACKGROUND)),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Toast surface
pub fn toast(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 18.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary gold pill button
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(GOLD)),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color { a: 0.25, ..GOLD },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(GOLD_HOVER)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color { a: 0.4, ..GOLD })),
            text_color: Color::from_rgba(1.0, 1.0, 1.0, 0.7),
            ..base
        },
        _ => base,
    }
}

/// Outlined gold pill button
pub fn outline_button(theme: &Theme, status: button::Status) -> button::Style {
    let accent = accent_text(theme);
    let base = button::Style {
        background: None,
        text_color: accent,
        border: Border {
            radius: 999.0.into(),
            width: 2.0,
            color: accent,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(accent)),
            text_color: if is_dark(theme) {
                dark::BACKGROUND
            } else {
                Color::WHITE
            },
            ..base
        },
        _ => base,
    }
}

/// Header navigation entry; the active section keeps the accent color
pub fn nav_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let color = if active || matches!(status, button::Status::Hovered) {
            accent_text(theme)
        } else {
            text_secondary(theme)
        };
        button::Style {
            background: None,
            text_color: color,
            border: Border {
                radius: 999.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Round theme toggle
pub fn theme_toggle_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(if is_dark(theme) {
            GOLD
        } else {
            light::SURFACE
        })),
        text_color: if is_dark(theme) {
            dark::BACKGROUND
        } else {
            light::TEXT_SECONDARY
        },
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_dark(theme) {
                GOLD_HOVER
            } else {
                light::BORDER
            })),
            ..base
        },
        _ => base,
    }
}

/// Frosted round control on top of imagery (lightbox close/nav)
pub fn glass_button(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => 0.3,
        _ => 0.2,
    };
    button::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, alpha))),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Borderless text-like button (footer links, gallery tiles)
pub fn link_button(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => GOLD_LIGHT,
            _ => Color::from_rgb(0.82, 0.84, 0.86),
        },
        ..Default::default()
    }
}

/// Invisible button wrapper (clickable cards and tiles)
pub fn bare_button(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        ..Default::default()
    }
}

/// Carousel indicator dot
pub fn indicator_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| button::Style {
        background: Some(Background::Color(if active {
            GOLD_LIGHT
        } else {
            Color::from_rgba(1.0, 1.0, 1.0, 0.5)
        })),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// Form text input
pub fn input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: Background::Color(card_bg(theme)),
        border: Border {
            radius: 12.0.into(),
            width: if focused { 2.0 } else { 1.0 },
            color: if focused { GOLD } else { border_color(theme) },
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color { a: 0.4, ..GOLD },
    }
}

/// Service selection dropdown
pub fn dropdown(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let hovered = matches!(status, pick_list::Status::Hovered);
    pick_list::Style {
        background: Background::Color(card_bg(theme)),
        text_color: text_primary(theme),
        placeholder_color: text_muted(theme),
        handle_color: if hovered { GOLD } else { text_muted(theme) },
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: if hovered { GOLD } else { border_color(theme) },
        },
    }
}
