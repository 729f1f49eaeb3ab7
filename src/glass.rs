use gpui::{Div, FocusHandle, FontWeight, Rgba, Stateful, div, prelude::*, px, rgb, rgba};

use crate::{backdrop::FrostedBackdrop, theme::*};

// Shared recipe for every frosted surface: a translucent white fill, a
// border at the same or slightly higher opacity, and a rounded outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlassStyle {
    pub fill_opacity: f32,
    pub border_opacity: f32,
    pub corner_radius: f32,
}

pub const CARD: GlassStyle = GlassStyle {
    fill_opacity: CARD_FILL_OPACITY,
    border_opacity: CARD_BORDER_OPACITY,
    corner_radius: CARD_RADIUS,
};

pub const INPUT: GlassStyle = GlassStyle {
    fill_opacity: INPUT_FILL_OPACITY,
    border_opacity: INPUT_BORDER_OPACITY,
    corner_radius: FIELD_RADIUS,
};

pub const BUTTON: GlassStyle = GlassStyle {
    fill_opacity: BUTTON_FILL_OPACITY,
    border_opacity: BUTTON_BORDER_OPACITY,
    corner_radius: FIELD_RADIUS,
};

pub const LOGO: GlassStyle = GlassStyle {
    fill_opacity: LOGO_FILL_OPACITY,
    border_opacity: LOGO_BORDER_OPACITY,
    corner_radius: LOGO_DIAMETER / 2.0,
};

impl GlassStyle {
    pub fn fill(&self) -> Rgba {
        with_alpha(TEXT_WHITE, self.fill_opacity)
    }

    pub fn border(&self) -> Rgba {
        with_alpha(TEXT_WHITE, self.border_opacity)
    }
}

pub fn surface(style: GlassStyle) -> Div {
    div()
        .bg(style.fill())
        .border_1()
        .border_color(style.border())
        .rounded(px(style.corner_radius))
}

// The frosted container. Its first child re-renders the blurred orbs
// behind the card; content added by the caller stacks above that layer.
pub fn card() -> Div {
    surface(CARD)
        .relative()
        .overflow_hidden()
        .w(px(CARD_WIDTH))
        .p(px(CARD_PADDING))
        .flex()
        .flex_col()
        .gap(px(GAP_MEDIUM))
        .child(
            div()
                .absolute()
                .top(px(0.0))
                .left(px(0.0))
                .size_full()
                .child(FrostedBackdrop::new()),
        )
}

pub fn logo(glyph: &str) -> Div {
    surface(LOGO)
        .size(px(LOGO_DIAMETER))
        .flex_shrink_0()
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(LOGO_GLYPH_SIZE))
        .text_color(rgb(TEXT_WHITE))
        .child(glyph.to_string())
}

pub fn title(text: &str) -> Div {
    div()
        .text_size(px(TITLE_TEXT_SIZE))
        .font_weight(FontWeight::BOLD)
        .text_color(rgb(TEXT_WHITE))
        .child(text.to_string())
}

pub fn subtitle(text: &str) -> Div {
    div()
        .text_size(px(SUBTITLE_TEXT_SIZE))
        .text_color(rgba(SUBTITLE))
        .child(text.to_string())
}

pub fn button(text: &str, focus_handle: &FocusHandle) -> Stateful<Div> {
    div()
        .id("glass-button")
        .track_focus(focus_handle)
        .flex()
        .flex_shrink_0()
        .items_center()
        .justify_center()
        .h(px(FIELD_HEIGHT))
        .w_full()
        .bg(BUTTON.fill())
        .border_1()
        .border_color(BUTTON.border())
        .rounded(px(BUTTON.corner_radius))
        .text_color(rgb(TEXT_WHITE))
        .text_size(px(TEXT_SIZE_MEDIUM))
        .font_weight(FontWeight::SEMIBOLD)
        .cursor_pointer()
        .hover(|style| style.bg(with_alpha(TEXT_WHITE, BUTTON_HOVER_OPACITY)))
        .active(|style| style.bg(with_alpha(TEXT_WHITE, BUTTON_PRESS_OPACITY)))
        .focus(|style| style.border_color(with_alpha(TEXT_WHITE, INPUT_BORDER_FOCUS_OPACITY)))
        .child(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_surface_keeps_fill_at_or_below_border() {
        for style in [CARD, INPUT, BUTTON, LOGO] {
            assert!(style.fill_opacity <= style.border_opacity);
        }
    }

    #[test]
    fn card_is_rounder_than_inputs_and_button() {
        assert!(CARD.corner_radius > INPUT.corner_radius);
        assert!(CARD.corner_radius > BUTTON.corner_radius);
    }

    #[test]
    fn logo_rounds_into_a_full_circle() {
        assert!((LOGO.corner_radius - LOGO_DIAMETER / 2.0).abs() < 1e-6);
    }

    #[test]
    fn fills_are_translucent_white() {
        let fill = CARD.fill();
        assert!((fill.r - 1.0).abs() < 1e-6);
        assert!((fill.g - 1.0).abs() < 1e-6);
        assert!((fill.b - 1.0).abs() < 1e-6);
        assert!((fill.a - CARD_FILL_OPACITY).abs() < 1e-6);
        assert!((CARD.border().a - CARD_BORDER_OPACITY).abs() < 1e-6);
    }
}
