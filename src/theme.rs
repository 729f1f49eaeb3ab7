use gpui::Rgba;

// Glassmorphism palette
//
// One dark indigo surface, two oversized gradient orbs bleeding in from
// opposite corners, and frosted surfaces layered on top:
// — Every glass surface is white at a low opacity over the backdrop
// — Borders are white at the same or slightly higher opacity than the fill
// — The card frosts the orbs behind it; inputs and button ride on the card

// Background
pub const SURFACE: u32 = 0x1a1a2e;

// Orb fills — full opacity at the center, faded out by the radial profile
pub const ORB_VIOLET: u32 = 0x7b2ff7;
pub const ORB_CYAN: u32 = 0x00b4d8;

// Orb geometry — offsets are negative insets from the window corners,
// chosen so each orb's center lands outside the viewport and only its
// fading edge is visible. The violet orb hangs off the top-left corner,
// the cyan one off the bottom-right.
pub const ORB_DIAMETER: f32 = 800.0;
pub const ORB_OFFSET_X: f32 = -500.0;
pub const ORB_OFFSET_Y: f32 = -520.0;

// Sigma of the backdrop blur the card applies to the orbs behind it, in
// both axes
pub const BLUR_SIGMA: f32 = 15.0;

// Glass opacities (white fills and borders; fill never exceeds border)
pub const CARD_FILL_OPACITY: f32 = 0.10;
pub const CARD_BORDER_OPACITY: f32 = 0.20;
pub const INPUT_FILL_OPACITY: f32 = 0.10;
pub const INPUT_BORDER_OPACITY: f32 = 0.10;
pub const BUTTON_FILL_OPACITY: f32 = 0.20;
pub const BUTTON_BORDER_OPACITY: f32 = 0.20;
pub const LOGO_FILL_OPACITY: f32 = 0.20;
pub const LOGO_BORDER_OPACITY: f32 = 0.30;

// Interaction accents
pub const INPUT_BORDER_FOCUS_OPACITY: f32 = 0.50;
pub const BUTTON_HOVER_OPACITY: f32 = 0.30;
pub const BUTTON_PRESS_OPACITY: f32 = 0.35;

// Radii — the card is rounder than anything inside it
pub const CARD_RADIUS: f32 = 30.0;
pub const FIELD_RADIUS: f32 = 15.0;

// Text
pub const TEXT_WHITE: u32 = 0xffffff;
pub const SUBTITLE: u32 = 0xffffffb3;
pub const INPUT_PLACEHOLDER: u32 = 0xffffff80;
pub const SELECTION: u32 = 0xffffff40;

// Typography
pub const TITLE_TEXT_SIZE: f32 = 28.0;
pub const SUBTITLE_TEXT_SIZE: f32 = 14.0;
pub const TEXT_SIZE_MEDIUM: f32 = 15.0;
pub const LOGO_GLYPH_SIZE: f32 = 32.0;

pub const LINE_HEIGHT_MEDIUM: f32 = 20.0;

// Element sizing
pub const FIELD_HEIGHT: f32 = 48.0;
pub const LOGO_DIAMETER: f32 = 80.0;
pub const CARD_WIDTH: f32 = 360.0;
pub const CURSOR_WIDTH: f32 = 2.0;

// Spacing
pub const GAP_SMALL: f32 = 8.0;
pub const GAP_MEDIUM: f32 = 16.0;
pub const GAP_LARGE: f32 = 24.0;

// Padding
pub const CARD_PADDING: f32 = 30.0;
pub const FIELD_PADDING_HORIZONTAL: f32 = 16.0;
pub const SCREEN_PADDING: f32 = 40.0;

// Layout
pub const WINDOW_WIDTH: f32 = 440.0;
pub const WINDOW_HEIGHT: f32 = 780.0;

pub fn with_alpha(color: u32, opacity: f32) -> Rgba {
    Rgba {
        r: ((color >> 16) & 0xff) as f32 / 255.0,
        g: ((color >> 8) & 0xff) as f32 / 255.0,
        b: (color & 0xff) as f32 / 255.0,
        a: opacity.clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glass_fill_never_exceeds_border() {
        assert!(CARD_FILL_OPACITY <= CARD_BORDER_OPACITY);
        assert!(INPUT_FILL_OPACITY <= INPUT_BORDER_OPACITY);
        assert!(BUTTON_FILL_OPACITY <= BUTTON_BORDER_OPACITY);
        assert!(LOGO_FILL_OPACITY <= LOGO_BORDER_OPACITY);
    }

    #[test]
    fn card_is_rounder_than_its_contents() {
        assert!(CARD_RADIUS > FIELD_RADIUS);
    }

    #[test]
    fn orb_centers_sit_outside_the_viewport() {
        let radius = ORB_DIAMETER / 2.0;
        assert!(ORB_OFFSET_X + radius < 0.0);
        assert!(ORB_OFFSET_Y + radius < 0.0);
    }

    #[test]
    fn with_alpha_splits_channels() {
        let color = with_alpha(0x7b2ff7, 0.5);
        assert!((color.r - 0x7b as f32 / 255.0).abs() < 1e-6);
        assert!((color.g - 0x2f as f32 / 255.0).abs() < 1e-6);
        assert!((color.b - 0xf7 as f32 / 255.0).abs() < 1e-6);
        assert!((color.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn with_alpha_clamps_opacity() {
        assert!((with_alpha(TEXT_WHITE, 1.5).a - 1.0).abs() < 1e-6);
        assert!(with_alpha(TEXT_WHITE, -0.5).a.abs() < 1e-6);
    }
}
