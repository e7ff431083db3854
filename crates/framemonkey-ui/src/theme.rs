//! Dark amber theme, after the material "dark yellow" palette.

use egui::{Color32, Rounding, Stroke};

/// Palette and spacing used by every FrameMonkey widget.
pub struct Theme;

impl Theme {
    // ── Typography ─────────────────────────────────────────────
    pub const FONT_XS: f32 = 11.0; // captions, hints
    pub const FONT_SM: f32 = 13.0; // labels, buttons

    // ── Spacing (4px base) ─────────────────────────────────────
    pub const SPACE_XS: f32 = 4.0;
    pub const SPACE_SM: f32 = 8.0;
    pub const SPACE_MD: f32 = 16.0;

    pub const RADIUS: f32 = 4.0;

    // ── Backgrounds ────────────────────────────────────────────
    pub const fn bg() -> Color32 {
        Color32::from_rgb(35, 38, 41)
    }
    pub const fn bg1() -> Color32 {
        Color32::from_rgb(49, 54, 59)
    }
    pub const fn bg2() -> Color32 {
        Color32::from_rgb(69, 74, 80)
    }

    // ── Text ───────────────────────────────────────────────────
    pub const fn t1() -> Color32 {
        Color32::from_rgb(255, 255, 255)
    }
    pub const fn t3() -> Color32 {
        Color32::from_rgb(140, 146, 152)
    }

    // ── Accent ─────────────────────────────────────────────────
    pub const fn accent() -> Color32 {
        Color32::from_rgb(255, 215, 64)
    }
    /// Accent @ 25%, selected trim range fill.
    pub const fn accent_fill() -> Color32 {
        Color32::from_rgba_premultiplied(64, 54, 16, 64)
    }
    /// Handle color while it is being dragged.
    pub const fn accent_active() -> Color32 {
        Color32::from_rgb(255, 160, 0)
    }

    pub const fn playhead() -> Color32 {
        Color32::from_rgb(255, 88, 85)
    }

    pub const fn red() -> Color32 {
        Color32::from_rgb(255, 88, 85)
    }
    pub const fn green() -> Color32 {
        Color32::from_rgb(48, 213, 160)
    }

    // ── Theme application ──────────────────────────────────────

    /// Apply the theme to an egui context.
    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let visuals = &mut style.visuals;
        *visuals = egui::Visuals::dark();

        visuals.panel_fill = Self::bg();
        visuals.window_fill = Self::bg1();
        visuals.extreme_bg_color = Self::bg1();

        visuals.widgets.inactive.bg_fill = Self::bg2();
        visuals.widgets.inactive.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::accent());
        visuals.widgets.hovered.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::accent_active());
        visuals.widgets.active.rounding = Rounding::same(Self::RADIUS);

        visuals.selection.bg_fill = Self::accent_fill();
        visuals.selection.stroke = Stroke::new(1.0, Self::accent());

        ctx.set_style(style);
    }
}
