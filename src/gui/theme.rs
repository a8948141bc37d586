use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};
use egui::{
    epaint::Shadow,
    style::Selection,
};

use crate::form::{
    FieldStatus,
    NotificationKind,
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::velocity()
    }
}

impl Theme {
    pub fn velocity() -> Self {
        Theme { dark: Palette::velocity_night(), light: Palette::velocity_day() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).size(20.0).strong().color(self.palette(ctx).accent)
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).muted)
    }

    pub fn success(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).success
    }

    pub fn error(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).error
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).accent
    }

    /// Border for an input carrying a validation class.
    pub fn field_stroke(&self, ctx: &egui::Context, status: FieldStatus) -> Option<Stroke> {
        match status {
            FieldStatus::Neutral => None,
            FieldStatus::Success => Some(Stroke::new(1.5, self.success(ctx))),
            FieldStatus::Error => Some(Stroke::new(1.5, self.error(ctx))),
        }
    }

    pub fn toast_fill(&self, ctx: &egui::Context, kind: NotificationKind) -> Color32 {
        match kind {
            NotificationKind::Success => self.success(ctx),
            NotificationKind::Error => self.error(ctx),
        }
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    surface: Color32,
    foreground: Color32,
    muted: Color32,
    selection: Color32,
    accent: Color32,
    success: Color32,
    error: Color32,
}

impl Palette {
    fn velocity_night() -> Self {
        Self {
            background: Color32::from_rgb(15, 23, 42),
            surface: Color32::from_rgb(30, 41, 59),
            foreground: Color32::from_rgb(226, 232, 240),
            muted: Color32::from_rgb(148, 163, 184),
            selection: Color32::from_rgb(51, 65, 85),
            accent: Color32::from_rgb(96, 165, 250),
            success: Color32::from_rgb(34, 197, 94),
            error: Color32::from_rgb(239, 68, 68),
        }
    }

    fn velocity_day() -> Self {
        Self {
            background: Color32::from_rgb(248, 250, 252),
            surface: Color32::from_rgb(255, 255, 255),
            foreground: Color32::from_rgb(15, 23, 42),
            muted: Color32::from_rgb(100, 116, 139),
            selection: Color32::from_rgb(219, 234, 254),
            accent: Color32::from_rgb(37, 99, 235),
            success: Color32::from_rgb(22, 163, 74),
            error: Color32::from_rgb(220, 38, 38),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let mut visuals = Visuals {
        dark_mode: is_dark,
        selection: Selection {
            bg_fill: palette.selection,
            stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
        },
        hyperlink_color: palette.accent,
        error_fg_color: palette.error,
        warn_fg_color: palette.error,
        window_fill: palette.surface,
        window_shadow: Shadow { color: Color32::from_black_alpha(60), ..default.window_shadow },
        panel_fill: palette.background,
        extreme_bg_color: palette.background,
        ..default
    };
    visuals.widgets.noninteractive.fg_stroke.color = palette.foreground;
    visuals.widgets.inactive.fg_stroke.color = palette.foreground;
    visuals.widgets.hovered.bg_stroke.color = palette.accent;
    visuals.widgets.active.bg_stroke.color = palette.accent;

    ctx.set_visuals_of(variant, visuals);
}
