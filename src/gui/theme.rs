use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};
use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeChoice {
    #[default]
    Tokyo,
    Dracula,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 2] = [ThemeChoice::Tokyo, ThemeChoice::Dracula];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeChoice::Tokyo => "Tokyo Night",
            ThemeChoice::Dracula => "Dracula",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeChoice::Tokyo => Theme::tokyo(),
            ThemeChoice::Dracula => Theme::dracula(),
        }
    }
}

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo()
    }
}

impl Theme {
    pub fn tokyo() -> Self {
        Theme { dark: ThemeDetails::tokyo_night_storm(), light: ThemeDetails::tokyo_night_light() }
    }

    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::dracula_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode { &self.dark } else { &self.light }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).purple).strong()
    }

    pub fn bold(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).orange).strong()
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).cyan
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }
}

#[derive(Clone)]
struct ThemeDetails {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl ThemeDetails {
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            comment: Color32::from_rgb(120, 130, 160),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            green: Color32::from_rgb(80, 200, 120),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
            background_darker: Color32::from_rgb(235, 235, 230),
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(255, 255, 250),
            background_lighter: Color32::WHITE,
        }
    }

    fn tokyo_night_storm() -> Self {
        Self {
            background: Color32::from_rgb(23, 24, 38),
            foreground: Color32::from_rgb(204, 204, 204),
            selection: Color32::from_rgb(68, 71, 90),
            comment: Color32::from_rgb(98, 114, 164),
            red: Color32::from_rgb(255, 121, 121),
            orange: Color32::from_rgb(255, 161, 90),
            green: Color32::from_rgb(86, 209, 123),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(97, 175, 239),
            background_darker: Color32::from_rgb(19, 20, 32),
            background_dark: Color32::from_rgb(27, 29, 45),
            background_light: Color32::from_rgb(42, 44, 66),
            background_lighter: Color32::from_rgb(56, 58, 78),
        }
    }

    fn tokyo_night_light() -> Self {
        Self {
            background: Color32::from_rgb(240, 240, 250),
            foreground: Color32::from_rgb(40, 40, 40),
            selection: Color32::from_rgb(200, 200, 230),
            comment: Color32::from_rgb(150, 160, 200),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 140, 60),
            green: Color32::from_rgb(80, 180, 100),
            purple: Color32::from_rgb(150, 120, 200),
            cyan: Color32::from_rgb(80, 160, 200),
            background_darker: Color32::from_rgb(220, 220, 240),
            background_dark: Color32::from_rgb(230, 230, 245),
            background_light: Color32::from_rgb(245, 245, 255),
            background_lighter: Color32::WHITE,
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn widget(
    base: WidgetVisuals,
    bg_fill: Color32,
    weak_bg_fill: Color32,
    bg_stroke: Color32,
    fg_stroke: Color32,
) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill,
        weak_bg_fill,
        bg_stroke: Stroke { color: bg_stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: fg_stroke, ..base.fg_stroke },
        ..base
    }
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };
    let w = &default.widgets;

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    w.noninteractive,
                    theme.background,
                    theme.background_lighter,
                    theme.background_dark,
                    theme.foreground,
                ),
                inactive: widget(
                    w.inactive,
                    theme.background_light,
                    theme.background_lighter,
                    theme.background_dark,
                    theme.foreground,
                ),
                hovered: widget(
                    w.hovered,
                    theme.selection,
                    theme.background_lighter,
                    theme.cyan,
                    theme.foreground,
                ),
                active: widget(
                    w.active,
                    theme.selection,
                    theme.background_light,
                    theme.cyan,
                    theme.foreground,
                ),
                open: widget(
                    w.open,
                    theme.background_dark,
                    theme.background_lighter,
                    theme.purple,
                    theme.foreground,
                ),
            },
            selection: Selection {
                bg_fill: theme.selection,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.cyan,
            faint_bg_color: match is_dark {
                true => theme.background_darker,
                false => theme.background_light,
            },
            extreme_bg_color: theme.background_darker,
            code_bg_color: theme.background_dark,
            error_fg_color: theme.red,
            warn_fg_color: theme.orange,
            window_shadow: Shadow { color: theme.background_darker, ..default.window_shadow },
            window_fill: theme.background,
            window_stroke: Stroke { color: theme.background_light, ..default.window_stroke },
            panel_fill: theme.background_dark,
            popup_shadow: Shadow { color: theme.background_dark, ..default.popup_shadow },
            ..default.clone()
        },
    );
}
