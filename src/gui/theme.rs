use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: ThemeDetails::dracula(), light: ThemeDetails::dracula_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).purple).strong()
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).red
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).green
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).orange
    }

    /// Card background for the question side.
    pub fn card_front(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).card
    }

    /// Card background for the answer side.
    pub fn card_back(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).selection
    }

    pub fn card_stroke(&self, ctx: &egui::Context, flipped: bool) -> Stroke {
        let details = self.details(ctx);
        Stroke::new(1.5, if flipped { details.pink } else { details.cyan })
    }
}

/// One palette. `panel` sits behind everything, `card` is the raised
/// surface cards and inactive widgets are drawn on.
#[derive(Clone)]
pub struct ThemeDetails {
    panel: Color32,
    window: Color32,
    card: Color32,
    text: Color32,
    selection: Color32,
    shadow: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    pink: Color32,
}

impl ThemeDetails {
    // Dracula palette, https://draculatheme.com
    fn dracula() -> Self {
        Self {
            panel: Color32::from_rgb(33, 35, 53),
            window: Color32::from_rgb(0x28, 0x2a, 0x36),
            card: Color32::from_rgb(52, 54, 66),
            text: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            shadow: Color32::from_rgb(25, 26, 33),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            pink: Color32::from_rgb(255, 121, 198),
        }
    }

    fn dracula_light() -> Self {
        Self {
            panel: Color32::from_rgb(245, 245, 240),
            window: Color32::from_rgb(248, 248, 242),
            card: Color32::from_rgb(255, 255, 250),
            text: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            shadow: Color32::from_rgb(220, 220, 215),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            green: Color32::from_rgb(80, 200, 120),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(80, 190, 230),
            pink: Color32::from_rgb(230, 130, 200),
        }
    }

    fn widget(&self, base: WidgetVisuals, fill: Color32, outline: Color32) -> WidgetVisuals {
        WidgetVisuals {
            bg_fill: fill,
            weak_bg_fill: fill,
            bg_stroke: Stroke { color: outline, ..base.bg_stroke },
            fg_stroke: Stroke { color: self.text, ..base.fg_stroke },
            ..base
        }
    }

    fn visuals(&self, dark_mode: bool) -> Visuals {
        let base = if dark_mode { Visuals::dark() } else { Visuals::light() };
        let mut visuals = Visuals {
            dark_mode,
            selection: Selection {
                bg_fill: self.selection,
                stroke: Stroke { color: self.text, ..base.selection.stroke },
            },
            hyperlink_color: self.cyan,
            faint_bg_color: self.card,
            extreme_bg_color: self.shadow,
            error_fg_color: self.red,
            warn_fg_color: self.orange,
            window_shadow: Shadow { color: self.shadow, ..base.window_shadow },
            window_fill: self.window,
            window_stroke: Stroke { color: self.card, ..base.window_stroke },
            panel_fill: self.panel,
            popup_shadow: Shadow { color: self.shadow, ..base.popup_shadow },
            ..base.clone()
        };

        let widgets = &mut visuals.widgets;
        widgets.noninteractive = self.widget(base.widgets.noninteractive, self.window, self.panel);
        widgets.inactive = self.widget(base.widgets.inactive, self.card, self.panel);
        widgets.hovered = self.widget(base.widgets.hovered, self.selection, self.cyan);
        widgets.active = self.widget(base.widgets.active, self.selection, self.cyan);
        widgets.open = self.widget(base.widgets.open, self.panel, self.purple);

        visuals
    }
}

/// Installs both variants so the top bar's theme switch flips between them.
pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    ctx.set_visuals_of(egui::Theme::Dark, theme.dark.visuals(true));
    ctx.set_visuals_of(egui::Theme::Light, theme.light.visuals(false));
}
