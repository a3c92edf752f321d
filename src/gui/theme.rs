use eframe::egui::{self, Color32};

pub const BUTTON_FILL: Color32 = Color32::from_rgb(0x3A, 0x3A, 0x3A);
pub const BUTTON_HOVER_FILL: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
pub const BUTTON_PRESSED_FILL: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
pub const BUTTON_BORDER: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
pub const BUTTON_HOVER_BORDER: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
pub const BUTTON_PRESSED_BORDER: Color32 = Color32::from_rgb(0x77, 0x77, 0x77);
pub const TEXT: Color32 = Color32::from_rgb(0xD3, 0xD3, 0xD3);
pub const INPUT_FILL: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const WINDOW_FILL: Color32 = Color32::from_rgba_premultiplied(0x26, 0x26, 0x26, 0xF0);

pub fn launcher_visuals(defaults: &egui::Visuals) -> egui::Visuals {
    let mut visuals = defaults.clone();
    visuals.dark_mode = true;
    visuals.window_fill = Color32::from_rgb(0x2B, 0x2B, 0x2B);
    visuals.panel_fill = Color32::TRANSPARENT;
    visuals.extreme_bg_color = INPUT_FILL;
    visuals.override_text_color = Some(TEXT);

    visuals.widgets.inactive.weak_bg_fill = BUTTON_FILL;
    visuals.widgets.inactive.bg_fill = BUTTON_FILL;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, BUTTON_BORDER);
    visuals.widgets.hovered.weak_bg_fill = BUTTON_HOVER_FILL;
    visuals.widgets.hovered.bg_fill = BUTTON_HOVER_FILL;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, BUTTON_HOVER_BORDER);
    visuals.widgets.active.weak_bg_fill = BUTTON_PRESSED_FILL;
    visuals.widgets.active.bg_fill = BUTTON_PRESSED_FILL;
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, BUTTON_PRESSED_BORDER);
    for w in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        w.rounding = egui::Rounding::same(5.0);
    }
    visuals
}

pub fn apply(ctx: &egui::Context) {
    let visuals = launcher_visuals(&egui::Visuals::dark());
    ctx.set_visuals(visuals);
}
