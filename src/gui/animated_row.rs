use super::theme;
use eframe::egui;

pub const DEFAULT_ROW_HEIGHT: f32 = 32.0;
pub const EXPANDED_ROW_HEIGHT: f32 = DEFAULT_ROW_HEIGHT * 2.0;
pub const ANIMATION_SECS: f64 = 0.2;
const EDIT_BUTTON_WIDTH: f32 = 20.0;

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Time based tween of a single height value. Times are seconds as reported
/// by `egui::InputState::time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightAnimation {
    from: f32,
    to: f32,
    start: f64,
    duration: f64,
}

impl HeightAnimation {
    pub fn resting(height: f32) -> Self {
        Self {
            from: height,
            to: height,
            start: 0.0,
            duration: ANIMATION_SECS,
        }
    }

    fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn value(&self, now: f64) -> f32 {
        self.from + (self.to - self.from) * ease_out_cubic(self.progress(now))
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.from != self.to && self.progress(now) < 1.0
    }

    /// Restart towards `target` from wherever the height currently is, so a
    /// reversal mid-flight does not jump.
    pub fn retarget(&mut self, now: f64, target: f32) {
        self.from = self.value(now);
        self.to = target;
        self.start = now;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    None,
    Run,
    Edit,
}

/// One launcher row: the snippet button plus a narrow edit button. The row
/// grows while hovered.
#[derive(Debug, Clone)]
pub struct AnimatedRow {
    label: String,
    hovered: bool,
    anim: HeightAnimation,
}

impl AnimatedRow {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hovered: false,
            anim: HeightAnimation::resting(DEFAULT_ROW_HEIGHT),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_hovered(&mut self, hovered: bool, now: f64) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;
        let target = if hovered {
            EXPANDED_ROW_HEIGHT
        } else {
            DEFAULT_ROW_HEIGHT
        };
        self.anim.retarget(now, target);
    }

    pub fn height(&self, now: f64) -> f32 {
        self.anim.value(now)
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> RowAction {
        let now = ui.input(|i| i.time);
        let height = self.height(now);
        let (fill, border) = if self.hovered {
            (theme::BUTTON_HOVER_FILL, theme::BUTTON_HOVER_BORDER)
        } else {
            (theme::BUTTON_FILL, theme::BUTTON_BORDER)
        };
        let main_width =
            (ui.available_width() - EDIT_BUTTON_WIDTH - ui.spacing().item_spacing.x).max(0.0);

        let mut action = RowAction::None;
        let row = ui.horizontal(|ui| {
            ui.set_min_height(height);
            let main = egui::Button::new(
                egui::RichText::new(&self.label)
                    .size(15.0)
                    .color(theme::TEXT),
            )
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, border))
            .rounding(5.0)
            .min_size(egui::vec2(main_width, height));
            if ui.add(main).clicked() {
                action = RowAction::Run;
            }
            let edit = egui::Button::new("")
                .fill(fill)
                .stroke(egui::Stroke::new(1.0, border))
                .rounding(5.0)
                .min_size(egui::vec2(EDIT_BUTTON_WIDTH, height));
            if ui.add(edit).on_hover_text("Edit").clicked() {
                action = RowAction::Edit;
            }
        });

        let hovered = ui.rect_contains_pointer(row.response.rect);
        self.set_hovered(hovered, now);
        if self.anim.is_running(now) {
            ui.ctx().request_repaint();
        }
        action
    }
}
