use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub text: String,
}

/// Blocking message box: while open the rest of the window is disabled.
#[derive(Debug, Clone, Default)]
pub struct MessageModal {
    current: Option<Message>,
}

impl MessageModal {
    pub fn show(&mut self, kind: MessageKind, title: impl Into<String>, text: impl Into<String>) {
        self.current = Some(Message {
            kind,
            title: title.into(),
            text: text.into(),
        });
    }

    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let Some(msg) = &self.current else {
            return;
        };
        let mut close = false;
        let mut open = true;
        let color = match msg.kind {
            MessageKind::Warning => ctx.style().visuals.warn_fg_color,
            MessageKind::Error => ctx.style().visuals.error_fg_color,
        };
        egui::Window::new(msg.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.colored_label(color, &msg.text);
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });
        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Enter)) {
            close = true;
        }
        if close || !open {
            self.dismiss();
        }
    }
}
