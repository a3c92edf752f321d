use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    DeleteSnippet(usize),
}

impl DestructiveAction {
    pub fn title(self) -> &'static str {
        match self {
            Self::DeleteSnippet(_) => "Delete?",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DeleteSnippet(_) => "Delete this snippet permanently?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationResult {
    None,
    Confirmed(DestructiveAction),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct ConfirmationModal {
    pending: Option<DestructiveAction>,
    subject: String,
    confirm_label: String,
    cancel_label: String,
}

impl Default for ConfirmationModal {
    fn default() -> Self {
        Self {
            pending: None,
            subject: String::new(),
            confirm_label: "Yes".into(),
            cancel_label: "No".into(),
        }
    }
}

impl ConfirmationModal {
    pub fn open_for(&mut self, kind: DestructiveAction, subject: &str) {
        self.pending = Some(kind);
        self.subject = subject.to_string();
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<DestructiveAction> {
        self.pending
    }

    /// Resolve the modal without drawing it.
    pub fn resolve(&mut self, confirmed: bool) -> ConfirmationResult {
        match self.pending.take() {
            Some(kind) if confirmed => ConfirmationResult::Confirmed(kind),
            Some(_) => ConfirmationResult::Cancelled,
            None => ConfirmationResult::None,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) -> ConfirmationResult {
        let Some(kind) = self.pending else {
            return ConfirmationResult::None;
        };
        let mut answer: Option<bool> = None;
        let mut open = true;
        egui::Window::new(kind.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(kind.label());
                if !self.subject.is_empty() {
                    ui.weak(&self.subject);
                }
                ui.horizontal(|ui| {
                    if ui.button(&self.confirm_label).clicked() {
                        answer = Some(true);
                    }
                    if ui.button(&self.cancel_label).clicked() {
                        answer = Some(false);
                    }
                });
            });
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            answer = Some(false);
        }
        if !open && answer.is_none() {
            answer = Some(false);
        }
        match answer {
            Some(confirmed) => self.resolve(confirmed),
            None => ConfirmationResult::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_returns_pending_action() {
        let mut modal = ConfirmationModal::default();
        assert_eq!(modal.resolve(true), ConfirmationResult::None);
        modal.open_for(DestructiveAction::DeleteSnippet(2), "build");
        assert!(modal.is_open());
        assert_eq!(
            modal.resolve(true),
            ConfirmationResult::Confirmed(DestructiveAction::DeleteSnippet(2))
        );
        assert!(!modal.is_open());
    }

    #[test]
    fn cancel_clears_pending() {
        let mut modal = ConfirmationModal::default();
        modal.open_for(DestructiveAction::DeleteSnippet(0), "");
        assert_eq!(modal.resolve(false), ConfirmationResult::Cancelled);
        assert_eq!(modal.pending(), None);
    }
}
