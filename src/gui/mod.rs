mod animated_row;
mod confirmation_modal;
mod message_modal;
mod snippet_form;
pub mod theme;

pub use animated_row::{
    ease_out_cubic, AnimatedRow, HeightAnimation, RowAction, ANIMATION_SECS, DEFAULT_ROW_HEIGHT,
    EXPANDED_ROW_HEIGHT,
};
pub use confirmation_modal::{ConfirmationModal, ConfirmationResult, DestructiveAction};
pub use message_modal::{Message, MessageKind, MessageModal};
pub use snippet_form::{FormAction, SnippetForm};

use crate::launcher::{launch_command, LaunchOptions};
use crate::settings::Settings;
use crate::snippets::{Snippet, SnippetStore};
use crate::window_config::WindowConfig;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::path::PathBuf;

const RESIZE_GRIP_SIZE: f32 = 20.0;
const ROW_SPACING: f32 = 3.0;

pub const SAVED_TOAST: &str = "Snippet saved";
pub const DELETED_TOAST: &str = "Snippet deleted";

/// The two mutually exclusive screens of the main window.
#[derive(Debug, Clone)]
pub enum Screen {
    Launcher,
    Form(SnippetForm),
}

pub struct SnippetApp {
    store: SnippetStore,
    rows: Vec<AnimatedRow>,
    screen: Screen,
    settings: Settings,
    launch_opts: LaunchOptions,
    config_path: PathBuf,
    pub window_size: Option<(i32, i32)>,
    pub window_pos: Option<(i32, i32)>,
    confirm: ConfirmationModal,
    message: MessageModal,
    toasts: Toasts,
}

impl SnippetApp {
    pub fn new(
        ctx: &egui::Context,
        store: SnippetStore,
        settings: Settings,
        config_path: PathBuf,
        initial: WindowConfig,
    ) -> Self {
        theme::apply(ctx);
        let toasts = Toasts::new()
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
            .direction(egui::Direction::BottomUp);
        let mut app = Self {
            launch_opts: LaunchOptions::from(&settings),
            store,
            rows: Vec::new(),
            screen: Screen::Launcher,
            settings,
            config_path,
            window_size: initial.size().map(|(w, h)| (w as i32, h as i32)),
            window_pos: initial.position().map(|(x, y)| (x as i32, y as i32)),
            confirm: ConfirmationModal::default(),
            message: MessageModal::default(),
            toasts,
        };
        app.rebuild_rows();
        app
    }

    pub fn snippets(&self) -> &[Snippet] {
        self.store.snippets()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.current()
    }

    pub fn dismiss_message(&mut self) {
        self.message.dismiss();
    }

    pub fn pending_confirmation(&self) -> Option<DestructiveAction> {
        self.confirm.pending()
    }

    pub fn row_labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label()).collect()
    }

    /// Drop every row widget and build fresh ones from the store.
    fn rebuild_rows(&mut self) {
        self.rows = self
            .store
            .snippets()
            .iter()
            .map(|s| AnimatedRow::new(s.name.clone()))
            .collect();
    }

    pub fn show_launcher(&mut self) {
        self.screen = Screen::Launcher;
        self.rebuild_rows();
    }

    pub fn show_add_form(&mut self) {
        self.screen = Screen::Form(SnippetForm::new());
    }

    pub fn show_edit_form(&mut self, index: usize) {
        if let Some(snippet) = self.store.get(index) {
            self.screen = Screen::Form(SnippetForm::edit(index, snippet));
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut SnippetForm> {
        match &mut self.screen {
            Screen::Form(form) => Some(form),
            Screen::Launcher => None,
        }
    }

    /// Validate the open form and apply the result as if Save was clicked.
    pub fn submit_form(&mut self) {
        let action = match &self.screen {
            Screen::Form(form) => form.submit(),
            Screen::Launcher => return,
        };
        self.handle_form_action(action);
    }

    fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::None => {}
            FormAction::Back => self.show_launcher(),
            FormAction::Save { snippet, index } => self.save_snippet(snippet, index),
            FormAction::Delete(idx) => self.request_delete(idx),
            FormAction::Invalid(e) => {
                self.message.show(MessageKind::Warning, "Error", e.to_string());
            }
        }
    }

    pub fn save_snippet(&mut self, snippet: Snippet, index: Option<usize>) {
        let name = snippet.name.clone();
        match self.store.upsert(snippet, index) {
            Ok(()) => {
                tracing::info!(name = %name, ?index, "snippet saved");
                self.toast(ToastKind::Success, SAVED_TOAST.to_string());
                self.show_launcher();
            }
            Err(e) => {
                tracing::error!("failed to save snippet: {e}");
                self.message.show(
                    MessageKind::Error,
                    "Save error",
                    format!("Failed to save snippets: {e}"),
                );
            }
        }
    }

    /// Ask for confirmation first when configured, otherwise delete at once.
    pub fn request_delete(&mut self, index: usize) {
        if !self.settings.confirm_delete {
            self.delete_snippet(index);
            return;
        }
        let subject = self
            .store
            .get(index)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        self.confirm
            .open_for(DestructiveAction::DeleteSnippet(index), &subject);
    }

    pub fn resolve_confirmation(&mut self, confirmed: bool) {
        let result = self.confirm.resolve(confirmed);
        self.handle_confirmation(result);
    }

    fn handle_confirmation(&mut self, result: ConfirmationResult) {
        if let ConfirmationResult::Confirmed(DestructiveAction::DeleteSnippet(idx)) = result {
            self.delete_snippet(idx);
        }
    }

    pub fn delete_snippet(&mut self, index: usize) {
        match self.store.remove(index) {
            Ok(removed) => {
                tracing::info!(name = %removed.name, index, "snippet deleted");
                self.toast(ToastKind::Info, DELETED_TOAST.to_string());
                self.show_launcher();
            }
            Err(e) => {
                tracing::error!("failed to delete snippet: {e}");
                self.message.show(
                    MessageKind::Error,
                    "Delete error",
                    format!("Failed to delete snippet: {e}"),
                );
            }
        }
    }

    /// Launch the command bound to row `index`. Failures end up in the error
    /// dialog.
    pub fn run_snippet(&mut self, index: usize) {
        let Some(command) = self.store.get(index).map(|s| s.command.clone()) else {
            return;
        };
        if let Err(e) = launch_command(&command, &self.launch_opts) {
            tracing::error!(command = %command, "run failed: {e}");
            self.message.show(MessageKind::Error, "Run error", e.to_string());
        }
    }

    fn toast(&mut self, kind: ToastKind, text: String) {
        if !self.settings.enable_toasts {
            return;
        }
        self.toasts.add(Toast {
            text: text.into(),
            kind,
            options: ToastOptions::default().duration_in_seconds(self.settings.toast_duration as f64),
        });
    }

    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            width: self.window_size.map(|s| s.0),
            height: self.window_size.map(|s| s.1),
            x: self.window_pos.map(|p| p.0),
            y: self.window_pos.map(|p| p.1),
        }
    }

    pub fn save_window_config(&self) {
        let cfg = self.window_config();
        if let Err(e) = cfg.save(&self.config_path) {
            tracing::error!(path = %self.config_path.display(), "failed to save window config: {e}");
        }
    }

    /// Remember the restored geometry of the window. Minimized frames report
    /// an off-screen position and a zero size, so they are skipped.
    pub fn track_geometry(&mut self, info: &egui::ViewportInfo) {
        if info.minimized == Some(true) {
            return;
        }
        if let Some(rect) = info.inner_rect {
            self.window_size = Some((rect.width() as i32, rect.height() as i32));
        }
        if let Some(rect) = info.outer_rect {
            self.window_pos = Some((rect.min.x as i32, rect.min.y as i32));
        }
    }

    fn launcher_ui(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        ui.horizontal(|ui| {
            let spacing = ui.spacing().item_spacing.x;
            let add_width = (ui.available_width() - 60.0 - 30.0 - spacing * 2.0).max(40.0);
            if ui
                .add_sized([add_width, 35.0], egui::Button::new("✚ Add"))
                .clicked()
            {
                self.show_add_form();
            }
            if ui.add_sized([60.0, 30.0], egui::Button::new("▼")).clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
            }
            if ui.add_sized([30.0, 30.0], egui::Button::new("✕")).clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
        ui.add_space(4.0);

        let mut clicked: Option<(usize, RowAction)> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .drag_to_scroll(false)
            .show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = ROW_SPACING;
                for (idx, row) in self.rows.iter_mut().enumerate() {
                    match row.ui(ui) {
                        RowAction::None => {}
                        action => clicked = Some((idx, action)),
                    }
                }
                ui.add_space(RESIZE_GRIP_SIZE * 3.0);
            });

        match clicked {
            Some((idx, RowAction::Run)) => self.run_snippet(idx),
            Some((idx, RowAction::Edit)) => self.show_edit_form(idx),
            _ => {}
        }
    }

    fn resize_grip(&self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let grip = egui::Rect::from_min_size(
            rect.right_bottom() - egui::vec2(RESIZE_GRIP_SIZE, RESIZE_GRIP_SIZE),
            egui::vec2(RESIZE_GRIP_SIZE, RESIZE_GRIP_SIZE),
        );
        let resp = ui
            .interact(grip, ui.id().with("resize_grip"), egui::Sense::drag())
            .on_hover_cursor(egui::CursorIcon::ResizeSouthEast);
        if resp.drag_started() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::BeginResize(
                egui::viewport::ResizeDirection::SouthEast,
            ));
        }
        let stroke = egui::Stroke::new(1.0, theme::BUTTON_BORDER);
        for i in 1..=3 {
            let off = i as f32 * 5.0;
            ui.painter().line_segment(
                [
                    grip.right_bottom() - egui::vec2(off, 2.0),
                    grip.right_bottom() - egui::vec2(2.0, off),
                ],
                stroke,
            );
        }
    }
}

impl eframe::App for SnippetApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let viewport = ctx.input(|i| i.viewport().clone());
        self.track_geometry(&viewport);
        if self.settings.enable_toasts {
            self.toasts.show(ctx);
        }

        let modal_open = self.confirm.is_open() || self.message.is_open();
        let mut form_action = FormAction::None;
        let frame = egui::Frame::none()
            .fill(theme::WINDOW_FILL)
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, theme::BUTTON_BORDER))
            .inner_margin(8.0);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            // registered first so every widget drawn afterwards wins the pointer
            let drag_bg = ui.interact(
                ui.max_rect(),
                ui.id().with("window_drag_bg"),
                egui::Sense::click_and_drag(),
            );
            if drag_bg.drag_started() && !modal_open {
                ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }

            ui.add_enabled_ui(!modal_open, |ui| {
                if let Screen::Form(form) = &mut self.screen {
                    form_action = form.ui(ui);
                } else {
                    self.launcher_ui(ui);
                }
            });
            self.resize_grip(ui);
        });

        self.handle_form_action(form_action);
        let result = self.confirm.ui(ctx);
        self.handle_confirmation(result);
        self.message.ui(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_window_config();
        tracing::info!(size = ?self.window_size, pos = ?self.window_pos, "window geometry saved");
    }
}
