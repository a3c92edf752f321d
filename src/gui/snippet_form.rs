use crate::snippets::{FormError, Snippet, SnippetDraft};
use eframe::egui;

const COMMAND_HINT: &str = r#"examples:

https://example.com

folder "C:\Users\%USERNAME%\Documents"

run "C:\Program Files\app\app.exe"

svn check "path"
svn update "path"
svn commit "path"
svn clean "path"
svn showlog "path"

anything else runs in the shell
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    Save {
        snippet: Snippet,
        index: Option<usize>,
    },
    Back,
    Delete(usize),
    Invalid(FormError),
}

/// Create/edit view for a single snippet. `index` is `Some` when editing an
/// existing entry.
#[derive(Debug, Clone, Default)]
pub struct SnippetForm {
    pub draft: SnippetDraft,
    index: Option<usize>,
}

impl SnippetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(index: usize, snippet: &Snippet) -> Self {
        Self {
            draft: SnippetDraft::from_snippet(snippet),
            index: Some(index),
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn submit(&self) -> FormAction {
        match self.draft.to_snippet() {
            Ok(snippet) => FormAction::Save {
                snippet,
                index: self.index,
            },
            Err(e) => FormAction::Invalid(e),
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> FormAction {
        let mut action = FormAction::None;
        let width = ui.available_width();
        ui.add_sized(
            [width, 28.0],
            egui::TextEdit::singleline(&mut self.draft.name).hint_text("Button name"),
        );

        let reserved = if self.index.is_some() { 80.0 } else { 44.0 };
        let command_height = (ui.available_height() - reserved).max(80.0);
        ui.add_sized(
            [width, command_height],
            egui::TextEdit::multiline(&mut self.draft.command)
                .hint_text(COMMAND_HINT)
                .code_editor(),
        );

        ui.horizontal(|ui| {
            if ui.add_sized([80.0, 30.0], egui::Button::new("Back")).clicked() {
                action = FormAction::Back;
            }
            let save_width = ui.available_width();
            if ui
                .add_sized([save_width, 30.0], egui::Button::new("💾 Save"))
                .clicked()
            {
                action = self.submit();
            }
        });

        if let Some(idx) = self.index {
            if ui
                .add_sized([width, 30.0], egui::Button::new("🗑 Delete"))
                .clicked()
            {
                action = FormAction::Delete(idx);
            }
        }
        action
    }
}
