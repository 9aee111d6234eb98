use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmationResult {
    None,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    ResetLinks,
    ResetNews,
    DeleteAnnouncement { index: usize },
}

impl DestructiveAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::ResetLinks => "Reset links to the builtin defaults",
            Self::ResetNews => "Reset announcements to the builtin defaults",
            Self::DeleteAnnouncement { .. } => "Delete announcement",
        }
    }

    pub fn warning(self) -> &'static str {
        "This action cannot be undone."
    }
}

/// Blocking yes/no prompt every destructive operation passes through. The
/// pending action is held until the user confirms or cancels.
#[derive(Debug, Default)]
pub struct ConfirmationModal {
    pending: Option<DestructiveAction>,
}

impl ConfirmationModal {
    pub fn open_for(&mut self, action: DestructiveAction) {
        self.pending = Some(action);
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the action once the user confirms it; `None` otherwise.
    /// Cancelling or closing the window discards the pending action.
    pub fn ui(&mut self, ctx: &egui::Context) -> Option<DestructiveAction> {
        let action = self.pending?;
        let mut result = ConfirmationResult::None;
        let mut open = true;
        egui::Window::new("Confirm destructive action")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(action.label());
                ui.colored_label(egui::Color32::YELLOW, action.warning());
                ui.horizontal(|ui| {
                    if ui.button("Confirm").clicked() {
                        result = ConfirmationResult::Confirmed;
                    }
                    if ui.button("Cancel").clicked() {
                        result = ConfirmationResult::Cancelled;
                    }
                });
            });
        if !open && result == ConfirmationResult::None {
            result = ConfirmationResult::Cancelled;
        }
        match result {
            ConfirmationResult::Confirmed => {
                self.pending = None;
                Some(action)
            }
            ConfirmationResult::Cancelled => {
                self.pending = None;
                None
            }
            ConfirmationResult::None => None,
        }
    }
}
