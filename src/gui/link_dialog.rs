use crate::gui::PortalApp;
use crate::links::LinkEntry;
use eframe::egui;

/// Modal editor for a single shortcut. `edit_idx` of `None` appends a new
/// link on save; otherwise the entry at that position is replaced in place.
#[derive(Default)]
pub struct LinkDialog {
    pub open: bool,
    edit_idx: Option<usize>,
    title: String,
    url: String,
    icon: String,
    error: Option<String>,
}

impl LinkDialog {
    pub fn open_add(&mut self) {
        self.edit_idx = None;
        self.title.clear();
        self.url.clear();
        self.icon.clear();
        self.error = None;
        self.open = true;
    }

    pub fn open_edit(&mut self, idx: usize, entry: &LinkEntry) {
        self.edit_idx = Some(idx);
        self.title = entry.title.clone();
        self.url = entry.url.clone();
        self.icon = entry.icon.clone();
        self.error = None;
        self.open = true;
    }

    pub fn ui(&mut self, ctx: &egui::Context, app: &mut PortalApp) {
        if !self.open {
            return;
        }
        let mut close = false;
        let title = if self.edit_idx.is_some() {
            "Edit Link"
        } else {
            "Add Link"
        };
        egui::Window::new(title)
            .id(egui::Id::new("link_dialog"))
            .open(&mut self.open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Title");
                    ui.text_edit_singleline(&mut self.title);
                });
                ui.horizontal(|ui| {
                    ui.label("URL");
                    ui.text_edit_singleline(&mut self.url);
                });
                ui.horizontal(|ui| {
                    ui.label("Icon");
                    ui.text_edit_singleline(&mut self.icon);
                });
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                }
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        if self.title.trim().is_empty() {
                            self.error = Some("Title required".into());
                        } else if self.url.trim().is_empty() {
                            self.error = Some("URL required".into());
                        } else {
                            let entry = LinkEntry {
                                title: self.title.clone(),
                                url: self.url.clone(),
                                icon: self.icon.clone(),
                            };
                            let res = match self.edit_idx {
                                Some(idx) => app.links.edit_at(idx, entry),
                                None => app.links.add(entry),
                            };
                            match res {
                                Ok(()) => {
                                    close = true;
                                    app.notify("Saved link");
                                }
                                Err(e) => {
                                    app.report_error(format!("Failed to save link: {e}"));
                                }
                            }
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        close = true;
                    }
                });
            });
        if close {
            self.open = false;
        }
    }
}
