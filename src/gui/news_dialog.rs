use crate::gui::PortalApp;
use eframe::egui;

/// Modal editor for a new announcement. Announcements are append-only; the
/// timestamp is taken at save time.
#[derive(Default)]
pub struct NewsDialog {
    pub open: bool,
    text: String,
    error: Option<String>,
}

impl NewsDialog {
    pub fn open(&mut self) {
        self.text.clear();
        self.error = None;
        self.open = true;
    }

    pub fn ui(&mut self, ctx: &egui::Context, app: &mut PortalApp) {
        if !self.open {
            return;
        }
        let mut close = false;
        egui::Window::new("Add Announcement")
            .open(&mut self.open)
            .default_size((360.0, 200.0))
            .show(ctx, |ui| {
                ui.label("Text");
                ui.add(
                    egui::TextEdit::multiline(&mut self.text)
                        .desired_width(f32::INFINITY)
                        .desired_rows(4),
                );
                if let Some(err) = &self.error {
                    ui.colored_label(egui::Color32::RED, err);
                }
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        if self.text.trim().is_empty() {
                            self.error = Some("Text required".into());
                        } else {
                            match app.news.add(&self.text) {
                                Ok(()) => {
                                    close = true;
                                    app.notify("Saved announcement");
                                }
                                Err(e) => {
                                    app.report_error(format!("Failed to save announcement: {e}"));
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
