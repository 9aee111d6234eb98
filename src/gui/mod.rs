mod confirmation_modal;
mod link_dialog;
mod news_dialog;
pub mod theme;

pub use confirmation_modal::{ConfirmationModal, DestructiveAction};
pub use link_dialog::LinkDialog;
pub use news_dialog::NewsDialog;

use crate::links::LinkStore;
use crate::news::{format_ts, NewsStore};
use crate::settings::{Settings, ThemeMode};
use crate::web_search;
use chrono::{Datelike, Local};
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

const GRID_COLUMNS: usize = 3;

pub struct PortalApp {
    pub links: LinkStore,
    pub news: NewsStore,
    pub settings: Settings,
    settings_path: String,
    edit_mode: bool,
    query: String,
    pub error: Option<String>,
    toasts: Toasts,
    theme_applied: bool,
    link_dialog: LinkDialog,
    news_dialog: NewsDialog,
    confirm: ConfirmationModal,
}

impl PortalApp {
    pub fn new(
        settings: Settings,
        links: LinkStore,
        news: NewsStore,
        settings_path: &str,
    ) -> Self {
        Self {
            links,
            news,
            settings,
            settings_path: settings_path.to_string(),
            edit_mode: false,
            query: String::new(),
            error: None,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            theme_applied: false,
            link_dialog: LinkDialog::default(),
            news_dialog: NewsDialog::default(),
            confirm: ConfirmationModal::default(),
        }
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// News delete affordances currently follow edit mode directly.
    pub fn admin_news(&self) -> bool {
        self.edit_mode
    }

    /// Flip edit mode. Not persisted; every fresh start begins read-only.
    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
        if !self.edit_mode {
            self.link_dialog.open = false;
            self.news_dialog.open = false;
        }
    }

    pub fn report_error(&mut self, msg: String) {
        tracing::error!("{msg}");
        if self.settings.enable_toasts {
            self.toasts.add(Toast {
                text: msg.clone().into(),
                kind: ToastKind::Error,
                options: ToastOptions::default()
                    .duration_in_seconds(self.settings.toast_duration as f64),
            });
        }
        self.error = Some(msg);
    }

    pub fn notify(&mut self, msg: &str) {
        self.error = None;
        if self.settings.enable_toasts {
            self.toasts.add(Toast {
                text: msg.to_string().into(),
                kind: ToastKind::Success,
                options: ToastOptions::default()
                    .duration_in_seconds(self.settings.toast_duration as f64),
            });
        }
    }

    fn open_url(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            self.report_error(format!("Failed to open {url}: {e}"));
        }
    }

    fn run_search(&mut self) {
        match web_search::open_search(&self.query) {
            Ok(true) => self.query.clear(),
            Ok(false) => {}
            Err(e) => self.report_error(format!("Failed to open search: {e}")),
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_visuals(theme::visuals_for(self.settings.theme));
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = self.settings.theme.toggled();
        self.apply_theme(ctx);
        if let Err(e) = self.settings.save(&self.settings_path) {
            self.report_error(format!("Failed to save settings: {e}"));
        }
    }

    // Only one modal may be visible; opening one closes the rest.
    fn open_link_editor(&mut self, idx: Option<usize>) {
        self.news_dialog.open = false;
        match idx {
            Some(i) => match self.links.get(i) {
                Some(entry) => {
                    let entry = entry.clone();
                    self.link_dialog.open_edit(i, &entry);
                }
                None => self.report_error(format!("no link at position {i}")),
            },
            None => self.link_dialog.open_add(),
        }
    }

    fn open_news_editor(&mut self) {
        self.link_dialog.open = false;
        self.news_dialog.open();
    }

    fn run_destructive(&mut self, action: DestructiveAction) {
        let res = match action {
            DestructiveAction::ResetLinks => self.links.reset_to_default(),
            DestructiveAction::ResetNews => self.news.reset_to_default(),
            DestructiveAction::DeleteAnnouncement { index } => self.news.remove_at(index),
        };
        match res {
            Ok(()) => {
                let msg = match action {
                    DestructiveAction::ResetLinks => "Links reset to defaults",
                    DestructiveAction::ResetNews => "Announcements reset to defaults",
                    DestructiveAction::DeleteAnnouncement { .. } => "Announcement deleted",
                };
                self.notify(msg);
            }
            Err(e) => self.report_error(format!("{}: {e}", action.label())),
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Team Portal");
                ui.separator();
                let input = ui.add(
                    egui::TextEdit::singleline(&mut self.query)
                        .hint_text("Search the web")
                        .desired_width(220.0),
                );
                let submitted =
                    input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Search").clicked() || submitted {
                    self.run_search();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let edit_label = if self.edit_mode { "✅ Done" } else { "✏ Edit" };
                    if ui.button(edit_label).clicked() {
                        self.toggle_edit_mode();
                    }
                    let theme_label = match self.settings.theme {
                        ThemeMode::Light => "🌙 Dark",
                        ThemeMode::Dark => "☀ Light",
                    };
                    if ui.button(theme_label).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });
    }

    fn link_grid(&mut self, ui: &mut egui::Ui) {
        let mut clicked: Option<usize> = None;
        egui::Grid::new("link_grid")
            .num_columns(GRID_COLUMNS)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                for (idx, entry) in self.links.entries().iter().enumerate() {
                    let label = format!("{}  {}", entry.display_icon(), entry.title);
                    let button = ui.add(
                        egui::Button::new(label).min_size(egui::vec2(150.0, 36.0)),
                    );
                    let button = if self.edit_mode {
                        button.on_hover_text("Click to edit")
                    } else {
                        button.on_hover_text(entry.url.as_str())
                    };
                    if button.clicked() {
                        clicked = Some(idx);
                    }
                    if (idx + 1) % GRID_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
        if let Some(idx) = clicked {
            if self.edit_mode {
                self.open_link_editor(Some(idx));
            } else if let Some(entry) = self.links.get(idx) {
                let url = entry.url.clone();
                self.open_url(&url);
            }
        }
    }

    fn news_feed(&mut self, ui: &mut egui::Ui) {
        let admin = self.admin_news();
        let mut delete: Option<usize> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .max_height(260.0)
            .show(ui, |ui| {
                for (stored_idx, entry) in self.news.sorted() {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(entry.text.as_str());
                            ui.small(format_ts(entry.ts));
                        });
                        if admin {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("🗑 Delete").clicked() {
                                        delete = Some(stored_idx);
                                    }
                                },
                            );
                        }
                    });
                    ui.separator();
                }
            });
        if let Some(index) = delete {
            self.confirm
                .open_for(DestructiveAction::DeleteAnnouncement { index });
        }
    }

    fn central(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(err) = &self.error {
                ui.colored_label(egui::Color32::RED, err.as_str());
            }

            ui.heading("Shortcuts");
            if self.edit_mode {
                ui.horizontal(|ui| {
                    if ui.button("➕ Add Link").clicked() {
                        self.open_link_editor(None);
                    }
                    if ui.button("Reset Links").clicked() {
                        self.confirm.open_for(DestructiveAction::ResetLinks);
                    }
                });
            }
            self.link_grid(ui);

            ui.separator();
            ui.heading("Announcements");
            if self.edit_mode {
                ui.horizontal(|ui| {
                    if ui.button("➕ Add Announcement").clicked() {
                        self.open_news_editor();
                    }
                    if ui.button("Reset Announcements").clicked() {
                        self.confirm.open_for(DestructiveAction::ResetNews);
                    }
                });
            }
            self.news_feed(ui);
        });
    }

    fn footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.small(format!("© {} Team Portal", Local::now().year()));
        });
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.apply_theme(ctx);
            self.theme_applied = true;
        }

        self.top_bar(ctx);
        self.footer(ctx);
        self.central(ctx);

        // Dialogs are taken out of self so they can borrow the app mutably.
        let mut dlg = std::mem::take(&mut self.link_dialog);
        dlg.ui(ctx, self);
        self.link_dialog = dlg;
        let mut dlg = std::mem::take(&mut self.news_dialog);
        dlg.ui(ctx, self);
        self.news_dialog = dlg;

        if let Some(action) = self.confirm.ui(ctx) {
            self.run_destructive(action);
        }

        self.toasts.show(ctx);
    }
}
