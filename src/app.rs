use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText};

use crate::ingest::ingest_batch;
use crate::model::{ChecklistStore, Item};

const PLACEHOLDER_TEXT: &str = "Drag and drop files here or use File -> Open to add files.";

const ABOUT_TEXT: &str = "Checklist Maker v0.1.0\n\n\
    Build an ad-hoc checklist of files by dragging them into the window.";

const HELP_TEXT: &str = "To use this application:\n\n\
    - Drag and drop files here or use File -> Open to add files.\n\
    - Click an item to toggle its checkbox.\n\
    - Right-click an item to remove it.\n\
    - Use Edit -> Remove Selected Items to remove all checked items.\n\
    - Use Edit -> Clear All Items to remove every item.";

/// Row interactions are collected during rendering and applied afterwards,
/// so the store is never mutated mid-pass.
#[derive(Debug, Clone, Copy)]
enum RowAction {
    Toggle(usize),
    Remove(usize),
}

#[derive(Default)]
pub struct ChecklistApp {
    store: ChecklistStore,
    status: String,
    show_about: bool,
    show_help: bool,
}

impl ChecklistApp {
    fn open_files(&mut self) {
        if let Some(paths) = rfd::FileDialog::new().pick_files() {
            self.ingest_paths(&paths);
        }
    }

    fn open_folder(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            self.ingest_paths(&[path]);
        }
    }

    fn ingest_paths(&mut self, paths: &[PathBuf]) {
        if paths.is_empty() {
            return;
        }
        let outcome = ingest_batch(&mut self.store, paths);
        self.status = outcome.status_line();
    }

    fn remove_selected(&mut self) {
        let removed = self.store.remove_selected();
        self.status = format!("Removed {removed} item(s)");
    }

    fn clear_all(&mut self) {
        self.store.clear();
        self.status = "Cleared all items".to_string();
    }

    fn handle_drops(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        // Entries without a path carry a non-file payload; ignore them.
        let paths: Vec<PathBuf> = dropped.into_iter().filter_map(|file| file.path).collect();
        self.ingest_paths(&paths);
    }

    fn apply(&mut self, action: RowAction) {
        match action {
            RowAction::Toggle(index) => self.store.toggle(index),
            RowAction::Remove(index) => {
                if self.store.remove_at(index).is_some() {
                    self.status = "Removed 1 item(s)".to_string();
                }
            }
        }
    }

    fn render_row(&self, ui: &mut egui::Ui, index: usize, item: &Item) -> Option<RowAction> {
        let mut action = None;

        let inner = ui.horizontal(|ui| {
            let mut checked = item.selected;
            if ui.checkbox(&mut checked, "").changed() {
                action = Some(RowAction::Toggle(index));
            }
            ui.label(item.icon);
            ui.label(&item.display_name);
        });

        let response = inner.response.interact(egui::Sense::click());
        if response.clicked() {
            action = Some(RowAction::Toggle(index));
        }
        response.context_menu(|ui| {
            if ui.button("Remove").clicked() {
                action = Some(RowAction::Remove(index));
                ui.close_menu();
            }
        });

        action
    }

    fn render_list(&mut self, ui: &mut egui::Ui) {
        let mut action = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for index in 0..self.store.len() {
                    let Some(item) = self.store.get(index).cloned() else {
                        continue;
                    };
                    if let Some(a) = self.render_row(ui, index, &item) {
                        action = Some(a);
                    }
                }
            });
        if let Some(action) = action {
            self.apply(action);
        }
    }

    fn render_placeholder(&self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new(PLACEHOLDER_TEXT)
                    .italics()
                    .color(Color32::GRAY),
            );
        });
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Files…").clicked() {
                    self.open_files();
                    ui.close_menu();
                }
                if ui.button("Open Folder…").clicked() {
                    self.open_folder();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Remove Selected Items").clicked() {
                    self.remove_selected();
                    ui.close_menu();
                }
                if ui.button("Clear All Items").clicked() {
                    self.clear_all();
                    ui.close_menu();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    self.show_about = true;
                    ui.close_menu();
                }
                if ui.button("Help").clicked() {
                    self.show_help = true;
                    ui.close_menu();
                }
            });

            if !self.status.is_empty() {
                ui.separator();
                ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
            }
        });
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        egui::Window::new("About")
            .open(&mut self.show_about)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(ABOUT_TEXT);
            });

        egui::Window::new("Help")
            .open(&mut self.show_help)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(HELP_TEXT);
            });
    }
}

impl eframe::App for ChecklistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_drops(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            self.render_menu_bar(ctx, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.store.is_empty() {
                self.render_placeholder(ui);
            } else {
                self.render_list(ui);
            }
        });

        self.render_dialogs(ctx);
    }
}
