use chrono::{DateTime, Local};
use eframe::egui;
use tracing::error;

use crate::config::Config;
use crate::danmu::Danmu;
use crate::filter;
use crate::fuzzy;
use crate::storage::{self, FileStore};

pub struct SettingsApp {
    store: FileStore,
    config: Config,
    dirty: bool,
    status: Status,
    keyword_query: String,
    new_keyword: String,
    preview_text: String,
    preview_time: f64,
}

enum Status {
    Idle,
    Saved(DateTime<Local>),
    Failed(String),
}

impl SettingsApp {
    pub fn new(store: FileStore, config: Config) -> Self {
        Self {
            store,
            config,
            dirty: false,
            status: Status::Idle,
            keyword_query: String::new(),
            new_keyword: String::new(),
            preview_text: String::new(),
            preview_time: 0.0,
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                match storage::save(&mut self.store, &self.config) {
                    Ok(()) => {
                        self.dirty = false;
                        self.status = Status::Saved(Local::now());
                    }
                    Err(e) => {
                        error!("saving configuration failed: {e}");
                        self.status = Status::Failed(e.to_string());
                    }
                }
            }

            if ui.button("Reset to defaults").clicked() {
                self.config = Config::default();
                self.dirty = true;
            }

            match &self.status {
                Status::Idle => {}
                Status::Saved(at) => {
                    ui.label(format!("Saved {}", at.format("%H:%M:%S")));
                }
                Status::Failed(msg) => {
                    ui.colored_label(egui::Color32::RED, msg);
                }
            }

            if self.dirty {
                ui.label("(unsaved changes)");
            }
        });
    }

    fn rendering_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Rendering");

        let mut changed = false;
        egui::Grid::new("rendering")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                changed |= drag_row(ui, "Width", &mut self.config.width, 1.0).changed();
                changed |= drag_row(ui, "Height", &mut self.config.height, 1.0).changed();
                changed |= text_row(ui, "Font", &mut self.config.font).changed();
                changed |= drag_row(ui, "Font size", &mut self.config.font_size, 1.0).changed();
                changed |=
                    drag_row(ui, "Width ratio", &mut self.config.width_ratio, 0.01).changed();
                changed |=
                    drag_row(ui, "Horizontal gap", &mut self.config.horizontal_gap, 0.5).changed();
                changed |= drag_row(ui, "Duration (s)", &mut self.config.duration, 0.1).changed();
                changed |= drag_row(ui, "Lane size", &mut self.config.lane_size, 1.0).changed();
                changed |=
                    slider_row(ui, "Float percentage", &mut self.config.float_percentage).changed();
                changed |= slider_row(ui, "Alpha", &mut self.config.alpha).changed();
                changed |= drag_row(ui, "Outline", &mut self.config.outline, 0.05).changed();
                changed |= check_row(ui, "Bold", &mut self.config.bold).changed();
                changed |=
                    drag_row(ui, "Time offset (s)", &mut self.config.time_offset, 0.1).changed();
            });

        self.dirty |= changed;
    }

    fn deny_list_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Deny list");

        ui.add(
            egui::TextEdit::singleline(&mut self.keyword_query)
                .hint_text("Search keywords...")
                .desired_width(f32::INFINITY),
        );

        // Indices stay valid while iterating; the removal happens after
        let results = fuzzy::search(&self.keyword_query, &self.config.deny_list);
        let mut remove: Option<usize> = None;
        for (idx, _score) in results {
            ui.horizontal(|ui| {
                if ui.small_button("✕").clicked() {
                    remove = Some(idx);
                }
                ui.label(&self.config.deny_list[idx]);
            });
        }
        if let Some(idx) = remove {
            self.config.deny_list.remove(idx);
            self.dirty = true;
        }

        ui.horizontal(|ui| {
            let input =
                ui.add(egui::TextEdit::singleline(&mut self.new_keyword).hint_text("New keyword"));
            let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Add").clicked() || submitted {
                let word = self.new_keyword.trim().to_string();
                if !word.is_empty() && !self.config.deny_list.contains(&word) {
                    self.config.deny_list.push(word);
                    self.dirty = true;
                }
                self.new_keyword.clear();
            }
        });
    }

    fn preview_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Filter preview");

        ui.horizontal(|ui| {
            ui.label("At");
            ui.add(
                egui::DragValue::new(&mut self.preview_time)
                    .speed(0.1)
                    .suffix(" s"),
            );
            ui.add(
                egui::TextEdit::singleline(&mut self.preview_text)
                    .hint_text("Type a comment...")
                    .desired_width(f32::INFINITY),
            );
        });

        let sample = Danmu {
            timeline_s: self.preview_time,
            content: self.preview_text.clone(),
        };
        if filter::passes(&self.config, &sample) {
            ui.colored_label(egui::Color32::DARK_GREEN, "visible");
        } else {
            ui.colored_label(egui::Color32::GRAY, "suppressed");
        }
    }
}

impl eframe::App for SettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.toolbar(ui);
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.rendering_section(ui);
                ui.separator();
                self.deny_list_section(ui);
                ui.separator();
                self.preview_section(ui);
            });
        });
    }
}

// Row helpers keep every settings field in the same compact two-column shape
// instead of restyling each widget at its call site.

fn drag_row(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut impl egui::emath::Numeric,
    speed: f64,
) -> egui::Response {
    ui.label(label);
    let response = ui.add(egui::DragValue::new(value).speed(speed));
    ui.end_row();
    response
}

fn slider_row(ui: &mut egui::Ui, label: &str, value: &mut f64) -> egui::Response {
    ui.label(label);
    let response = ui.add(egui::Slider::new(value, 0.0..=1.0));
    ui.end_row();
    response
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) -> egui::Response {
    ui.label(label);
    let response = ui.add(egui::TextEdit::singleline(value).desired_width(160.0));
    ui.end_row();
    response
}

fn check_row(ui: &mut egui::Ui, label: &str, value: &mut bool) -> egui::Response {
    ui.label(label);
    let response = ui.checkbox(value, "");
    ui.end_row();
    response
}
