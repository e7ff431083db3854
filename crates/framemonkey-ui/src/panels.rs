//! Option panels around the selector: file row, time fields, quality and save.

use crate::range_selector::TimeLabels;
use crate::theme::Theme;
use egui::{self, RichText};
use framemonkey_media::{CompressOptions, MAX_SPEED, MIN_SPEED};

// ── State ───────────────────────────────────────────────────────

/// Editable form state kept between frames.
#[derive(Debug, Clone, Default)]
pub struct PanelState {
    pub input_path: String,
    pub output_path: String,
    pub options: CompressOptions,
    /// Status line under the save row.
    pub status: Option<Status>,
    /// Whether a compression is currently running.
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

// ── Actions ─────────────────────────────────────────────────────

/// Actions produced by the panels for the app to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// "Browse" was clicked.
    Browse,
    /// "Save" was clicked.
    Save,
    /// "Cancel" was clicked while compressing.
    Cancel,
}

// ── Rendering ───────────────────────────────────────────────────

/// File path label and Browse button.
pub fn show_file_row(ui: &mut egui::Ui, state: &PanelState) -> Option<PanelAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let label = if state.input_path.is_empty() {
            RichText::new("No file selected").color(Theme::t3())
        } else {
            RichText::new(&state.input_path).color(Theme::t1())
        };
        ui.label(label.size(Theme::FONT_SM));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(!state.busy, egui::Button::new("Browse")).clicked() {
                action = Some(PanelAction::Browse);
            }
        });
    });
    action
}

/// Read-only current/start/stop fields.
pub fn show_time_fields(ui: &mut egui::Ui, labels: &TimeLabels) {
    egui::Grid::new("time_fields")
        .num_columns(3)
        .spacing([Theme::SPACE_MD, Theme::SPACE_XS])
        .show(ui, |ui| {
            for caption in ["Current Time", "Start Time", "Stop Time"] {
                ui.label(RichText::new(caption).size(Theme::FONT_XS).color(Theme::t3()));
            }
            ui.end_row();
            for value in [&labels.current, &labels.start, &labels.end] {
                ui.monospace(value.as_str());
            }
            ui.end_row();
        });
}

/// Trim / two-pass / hardware acceleration checkboxes and size/speed fields.
pub fn show_quality(ui: &mut egui::Ui, options: &mut CompressOptions) {
    ui.checkbox(&mut options.trim, "Trim Video");
    ui.checkbox(&mut options.two_pass, "Encode Two Passes");
    ui.checkbox(&mut options.hw_accel, "Enable Hardware Acceleration");

    ui.add_space(Theme::SPACE_SM);

    egui::Grid::new("quality_fields")
        .num_columns(3)
        .spacing([Theme::SPACE_SM, Theme::SPACE_XS])
        .show(ui, |ui| {
            ui.label("Size");
            ui.add(
                egui::DragValue::new(&mut options.target_size_mb)
                    .range(0.1..=100_000.0)
                    .speed(0.5),
            );
            ui.label("MB");
            ui.end_row();

            ui.label("Quality");
            ui.add(egui::Slider::new(&mut options.speed, MIN_SPEED..=MAX_SPEED));
            ui.label(
                RichText::new("1-Fast & poor, 6-Slow & good")
                    .size(Theme::FONT_XS)
                    .color(Theme::t3()),
            );
            ui.end_row();
        });
}

/// Output path field with Save (or Cancel while busy) and the status line.
pub fn show_save_row(ui: &mut egui::Ui, state: &mut PanelState) -> Option<PanelAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.output_path)
                .desired_width(ui.available_width() - 70.0)
                .hint_text("Output file..."),
        );
        if state.busy {
            if ui.button("Cancel").clicked() {
                action = Some(PanelAction::Cancel);
            }
        } else {
            let can_save = !state.input_path.is_empty() && !state.output_path.is_empty();
            if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                action = Some(PanelAction::Save);
            }
        }
    });

    match &state.status {
        Some(Status::Info(text)) => {
            ui.label(RichText::new(text).size(Theme::FONT_XS).color(Theme::green()));
        }
        Some(Status::Error(text)) => {
            ui.label(RichText::new(text).size(Theme::FONT_XS).color(Theme::red()));
        }
        None => {}
    }

    action
}
