//! FrameMonkey - trim and compress a video
//!
//! Entry point and main application loop.

mod settings;

use anyhow::Result;
use eframe::egui;
use framemonkey_media::{
    default_output_path, CompressEvent, CompressHandle, MediaProbe, PlaybackEngine, PreviewPlayer,
};
use framemonkey_ui::{
    panels, show_range_selector, EditorSession, PanelAction, PanelState, Status, Theme,
};
use settings::Settings;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "mov", "avi", "webm", "m4v"];

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("FrameMonkey starting...");

    // Optional video file on the command line
    let video_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([550.0, 570.0])
            .with_resizable(false)
            .with_title("FrameMonkey"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "FrameMonkey",
        options,
        Box::new(move |cc| Ok(Box::new(FrameMonkeyApp::new(cc, video_path)))),
    )?;

    Ok(())
}

struct FrameMonkeyApp {
    session: EditorSession<PreviewPlayer>,
    panels: PanelState,
    settings: Settings,
    settings_path: PathBuf,
    job: Option<CompressHandle>,
}

impl FrameMonkeyApp {
    fn new(cc: &eframe::CreationContext<'_>, video_path: Option<PathBuf>) -> Self {
        Theme::apply(&cc.egui_ctx);

        let settings_path = Settings::default_path();
        let settings = Settings::load_or_default(&settings_path);

        let mut app = Self {
            session: EditorSession::new(PreviewPlayer::new()),
            panels: PanelState {
                options: settings.options.clone(),
                ..PanelState::default()
            },
            settings,
            settings_path,
            job: None,
        };

        if !MediaProbe::is_available() {
            warn!("ffprobe not found on PATH");
            app.panels.status = Some(Status::Error(
                "ffprobe was not found in PATH. Install FFmpeg to open videos.".into(),
            ));
        } else if let Some(path) = video_path {
            app.open_media(&path);
        }
        app
    }

    fn save_settings(&mut self) {
        self.settings.options = self.panels.options.clone();
        if let Err(e) = self.settings.save(&self.settings_path) {
            warn!("Failed to save settings: {e}");
        }
    }

    fn browse(&mut self) {
        let mut dialog = rfd::FileDialog::new().add_filter("Video", VIDEO_EXTENSIONS);
        if let Some(dir) = &self.settings.last_directory {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            self.open_media(&path);
        }
    }

    fn open_media(&mut self, path: &Path) {
        match MediaProbe::probe(path) {
            Ok(probe) => {
                self.session.player_mut().load(probe.duration_seconds);
                self.session.set_media_path(&probe.path);
                self.panels.input_path = probe.path.display().to_string();
                self.panels.output_path = default_output_path(&probe.path).display().to_string();
                self.panels.status = None;
                self.settings.last_directory = probe.path.parent().map(Path::to_path_buf);
                self.save_settings();
            }
            Err(e) => {
                error!(path = %path.display(), "Failed to open video: {e}");
                self.panels.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    fn start_compression(&mut self) {
        let output = PathBuf::from(self.panels.output_path.trim());
        let launched = self
            .session
            .compress_job(output, self.panels.options.clone())
            .and_then(|job| job.spawn(&self.settings.compressor_program));

        match launched {
            Ok(handle) => {
                info!(pid = handle.id(), "Compression running");
                self.panels.status = Some(Status::Info("Compressing...".into()));
                self.panels.busy = true;
                self.job = Some(handle);
                self.save_settings();
            }
            Err(e) => {
                error!("Compression not started: {e}");
                self.panels.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    fn cancel_compression(&mut self) {
        if let Some(mut handle) = self.job.take() {
            if let Err(e) = handle.kill() {
                warn!("Failed to stop compression: {e}");
            }
        }
        self.panels.busy = false;
        self.panels.status = Some(Status::Error("Compression cancelled".into()));
    }

    fn poll_compression(&mut self) {
        let Some(handle) = self.job.as_mut() else {
            return;
        };
        let events = match handle.poll() {
            Ok(events) => events,
            Err(e) => {
                error!("Lost track of compression: {e}");
                self.job = None;
                self.panels.busy = false;
                return;
            }
        };
        for event in events {
            match event {
                CompressEvent::Output(line) => {
                    info!(target: "compressor", "{line}");
                    self.panels.status = Some(Status::Info(line));
                }
                CompressEvent::Finished { success: true, .. } => {
                    self.panels.status = Some(Status::Info(format!(
                        "Saved {}",
                        self.panels.output_path
                    )));
                }
                CompressEvent::Finished { code, .. } => {
                    let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                    self.panels.status =
                        Some(Status::Error(format!("Compression failed (exit {code})")));
                }
            }
        }
        if handle.is_finished() {
            self.job = None;
            self.panels.busy = false;
        }
    }

    fn handle_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::Browse => self.browse(),
            PanelAction::Save => self.start_compression(),
            PanelAction::Cancel => self.cancel_compression(),
        }
    }
}

impl eframe::App for FrameMonkeyApp {
    fn on_exit(&mut self) {
        if self.job.is_some() {
            info!("Window closed while compressing");
            self.cancel_compression();
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle playback
        self.session.player_mut().tick(Instant::now());
        if self.session.sync_playback() {
            info!("End of video reached");
        }
        if self.session.player().is_playing() {
            ctx.request_repaint();
        }

        self.poll_compression();
        if self.job.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(panels::show_file_row(ui, &self.panels));
            ui.add_space(Theme::SPACE_SM);

            // Preview area; frames are not decoded, only the clock runs
            let preview_height = 200.0;
            let (response, painter) = ui.allocate_painter(
                egui::vec2(ui.available_width(), preview_height),
                egui::Sense::click(),
            );
            painter.rect_filled(response.rect, 0.0, Theme::bg1());
            let caption = if self.session.media_path().is_some() {
                if self.session.player().is_playing() {
                    "Playing - click to pause"
                } else {
                    "Paused - click to play"
                }
            } else {
                "No video loaded"
            };
            painter.text(
                response.rect.center(),
                egui::Align2::CENTER_CENTER,
                caption,
                egui::FontId::proportional(Theme::FONT_SM),
                Theme::t3(),
            );
            if response.clicked() {
                let player = self.session.player_mut();
                if player.is_playing() {
                    player.pause();
                } else {
                    player.play();
                }
            }

            ui.add_space(Theme::SPACE_SM);
            let events = show_range_selector(ui, self.session.selector_mut());
            self.session.handle_range_events(events);

            ui.add_space(Theme::SPACE_XS);
            panels::show_time_fields(ui, self.session.selector().labels());

            ui.add_space(Theme::SPACE_MD);
            panels::show_quality(ui, &mut self.panels.options);

            ui.add_space(Theme::SPACE_MD);
            actions.extend(panels::show_save_row(ui, &mut self.panels));
        });

        for action in actions {
            self.handle_action(action);
        }
    }
}
