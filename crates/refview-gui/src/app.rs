use std::path::Path;
use std::sync::mpsc;

use refview_core::config::ViewerConfig;
use refview_core::events::Notification;
use refview_core::raster::Raster;
use refview_core::viewport::ViewportController;
use refview_core::zoom;

use crate::host::{ForegroundColorSink, LoggingSink};
use crate::messages::ShellEvent;
use crate::panels;
use crate::settings::{SettingsStore, TomlSettings, KEY_LAST_DIR, KEY_LAST_REF, NAMESPACE};
use crate::state::{UiState, ViewportDisplay};

pub struct RefviewApp {
    pub controller: ViewportController,
    pub ui_state: UiState,
    pub display: ViewportDisplay,
    pub settings: Box<dyn SettingsStore>,
    pub color_sink: Box<dyn ForegroundColorSink>,
    pub event_tx: mpsc::Sender<ShellEvent>,
    event_rx: mpsc::Receiver<ShellEvent>,
    pub show_about: bool,
}

impl RefviewApp {
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let mut app = Self {
            controller: ViewportController::new(ViewerConfig::default()),
            ui_state: UiState::default(),
            display: ViewportDisplay::default(),
            settings: Box::new(TomlSettings::open_default()),
            color_sink: Box::new(LoggingSink::default()),
            event_tx,
            event_rx,
            show_about: false,
        };

        // Restore the reference from the previous session.
        if let Some(path) = app.settings.get(NAMESPACE, KEY_LAST_REF) {
            app.load_image(Path::new(&path));
        }
        app
    }

    /// Decode and load an image. Decode failure clears the viewport and is
    /// reported in the status line; nothing propagates further.
    pub fn load_image(&mut self, path: &Path) {
        match Raster::open(path) {
            Ok(raster) => {
                let (w, h) = (raster.width(), raster.height());
                let notes = self.controller.set_image(Some(raster));
                self.apply_notifications(notes);
                self.ui_state.file_path = Some(path.to_path_buf());
                self.ui_state.status = match path.file_name() {
                    Some(name) => format!("{} ({w}x{h})", name.to_string_lossy()),
                    None => format!("{w}x{h}"),
                };
                self.settings
                    .set(NAMESPACE, KEY_LAST_REF, &path.to_string_lossy());
                if let Some(dir) = path.parent() {
                    self.settings
                        .set(NAMESPACE, KEY_LAST_DIR, &dir.to_string_lossy());
                }
            }
            Err(err) => {
                tracing::warn!("could not open {}: {err}", path.display());
                let notes = self.controller.set_image(None);
                self.apply_notifications(notes);
                self.ui_state.file_path = None;
                self.ui_state.status = format!("Could not open {}", path.display());
            }
        }
        self.ui_state.image_revision += 1;
    }

    /// Clear the viewport and forget the persisted reference.
    pub fn close_image(&mut self) {
        let notes = self.controller.set_image(None);
        self.apply_notifications(notes);
        self.ui_state.file_path = None;
        self.ui_state.status.clear();
        self.ui_state.image_revision += 1;
        self.settings.remove(NAMESPACE, KEY_LAST_REF);
    }

    pub fn reset_view(&mut self) {
        let notes = self.controller.reset_view();
        self.apply_notifications(notes);
    }

    /// Dispatch controller notifications to the widgets and collaborators
    /// that react to them.
    pub fn apply_notifications(&mut self, notes: Vec<Notification>) {
        for note in notes {
            match note {
                Notification::ImageChanged(has_image) => {
                    self.ui_state.controls_enabled = has_image;
                }
                Notification::ColorPicked(color) => {
                    self.color_sink.set_foreground_color(color.to_bgra_f32());
                    self.ui_state.foreground_color = Some(color);
                }
                Notification::SliderReset(ratio) => {
                    self.ui_state.slider_pos = zoom::zoom_to_slider(ratio);
                }
                Notification::Repaint => {
                    self.ui_state.needs_repaint = true;
                }
            }
        }
    }

    fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                ShellEvent::OpenPicked(path) => self.load_image(&path),
            }
        }
    }
}

impl eframe::App for RefviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.show_about {
            egui::Window::new("About Reference Viewer")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("Keeps a reference image in view while you work.");
                    ui.add_space(4.0);
                    ui.label("Drag to pan, Ctrl+drag or wheel to zoom,");
                    ui.label("Alt+drag to pick a color.");
                    ui.add_space(8.0);
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }

        if std::mem::take(&mut self.ui_state.needs_repaint) {
            ctx.request_repaint();
        }
    }
}
