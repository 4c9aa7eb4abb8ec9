use refview_core::consts::SLIDER_MAX;
use refview_core::zoom::{self, ZOOM_PRESETS};

use crate::app::RefviewApp;

pub fn show(ctx: &egui::Context, app: &mut RefviewApp) {
    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        let enabled = app.ui_state.controls_enabled;
        ui.add_space(4.0);

        // Button row
        ui.horizontal(|ui| {
            if ui.button("Open...").clicked() {
                super::open_image_dialog(app);
            }
            if ui
                .add_enabled(enabled, egui::Button::new("Reset view"))
                .clicked()
            {
                app.reset_view();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add_enabled(enabled, egui::Button::new("Close")).clicked() {
                    app.close_image();
                }
            });
        });

        // Zoom row
        ui.horizontal(|ui| {
            ui.add_enabled_ui(enabled, |ui| {
                let selected = ZOOM_PRESETS[app.ui_state.preset_index].label();
                egui::ComboBox::from_id_salt("zoom_presets")
                    .selected_text(selected)
                    .show_ui(ui, |ui| {
                        for (index, preset) in ZOOM_PRESETS.iter().enumerate() {
                            if ui
                                .selectable_value(
                                    &mut app.ui_state.preset_index,
                                    index,
                                    preset.label(),
                                )
                                .clicked()
                            {
                                let notes = app.controller.apply_preset(*preset);
                                app.apply_notifications(notes);
                            }
                        }
                    });

                ui.spacing_mut().slider_width = (ui.available_width() - 16.0).max(100.0);
                let mut pos = app.ui_state.slider_pos;
                let response = ui.add(
                    egui::Slider::new(&mut pos, 0..=SLIDER_MAX)
                        .show_value(false)
                        .clamping(egui::SliderClamping::Always),
                );
                if response.changed() {
                    app.ui_state.slider_pos = pos;
                    // The slider's own edits do not echo a reset back into it.
                    let notes = app
                        .controller
                        .change_zoom(zoom::slider_to_zoom(pos), false, false);
                    app.apply_notifications(notes);
                }
            });
        });

        ui.add_space(4.0);
    });
}
