use crate::app::RefviewApp;

pub fn show(ctx: &egui::Context, app: &mut RefviewApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            if let Some(image) = app.controller.image() {
                ui.label(format!("{}x{}", image.width(), image.height()));
                ui.separator();
                ui.label(format!("Zoom: {:.0}%", app.controller.zoom() * 100.0));
                ui.separator();
            }
            if let Some(color) = app.ui_state.foreground_color {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(
                    rect,
                    2.0,
                    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a),
                );
                ui.label(format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b));
                ui.separator();
            }
            ui.label(&app.ui_state.status);
        });
        ui.add_space(2.0);
    });
}
