use crate::app::RefviewApp;

pub fn show(ctx: &egui::Context, app: &mut RefviewApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let close_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::W);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add(
                        egui::Button::new("Open...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    super::open_image_dialog(app);
                }

                if ui
                    .add_enabled(
                        app.ui_state.controls_enabled,
                        egui::Button::new("Close image")
                            .shortcut_text(ctx.format_shortcut(&close_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.close_image();
                }

                ui.separator();

                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui
                    .add_enabled(
                        app.ui_state.controls_enabled,
                        egui::Button::new("Reset view"),
                    )
                    .clicked()
                {
                    ui.close();
                    app.reset_view();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            super::open_image_dialog(app);
        }
        if app.ui_state.controls_enabled && ctx.input_mut(|i| i.consume_shortcut(&close_shortcut)) {
            app.close_image();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
