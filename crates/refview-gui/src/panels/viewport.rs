use refview_core::events::{InteractionMode, Modifiers, PointerEvent, WheelEvent};
use refview_core::geometry::{Size, Vec2};
use refview_core::render::{self, VisibleRegion};

use crate::app::RefviewApp;
use crate::convert::raster_to_color_image;

pub fn show(ctx: &egui::Context, app: &mut RefviewApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        sync_viewport_size(app, rect);
        sync_texture(ctx, app);
        handle_dropped_files(ctx, app);

        if app.controller.has_image() {
            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            handle_pointer(ui, &response, app, rect);
            handle_wheel(ui, &response, app, rect);
            update_cursor(ui, &response, app);

            if let (Some(texture), Some(region)) = (
                app.display.texture.as_ref(),
                render::visible_region(&app.controller),
            ) {
                draw_region(ui, texture.id(), &region, rect);
            }

            draw_pick_overlay(ui, app, rect);
        } else {
            show_placeholder(ui);
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Keep the controller's viewport geometry in sync with the panel; a size
/// change re-fits and re-centers the image.
fn sync_viewport_size(app: &mut RefviewApp, rect: egui::Rect) {
    let size = Size::new(rect.width(), rect.height());
    if app.controller.viewport() != size {
        let notes = app.controller.resized(size);
        app.apply_notifications(notes);
    }
}

/// Re-upload the texture when the loaded image has been replaced.
fn sync_texture(ctx: &egui::Context, app: &mut RefviewApp) {
    if app.display.uploaded_revision == Some(app.ui_state.image_revision) {
        return;
    }
    app.display.texture = app.controller.image().map(|raster| {
        ctx.load_texture(
            "reference",
            raster_to_color_image(raster),
            egui::TextureOptions::LINEAR,
        )
    });
    app.display.uploaded_revision = Some(app.ui_state.image_revision);
}

/// Drag-and-drop: only the first local file of a payload is used.
fn handle_dropped_files(ctx: &egui::Context, app: &mut RefviewApp) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());
    if let Some(path) = dropped.into_iter().find_map(|f| f.path) {
        app.load_image(&path);
    }
}

fn current_modifiers(ui: &egui::Ui) -> Modifiers {
    let m = ui.input(|i| i.modifiers);
    Modifiers {
        pick: m.alt,
        zoom: m.command,
    }
}

/// Panel-local coordinates, matching the controller's viewport space.
fn to_view(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

fn handle_pointer(ui: &egui::Ui, response: &egui::Response, app: &mut RefviewApp, rect: egui::Rect) {
    let modifiers = current_modifiers(ui);
    let pointer_pos = ui.input(|i| i.pointer.interact_pos());
    let pressed = ui.input(|i| i.pointer.primary_pressed());
    let released = ui.input(|i| i.pointer.primary_released());
    let delta = ui.input(|i| i.pointer.delta());

    if pressed && response.hovered() {
        if let Some(pos) = pointer_pos {
            let notes = app.controller.pointer_pressed(PointerEvent {
                pos: to_view(pos, rect),
                modifiers,
            });
            app.apply_notifications(notes);
        }
    }

    if app.controller.is_dragging() {
        if delta != egui::Vec2::ZERO {
            if let Some(pos) = pointer_pos {
                let notes = app.controller.pointer_moved(PointerEvent {
                    pos: to_view(pos, rect),
                    modifiers,
                });
                app.apply_notifications(notes);
            }
        }
        if released {
            let pos = pointer_pos.map(|p| to_view(p, rect)).unwrap_or_default();
            let notes = app
                .controller
                .pointer_released(PointerEvent { pos, modifiers });
            app.apply_notifications(notes);
        }
    }
}

fn handle_wheel(ui: &egui::Ui, response: &egui::Response, app: &mut RefviewApp, rect: egui::Rect) {
    if !response.hovered() {
        return;
    }
    let delta_y = ui.input(|i| i.raw_scroll_delta.y);
    if delta_y == 0.0 {
        return;
    }
    let Some(pos) = ui.input(|i| i.pointer.hover_pos()) else {
        return;
    };
    let notes = app.controller.wheel(WheelEvent {
        pos: to_view(pos, rect),
        delta_y,
    });
    app.apply_notifications(notes);
}

fn update_cursor(ui: &egui::Ui, response: &egui::Response, app: &RefviewApp) {
    if !response.hovered() && !app.controller.is_dragging() {
        return;
    }
    let icon = match app.controller.interaction_mode(current_modifiers(ui)) {
        InteractionMode::Panning => egui::CursorIcon::Grabbing,
        InteractionMode::Zooming => egui::CursorIcon::ResizeVertical,
        InteractionMode::Picking | InteractionMode::Idle => egui::CursorIcon::Crosshair,
    };
    ui.ctx().set_cursor_icon(icon);
}

fn draw_region(ui: &egui::Ui, texture_id: egui::TextureId, region: &VisibleRegion, rect: egui::Rect) {
    let dest = egui::Rect::from_min_max(
        rect.min + egui::vec2(region.dest.min.x, region.dest.min.y),
        rect.min + egui::vec2(region.dest.max.x, region.dest.max.y),
    );
    let uv = egui::Rect::from_min_max(
        egui::pos2(region.uv.min.x, region.uv.min.y),
        egui::pos2(region.uv.max.x, region.uv.max.y),
    );
    ui.painter()
        .with_clip_rect(rect)
        .image(texture_id, dest, uv, egui::Color32::WHITE);
}

fn draw_pick_overlay(ui: &egui::Ui, app: &RefviewApp, rect: egui::Rect) {
    let Some(overlay) = render::pick_overlay(&app.controller) else {
        return;
    };
    let painter = ui.painter().with_clip_rect(rect);

    let center = rect.min + egui::vec2(overlay.marker.x, overlay.marker.y);
    painter.circle_stroke(
        center,
        overlay.radius,
        egui::Stroke::new(3.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, 128)),
    );

    if let Some(color) = overlay.swatch {
        let strip = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width(), overlay.strip_height),
        );
        painter.rect_filled(
            strip,
            0.0,
            egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a),
        );
    }
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image or drop one here")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
